//! Property value command

use clap::Args;

use crate::output::{api_error, format_output};
use crate::{AppContext, Cli};
use arbor_core::Direction;

#[derive(Args)]
pub struct ValuesArgs {
    /// Node ids
    pub nodes: Vec<String>,

    /// Property to fetch (can be used multiple times)
    #[arg(short, long = "property", required = true)]
    pub properties: Vec<String>,

    /// Direction: out, in
    #[arg(long, default_value = "out")]
    pub direction: String,

    /// Values per node and property (0 = configured default)
    #[arg(short, long, default_value = "0")]
    pub limit: usize,

    /// Continuation token from a previous page
    #[arg(short, long, default_value = "")]
    pub token: String,
}

pub async fn run(args: &ValuesArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let direction: Direction = args.direction.parse()?;
    tracing::debug!("Fetching {:?} ({}) for {} nodes", args.properties, direction, args.nodes.len());

    let response = ctx
        .service
        .property_values(
            &args.nodes,
            &args.properties,
            direction,
            ctx.limit(args.limit),
            &args.token,
        )
        .await
        .map_err(api_error)?;

    println!("{}", format_output(&response, cli.output_format())?);
    Ok(())
}
