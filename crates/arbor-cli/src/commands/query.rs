//! Property expression command

use clap::Args;

use crate::output::{api_error, format_output};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct QueryArgs {
    /// Node ids
    pub nodes: Vec<String>,

    /// Property expression, e.g. `->name` or `<-containedInPlace+{typeOf:City}`
    #[arg(short, long, allow_hyphen_values = true)]
    pub expression: String,

    /// Values per node and property (0 = configured default)
    #[arg(short, long, default_value = "0")]
    pub limit: usize,

    /// Continuation token from a previous page
    #[arg(short, long, default_value = "")]
    pub token: String,
}

pub async fn run(args: &QueryArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let response = ctx
        .service
        .query(&args.nodes, &args.expression, ctx.limit(args.limit), &args.token)
        .await
        .map_err(api_error)?;

    println!("{}", format_output(&response, cli.output_format())?);
    Ok(())
}
