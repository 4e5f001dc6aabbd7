//! Linked property command

use std::collections::BTreeMap;

use clap::Args;

use crate::output::{api_error, format_output};
use crate::{AppContext, Cli};
use arbor_core::Direction;

#[derive(Args)]
pub struct LinkedArgs {
    /// Node ids
    pub nodes: Vec<String>,

    /// Linked property: containedInPlace, specializationOf
    #[arg(short, long)]
    pub property: String,

    /// Direction: out, in
    #[arg(long, default_value = "out")]
    pub direction: String,

    /// Filter as key=value, e.g. typeOf=City (can be used multiple times)
    #[arg(long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    if key.is_empty() || value.is_empty() {
        return Err(format!("expected key=value, got '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

pub async fn run(args: &LinkedArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let direction: Direction = args.direction.parse()?;
    let filter: BTreeMap<String, String> = args.filters.iter().cloned().collect();

    let response = ctx
        .service
        .linked_property_values(&args.nodes, &args.property, direction, &filter)
        .await
        .map_err(api_error)?;

    println!("{}", format_output(&response, cli.output_format())?);
    Ok(())
}
