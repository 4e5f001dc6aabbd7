pub mod completions;
pub mod config;
pub mod linked;
pub mod query;
pub mod values;
