//! CLI domain: parse, route, output, and presentation only.
//! Tree and image work lives in the pipeline; this layer resolves the selection and formats results.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat, SelectionArgs};
pub use presentation::{format_candidates, format_outcome};
pub use route::RunContext;
