//! CLI domain: parse and output rendering only.
//! No domain orchestration; the binary wires parsed arguments into the core.

mod output;
mod parse;

pub use output::{format_summary, map_error};
pub use parse::Cli;
