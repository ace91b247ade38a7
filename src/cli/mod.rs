pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{
    export, export_from_cli, handle_command, init_logging, run_until_interrupted, RunOutcome,
};
