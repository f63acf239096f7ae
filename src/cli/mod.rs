mod args;
mod commands;
mod config_cmd;
mod operations;
mod setup;
mod util;
mod write;

pub use args::Cli;
