#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod fs;
pub mod layout;
pub mod module;
pub mod package;
pub mod podspec;
pub mod steps;
pub mod verify;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::NewModuleCli::parse();
    init_logger(cli.args.debug);
    steps::execute(cli.args)
}

/// Logs to stderr at `warn`, or `debug` with `--debug`. `RUST_LOG` overrides both.
fn init_logger(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };

    let env = env_logger::Env::default().default_filter_or(default_filter);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
