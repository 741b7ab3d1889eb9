mod cli;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use selpg::SelpgError;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                eprintln!("\n{}", cli::usage());
                process::exit(1);
            }
        },
    };

    if cli.log {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let code = match execute(cli) {
        Ok(()) => 0,
        Err(err) => {
            report_error(&err);
            1
        }
    };
    process::exit(code);
}

fn execute(cli: Cli) -> Result<()> {
    let job = cli.into_config().validate()?;
    selpg::run(job)?;
    Ok(())
}

fn report_error(err: &anyhow::Error) {
    let selpg_err = err.downcast_ref::<SelpgError>();
    match selpg_err {
        Some(e) if e.is_warning() => eprintln!("Warning: {}", e),
        _ => eprintln!("selpg: {:#}", err),
    }
    if selpg_err.is_some_and(SelpgError::shows_usage) {
        eprintln!("\n{}", cli::usage());
    }
}
