pub mod config;
pub mod error;
mod lines;
mod output;
pub mod page_range;
pub mod paginator;
pub mod printer;
pub mod report;

pub use config::{Config, InputSource, Job, OutputTarget, PageLength};
pub use error::SelpgError;
pub use paginator::{Delimiter, ScanSummary};
pub use report::{Reporter, ScanObserver};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use tracing::info;

pub fn run(job: Job) -> Result<ScanSummary> {
    let mut reporter = Reporter::default();
    run_with_observer(job, &mut reporter)
}

pub fn run_with_observer(job: Job, observer: &mut dyn ScanObserver) -> Result<ScanSummary> {
    let mut input = open_input(&job.input)?;

    let mut printer = match &job.output {
        OutputTarget::Stdout => None,
        OutputTarget::StdoutAndPrinter {
            destination,
            command,
        } => {
            info!(%destination, %command, "sending a copy to the printer");
            Some(command.spawn()?)
        }
    };

    let stdout = io::stdout();
    let mut primary = BufWriter::new(stdout.lock());
    let paginator = paginator::Paginator::new(job.range, job.delimiter);
    let summary = {
        let secondary = printer.as_mut().map(|pipe| pipe as &mut dyn Write);
        let mut tee = output::Tee::new(&mut primary, secondary);
        paginator.run(&mut input, &mut tee, observer)?
    };
    primary.flush().context("Failed to flush standard output")?;

    if let Some(pipe) = printer {
        pipe.close()?;
    }
    Ok(summary)
}

fn open_input(source: &InputSource) -> Result<Box<dyn BufRead>, SelpgError> {
    match source {
        InputSource::Stdin => {
            info!("reading from standard input");
            Ok(Box::new(io::stdin().lock()))
        }
        InputSource::File(path) => {
            let file = File::open(path).map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    SelpgError::InputNotFound {
                        path: path.clone(),
                        source,
                    }
                } else {
                    SelpgError::InputUnreadable {
                        path: path.clone(),
                        source,
                    }
                }
            })?;
            info!(path = %path.display(), "reading from file");
            Ok(Box::new(BufReader::new(file)))
        }
    }
}
