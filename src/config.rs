use crate::error::SelpgError;
use crate::page_range::PageRange;
use crate::paginator::Delimiter;
use crate::printer::PrintCommand;
use std::path::PathBuf;

pub const DEFAULT_PAGE_LENGTH: usize = 72;
pub const DEFAULT_PRINT_COMMAND: &str = "lp -d{dest}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageLength {
    /// `-l` was not given.
    #[default]
    Default,
    Explicit(i64),
    ForcedUnset,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub start_page: Option<i64>,
    pub end_page: Option<i64>,
    pub page_length: PageLength,
    pub form_feed: bool,
    pub destination: Option<String>,
    pub print_command: String,
    pub inputs: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_page: None,
            end_page: None,
            page_length: PageLength::Default,
            form_feed: false,
            destination: None,
            print_command: DEFAULT_PRINT_COMMAND.to_string(),
            inputs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    StdoutAndPrinter {
        destination: String,
        command: PrintCommand,
    },
}

/// A validated run: everything the paginator needs and nothing it has to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub range: PageRange,
    pub delimiter: Delimiter,
    pub input: InputSource,
    pub output: OutputTarget,
}

impl Config {
    pub fn validate(self) -> Result<Job, SelpgError> {
        if self.inputs.len() > 1 {
            return Err(SelpgError::TooManyInputs {
                count: self.inputs.len(),
            });
        }

        let start = self.start_page.ok_or(SelpgError::MissingStartPage)?;
        let end = self.end_page.ok_or(SelpgError::MissingEndPage)?;
        let range = PageRange::new(start, end)?;

        let delimiter = match (self.form_feed, self.page_length) {
            (true, PageLength::Explicit(_)) => return Err(SelpgError::LengthWithFormFeed),
            (true, _) => Delimiter::FormFeed,
            (false, PageLength::Explicit(n)) if n < 1 => {
                return Err(SelpgError::InvalidPageLength(n))
            }
            (false, PageLength::Explicit(n)) => Delimiter::Lines {
                per_page: n as usize,
            },
            (false, _) => Delimiter::Lines {
                per_page: DEFAULT_PAGE_LENGTH,
            },
        };

        let input = match self.inputs.into_iter().next() {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        };

        let output = match self.destination.filter(|d| !d.is_empty()) {
            Some(destination) => {
                let command = PrintCommand::from_template(&self.print_command, &destination)?;
                OutputTarget::StdoutAndPrinter {
                    destination,
                    command,
                }
            }
            None => OutputTarget::Stdout,
        };

        Ok(Job {
            range,
            delimiter,
            input,
            output,
        })
    }
}
