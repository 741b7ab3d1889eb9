use clap::{CommandFactory, Parser};
use selpg::config::DEFAULT_PRINT_COMMAND;
use selpg::{Config, PageLength};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "selpg",
    version,
    about = "Select a range of pages from text input.",
    override_usage = "selpg -s start_page -e end_page [-f | -l lines_per_page] [-d dest] [in_filename]"
)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "start-page",
        value_name = "PAGE",
        allow_negative_numbers = true,
        help = "First page to emit (1-based)"
    )]
    pub start_page: Option<i64>,

    #[arg(
        short = 'e',
        long = "end-page",
        value_name = "PAGE",
        allow_negative_numbers = true,
        help = "Last page to emit, inclusive"
    )]
    pub end_page: Option<i64>,

    #[arg(
        short = 'l',
        long = "lines",
        value_name = "LINES",
        allow_negative_numbers = true,
        help = "Lines per page [default: 72]"
    )]
    pub lines: Option<i64>,

    #[arg(
        short = 'f',
        long = "form-feed",
        help = "Pages are delimited by form feeds instead of a line count"
    )]
    pub form_feed: bool,

    #[arg(
        short = 'd',
        long = "destination",
        value_name = "DEST",
        help = "Also send the selected pages to this print destination"
    )]
    pub destination: Option<String>,

    #[arg(
        long = "print-command",
        value_name = "CMD",
        env = "SELPG_PRINT_COMMAND",
        default_value = DEFAULT_PRINT_COMMAND,
        help = "Command fed the selected pages when -d is set; {dest} is replaced by the destination"
    )]
    pub print_command: String,

    #[arg(long = "log", help = "Write debug logs to stderr")]
    pub log: bool,

    #[arg(value_name = "FILE", help = "Input file; standard input when omitted")]
    pub inputs: Vec<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let page_length = match (self.form_feed, self.lines) {
            (_, Some(lines)) => PageLength::Explicit(lines),
            (true, None) => PageLength::ForcedUnset,
            (false, None) => PageLength::Default,
        };

        Config {
            start_page: self.start_page,
            end_page: self.end_page,
            page_length,
            form_feed: self.form_feed,
            destination: self.destination,
            print_command: self.print_command,
            inputs: self.inputs,
        }
    }
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
