use crate::page_range::PageRange;
use crate::paginator::ScanSummary;
use tracing::{debug, warn};

pub trait ScanObserver {
    fn start_page(&mut self, _page: u64, _selected: bool) {}
    fn finish(&mut self, _summary: &ScanSummary, _range: &PageRange) {}
}

pub struct Reporter {
    program: String,
}

impl Reporter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new("selpg")
    }
}

impl ScanObserver for Reporter {
    fn start_page(&mut self, page: u64, selected: bool) {
        debug!(page, selected, "page start");
    }

    fn finish(&mut self, summary: &ScanSummary, range: &PageRange) {
        debug!(
            total_pages = summary.total_pages,
            pages_emitted = summary.pages_emitted,
            lines_emitted = summary.lines_emitted,
            bytes_emitted = summary.bytes_emitted,
            "scan complete"
        );
        if let Some(message) = underrun_message(&self.program, summary, range) {
            warn!(
                end_page = range.end(),
                total_pages = summary.total_pages,
                "fewer pages than requested"
            );
            eprintln!("{}", message);
        }
    }
}

/// Advisory text for a request that ran past the end of the input.
pub fn underrun_message(program: &str, summary: &ScanSummary, range: &PageRange) -> Option<String> {
    if summary.total_pages >= range.end() {
        return None;
    }
    Some(format!(
        "{}: end_page ({}) greater than total pages ({}), less output than expected",
        program,
        range.end(),
        summary.total_pages
    ))
}
