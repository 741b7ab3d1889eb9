use crate::lines::{read_line_into, read_page_into};
use crate::page_range::PageRange;
use crate::report::ScanObserver;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Lines { per_page: usize },
    FormFeed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Pages present in the input, selected or not.
    pub total_pages: u64,
    pub pages_emitted: u64,
    pub lines_emitted: u64,
    pub bytes_emitted: u64,
}

pub struct Paginator {
    range: PageRange,
    delimiter: Delimiter,
}

impl Paginator {
    pub fn new(range: PageRange, delimiter: Delimiter) -> Self {
        Self { range, delimiter }
    }

    /// Stream `reader` into `writer`, keeping only the pages inside the range.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
        observer: &mut dyn ScanObserver,
    ) -> Result<ScanSummary> {
        debug!(
            start = self.range.start(),
            end = self.range.end(),
            delimiter = ?self.delimiter,
            "paginating"
        );
        let summary = match self.delimiter {
            Delimiter::Lines { per_page } => self.scan_lines(reader, writer, per_page, observer)?,
            Delimiter::FormFeed => self.scan_form_feeds(reader, writer, observer)?,
        };
        writer.flush().context("Failed to flush selected pages")?;
        observer.finish(&summary, &self.range);
        Ok(summary)
    }

    fn scan_lines<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
        per_page: usize,
        observer: &mut dyn ScanObserver,
    ) -> Result<ScanSummary> {
        let mut summary = ScanSummary::default();
        let mut current_page: u64 = 1;
        let mut line_in_page: usize = 0;
        let mut line = Vec::new();

        while read_line_into(reader, &mut line).context("Failed to read input line")? {
            let selected = self.range.contains(current_page);
            if line_in_page == 0 {
                observer.start_page(current_page, selected);
                if selected {
                    summary.pages_emitted += 1;
                }
            }

            if selected {
                writer
                    .write_all(&line)
                    .and_then(|_| writer.write_all(b"\n"))
                    .with_context(|| format!("Failed to write line of page {}", current_page))?;
                summary.lines_emitted += 1;
                summary.bytes_emitted += line.len() as u64 + 1;
            }

            line_in_page += 1;
            if line_in_page == per_page {
                current_page += 1;
                line_in_page = 0;
            }
        }

        // A page only counts once it holds at least one line.
        summary.total_pages = if line_in_page == 0 {
            current_page - 1
        } else {
            current_page
        };
        Ok(summary)
    }

    fn scan_form_feeds<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
        observer: &mut dyn ScanObserver,
    ) -> Result<ScanSummary> {
        let mut summary = ScanSummary::default();
        let mut current_page: u64 = 0;
        let mut page = Vec::new();

        while read_page_into(reader, &mut page).context("Failed to read input page")? {
            current_page += 1;
            let selected = self.range.contains(current_page);
            observer.start_page(current_page, selected);

            if selected {
                writer
                    .write_all(&page)
                    .with_context(|| format!("Failed to write page {}", current_page))?;
                summary.pages_emitted += 1;
                summary.lines_emitted += page.iter().filter(|&&b| b == b'\n').count() as u64;
                summary.bytes_emitted += page.len() as u64;
            }
        }

        summary.total_pages = current_page;
        Ok(summary)
    }
}
