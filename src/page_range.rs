use crate::error::SelpgError;

/// Inclusive, 1-based range of pages to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u64,
    end: u64,
}

impl PageRange {
    pub fn new(start: i64, end: i64) -> Result<Self, SelpgError> {
        if start < 1 || start > end {
            return Err(SelpgError::InvalidPageRange { start, end });
        }
        Ok(PageRange {
            start: start as u64,
            end: end as u64,
        })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn contains(&self, page: u64) -> bool {
        page >= self.start && page <= self.end
    }
}
