use std::io::{self, BufRead};

pub const FORM_FEED: u8 = b'\x0c';

/// Refill `buf` with the next line minus its terminator; `false` at end of input.
pub fn read_line_into<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    trim_line_break(buf);
    Ok(true)
}

// An input ending exactly on a form feed yields no trailing empty page.
pub fn read_page_into<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(FORM_FEED, buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&FORM_FEED) {
        buf.pop();
    }
    Ok(true)
}

fn trim_line_break(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}
