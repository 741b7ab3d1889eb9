use crate::error::SelpgError;
use anyhow::{Context, Result};
use std::fmt;
use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use tracing::{debug, warn};

/// External command that receives a copy of every selected page on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintCommand {
    program: String,
    args: Vec<String>,
}

impl PrintCommand {
    /// Split a whitespace-separated template, substituting `{dest}` in every token.
    pub fn from_template(template: &str, destination: &str) -> Result<Self, SelpgError> {
        let mut tokens = template
            .split_whitespace()
            .map(|token| token.replace("{dest}", destination));
        let program = tokens.next().ok_or(SelpgError::EmptyPrintCommand)?;
        Ok(PrintCommand {
            program,
            args: tokens.collect(),
        })
    }

    pub fn spawn(&self) -> Result<PrinterPipe, SelpgError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| SelpgError::PrinterSpawn {
                command: self.to_string(),
                source,
            })?;
        debug!(command = %self, pid = child.id(), "started print command");

        let stdin = child.stdin.take();
        Ok(PrinterPipe {
            child,
            stdin,
            command: self.to_string(),
            reaped: false,
        })
    }
}

impl fmt::Display for PrintCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Write end of the print command's stdin. Dropping it closes stdin and reaps the child.
pub struct PrinterPipe {
    child: Child,
    stdin: Option<ChildStdin>,
    command: String,
    reaped: bool,
}

impl PrinterPipe {
    pub fn close(mut self) -> Result<()> {
        let flushed = match self.stdin.take() {
            Some(mut stdin) => stdin.flush(),
            None => Ok(()),
        };
        let waited = self.child.wait();
        self.reaped = waited.is_ok();

        let status = waited.with_context(|| format!("Failed to wait for `{}`", self.command))?;
        flushed.with_context(|| format!("Failed to flush pipe to `{}`", self.command))?;
        if status.success() {
            debug!(command = %self.command, "print command finished");
        } else {
            warn!(command = %self.command, %status, "print command exited unsuccessfully");
        }
        Ok(())
    }
}

impl Write for PrinterPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.stdin.as_mut() {
            Some(stdin) => stdin.write(buf),
            None => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "print command pipe is closed",
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.stdin.as_mut() {
            Some(stdin) => stdin.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for PrinterPipe {
    fn drop(&mut self) {
        drop(self.stdin.take());
        if !self.reaped {
            let _ = self.child.wait();
        }
    }
}
