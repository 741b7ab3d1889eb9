use std::io::{self, Write};

pub struct Tee<'a> {
    primary: &'a mut dyn Write,
    secondary: Option<&'a mut dyn Write>,
}

impl<'a> Tee<'a> {
    pub fn new(primary: &'a mut dyn Write, secondary: Option<&'a mut dyn Write>) -> Self {
        Self { primary, secondary }
    }
}

impl Write for Tee<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        if let Some(secondary) = self.secondary.as_mut() {
            secondary.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        if let Some(secondary) = self.secondary.as_mut() {
            secondary.flush()?;
        }
        Ok(())
    }
}
