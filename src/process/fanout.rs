//! Writer that forwards every write to several underlying sinks.

use std::io::{self, Write};

/// A sink that forwards every write to each of its underlying sinks.
///
/// Every sink sees every byte even when an earlier sink fails; the first
/// error encountered is returned after all sinks have been written.
pub struct FanOutWriter<'a> {
    sinks: Vec<Box<dyn Write + Send + 'a>>,
}

impl<'a> FanOutWriter<'a> {
    pub fn new(sinks: Vec<Box<dyn Write + Send + 'a>>) -> Self {
        Self { sinks }
    }
}

impl Write for FanOutWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut first_err = None;
        for sink in &mut self.sinks {
            if let Err(e) = sink.write_all(buf) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut first_err = None;
        for sink in &mut self.sinks {
            if let Err(e) = sink.flush() {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
