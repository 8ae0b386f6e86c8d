use std::io::{stdout, Write};

use anyhow::Result;

use crate::output::Output;

/// Prints generated files to stdout, each one preceded by a header line naming it.
#[derive(Debug)]
pub struct StdOut {
    header: String,
}

impl Default for StdOut {
    fn default() -> Self {
        Self::new("// ---")
    }
}

impl StdOut {
    /// `header` is printed before each file name, e.g. `// --- api.rs`.
    pub fn new(header: impl ToString) -> Self {
        Self {
            header: header.to_string(),
        }
    }
}

impl Output for StdOut {
    fn begin_file(&mut self, file_name: &str) -> Result<()> {
        writeln!(stdout(), "{} {}", self.header, file_name)?;
        Ok(())
    }

    fn write_str(&mut self, data: &str) -> Result<()> {
        stdout().write_all(data.as_bytes())?;
        Ok(())
    }

    fn write_char(&mut self, data: char) -> Result<()> {
        let mut bytes = [0; 4];
        self.write_str(data.encode_utf8(&mut bytes))
    }

    fn newline(&mut self) -> Result<()> {
        self.write_char('\n')
    }
}
