use std::fmt::{Display, Formatter};

use anyhow::Result;

use crate::output::Output;

/// Keeps everything written to it in memory, across all files.
#[derive(Debug, Default)]
pub struct Buffer {
    data: String,
}

impl Buffer {
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn into_string(self) -> String {
        self.data
    }
}

impl Display for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

impl Output for Buffer {
    fn begin_file(&mut self, _: &str) -> Result<()> {
        Ok(())
    }

    fn write_str(&mut self, data: &str) -> Result<()> {
        self.data.push_str(data);
        Ok(())
    }

    fn write_char(&mut self, data: char) -> Result<()> {
        self.data.push(data);
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.data.push('\n');
        Ok(())
    }
}
