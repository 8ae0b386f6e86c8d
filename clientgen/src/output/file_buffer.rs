use std::collections::HashMap;

use anyhow::{anyhow, Result};

use crate::output::{Buffer, Output};

/// A collection of [Buffer]s, one per file, indexed by file name. Also remembers the order the
/// files were started in.
#[derive(Debug, Default)]
pub struct FileBuffer {
    data: HashMap<String, Buffer>,
    order: Vec<String>,
}

impl FileBuffer {
    pub fn data(&self, file_name: &str) -> Option<&Buffer> {
        self.data.get(file_name)
    }

    /// File names in the order they were written.
    pub fn file_names(&self) -> &[String] {
        &self.order
    }

    fn latest_mut(&mut self) -> Result<&mut Buffer> {
        self.order
            .last()
            .and_then(|latest| self.data.get_mut(latest))
            .ok_or_else(|| anyhow!("must begin_file before writing to a FileBuffer"))
    }
}

impl Output for FileBuffer {
    fn begin_file(&mut self, file_name: &str) -> Result<()> {
        if self.data.contains_key(file_name) {
            return Err(anyhow!("file '{}' was already written", file_name));
        }
        self.data.insert(file_name.to_string(), Buffer::default());
        self.order.push(file_name.to_string());
        Ok(())
    }

    fn write_str(&mut self, data: &str) -> Result<()> {
        self.latest_mut()?.write_str(data)
    }

    fn write_char(&mut self, data: char) -> Result<()> {
        self.latest_mut()?.write_char(data)
    }

    fn newline(&mut self) -> Result<()> {
        self.latest_mut()?.newline()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::output::{FileBuffer, Output};

    #[test]
    fn write_separate_files() -> Result<()> {
        let mut output = FileBuffer::default();
        output.begin_file("api.rs")?;
        output.write_str("file 1 data")?;
        output.begin_file("xml_response_parser.rs")?;
        output.write_str("file 2")?;
        output.write_char('!')?;
        assert_eq!(output.data("api.rs").unwrap().data(), "file 1 data");
        assert_eq!(
            output.data("xml_response_parser.rs").unwrap().data(),
            "file 2!"
        );
        assert!(output.data("noexist").is_none());
        assert_eq!(output.file_names(), &["api.rs", "xml_response_parser.rs"]);
        Ok(())
    }

    #[test]
    fn write_without_file_errors() {
        let mut output = FileBuffer::default();
        assert!(output.write_str("asdf").is_err());
        assert!(output.write_char('a').is_err());
        assert!(output.newline().is_err());
    }

    #[test]
    fn same_file_twice_errors() -> Result<()> {
        let mut output = FileBuffer::default();
        output.begin_file("api.rs")?;
        assert!(output.begin_file("api.rs").is_err());
        Ok(())
    }
}
