use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::output::Output;

/// Writes each generated file to `<output_root>/<file name>`.
#[derive(Debug, Default)]
pub struct FileSet {
    output_root: PathBuf,
    current: Option<(PathBuf, File)>,
}

impl FileSet {
    /// `output_root` is created if it doesn't exist. It must be an empty directory so that stale
    /// files from an earlier run can't be mistaken for generated ones.
    pub fn new<P: Into<PathBuf>>(output_root: P) -> Result<Self> {
        let output_root = output_root.into();
        fs::create_dir_all(&output_root)
            .with_context(|| format!("create output root {}", output_root.display()))?;
        let dir_metadata = fs::metadata(&output_root).context("output_root")?;
        if !dir_metadata.is_dir() {
            return Err(anyhow!("specified 'output_root' must be a directory"));
        }
        if fs::read_dir(&output_root)?.count() > 0 {
            return Err(anyhow!("specified 'output_root' must be empty"));
        }
        Ok(Self {
            output_root,
            current: None,
        })
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    fn current_file(&mut self) -> Result<&mut File> {
        match &mut self.current {
            None => Err(anyhow!("cannot write to a FileSet before begin_file")),
            Some((_, file)) => Ok(file),
        }
    }
}

impl Output for FileSet {
    /// Creates the file for `file_name`, closing the previous one.
    fn begin_file(&mut self, file_name: &str) -> Result<()> {
        let path = self.output_root.join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)
            .with_context(|| format!("create output file {}", path.display()))?;
        self.current = Some((path, file));
        Ok(())
    }

    fn write_str(&mut self, data: &str) -> Result<()> {
        self.current_file()?.write_all(data.as_bytes())?;
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
