use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::input::{parse_description, Input};
use crate::model::Endpoint;
use crate::Result;

/// Endpoint descriptions from one or more files, read in the given order.
#[derive(Debug, Default)]
pub struct FileSet {
    files: Vec<(PathBuf, String)>,
}

impl FileSet {
    /// Loads all files into memory. Errors if any fail to be read.
    pub fn new<P: AsRef<Path>>(root: &Path, relative_paths: &[P]) -> Result<Self> {
        let mut files = vec![];
        for relative_path in relative_paths {
            let path = root.join(relative_path);
            debug!("reading endpoint description {}", path.display());
            let data = fs::read_to_string(&path)?;
            files.push((path, data));
        }
        Ok(Self { files })
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|(path, _)| path.as_path())
    }
}

impl Input for FileSet {
    fn endpoints(&self) -> Result<Vec<Endpoint>> {
        let mut endpoints = vec![];
        for (path, data) in &self.files {
            endpoints.extend(parse_description(data, &path.display().to_string())?);
        }
        Ok(endpoints)
    }
}
