use std::env;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use chumsky::prelude::*;
use itertools::Itertools;
use walkdir::WalkDir;

use crate::input::{FileSet, Input};
use crate::model::Endpoint;
use crate::{Error, Result};

/// Endpoint descriptions from every file matching a unix-style glob, read in path order.
#[derive(Debug, Default)]
pub struct Glob {
    file_set: FileSet,
}

impl Glob {
    /// A relative glob is relative to the current working directory.
    pub fn new(glob: &str) -> Result<Self> {
        let (root, glob) = match split_glob(glob) {
            Some((prefix, glob)) if prefix.is_relative() => (env::current_dir()?.join(prefix), glob),
            Some((prefix, glob)) => (prefix, glob),
            None => (env::current_dir()?, glob.to_string()),
        };
        Self::new_with_root(root, &glob)
    }

    /// `root_path` may be a directory (all files below it match if `glob` is empty) or a single
    /// file.
    pub fn new_with_root<P: AsRef<Path>>(root_path: P, glob: &str) -> Result<Self> {
        let root_path = root_path.as_ref();
        let file_set = if !glob.is_empty() {
            FileSet::new(root_path, &walk_glob(root_path, glob)?)?
        } else if root_path.is_dir() {
            FileSet::new(root_path, &walk_glob(root_path, "**/*")?)?
        } else {
            let (parent, file_name) = root_path
                .parent()
                .zip(root_path.file_name())
                .ok_or_else(|| {
                    Error::config(format!("'{}' is not a file", root_path.display()))
                })?;
            FileSet::new(parent, &[file_name])?
        };
        Ok(Self { file_set })
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.file_set.paths()
    }
}

impl Input for Glob {
    fn endpoints(&self) -> Result<Vec<Endpoint>> {
        self.file_set.endpoints()
    }
}

fn walk_glob(root: &Path, glob: &str) -> Result<Vec<PathBuf>> {
    walk_glob_impl(root, glob).map_err(|err| Error::config(format!("glob '{}': {}", glob, err)))
}

fn walk_glob_impl(root: &Path, glob: &str) -> anyhow::Result<Vec<PathBuf>> {
    let glob_path = root.join(glob);
    let matcher = globset::Glob::new(
        glob_path
            .to_str()
            .ok_or_else(|| anyhow!("could not convert glob path '{:?}' to OS str", glob_path))?,
    )?
    .compile_matcher();
    let mut paths = vec![];
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_dir() || !matcher.is_match(entry.path()) {
            continue;
        }
        paths.push(entry.path().strip_prefix(root)?.to_path_buf());
    }
    Ok(paths.into_iter().sorted().collect_vec())
}

/// Splits a glob into its leading literal path and the rest.
/// e.g.
///     api/v1/**/*.json
/// would return
///     (PathBuf::from("api/v1/"), "**/*.json")
fn split_glob(glob: &str) -> Option<(PathBuf, String)> {
    let prefix_parser = any::<&str, extra::Err<Cheap>>()
        .and_is(none_of("?*{}[]!"))
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(PathBuf::from);
    let glob_parser = any().repeated().collect::<String>();
    let parser = prefix_parser.then(glob_parser).then_ignore(end());
    parser.parse(glob).into_output()
}

#[cfg(test)]
mod tests {
    mod new_with_root {
        use std::fs;
        use std::fs::File;
        use std::io::Write;
        use std::path::Path;

        use anyhow::Result;
        use itertools::Itertools;
        use tempfile::tempdir;

        use crate::input::{Glob, Input};

        fn write_description(path: &Path, name: &str) -> Result<()> {
            fs::create_dir_all(path.parent().unwrap())?;
            write!(
                File::create(path)?,
                r#"{{"endpoints": [{{"name": "{}", "method": "GET", "path": "{}"}}]}}"#,
                name,
                name
            )?;
            Ok(())
        }

        fn names(glob: &Glob) -> Result<Vec<String>> {
            Ok(glob
                .endpoints()?
                .into_iter()
                .map(|endpoint| endpoint.name)
                .collect_vec())
        }

        #[test]
        fn glob() -> Result<()> {
            let root = tempdir()?;
            write_description(&root.path().join("a/b/users.json"), "users")?;
            write_description(&root.path().join("a/b/posts.json"), "posts")?;
            write_description(&root.path().join("a/c/admin.json"), "admin")?;
            write_description(&root.path().join("d/e/other.json"), "other")?;
            File::create(root.path().join("a/b/notes.txt"))?;

            let glob = Glob::new_with_root(root.path().join("a"), "**/*.json")?;
            assert_eq!(names(&glob)?, vec!["posts", "users", "admin"]);
            Ok(())
        }

        #[test]
        fn directory() -> Result<()> {
            let root = tempdir()?;
            write_description(&root.path().join("a/one.json"), "one")?;
            write_description(&root.path().join("a/two.json"), "two")?;

            let glob = Glob::new_with_root(root.path().join("a"), "")?;
            assert_eq!(names(&glob)?, vec!["one", "two"]);
            Ok(())
        }

        #[test]
        fn single_file() -> Result<()> {
            let root = tempdir()?;
            write_description(&root.path().join("a/one.json"), "one")?;
            write_description(&root.path().join("a/two.json"), "two")?;

            let glob = Glob::new_with_root(root.path().join("a/two.json"), "")?;
            assert_eq!(names(&glob)?, vec!["two"]);
            assert_eq!(glob.paths().count(), 1);
            Ok(())
        }
    }

    mod split_glob {
        use std::path::PathBuf;

        use crate::input::glob::split_glob;

        #[test]
        fn path_and_glob() {
            assert_eq!(
                split_glob("api/v1/**/*.json"),
                Some((PathBuf::from("api/v1/"), "**/*.json".to_string()))
            );
        }

        #[test]
        fn path_only() {
            assert_eq!(
                split_glob("api/users.json"),
                Some((PathBuf::from("api/users.json"), "".to_string()))
            );
        }

        #[test]
        fn glob_only() {
            assert_eq!(split_glob("**/api/*.json"), None);
        }
    }
}
