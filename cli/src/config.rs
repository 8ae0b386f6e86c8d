use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use clientgen::ConfigBuilder;

#[derive(Parser, Debug)]
#[command(name = "clientgen", author, version, about)]
pub struct Config {
    /// Unix-style glob of JSON endpoint descriptions. Can be given more than once; endpoints are
    /// generated in the order they are found.
    ///
    /// If running in a unix-style shell, you'll need to enclose inside '' or it will be expanded
    /// by the shell itself.
    ///
    /// If the glob is relative, it will be relative to the current working directory.
    #[arg(short, long, value_name = "GLOB", required(true))]
    pub input: Vec<String>,

    /// Path to a [clientgen::ConfigBuilder] in json format. Options given on the command line
    /// override the file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Response format to emit a parser for, `xml` or `json`. Repeat for more than one, e.g.
    /// `-r xml -r json`.
    #[arg(short, long = "response-type", value_name = "FORMAT")]
    pub response_types: Vec<String>,

    /// Wrap all generated code in `pub mod <NAMESPACE>`.
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Format requested by the generated client. Defaults to the first response type.
    #[arg(long, value_name = "FORMAT")]
    pub default_format: Option<String>,

    /// Version prefixed to every request path, e.g. `v1`.
    #[arg(long, value_name = "VERSION")]
    pub default_version: Option<String>,

    /// Empty (or nonexistent) directory to write the generated files to.
    #[arg(long, default_value = "generated")]
    pub output_root: PathBuf,

    /// Print the generated files to stdout instead of writing them.
    #[arg(long)]
    pub dry_run: bool,
}

impl Config {
    /// The generator config: the `--config` file, if any, with command line options applied on
    /// top.
    pub fn generator_config(&self) -> Result<clientgen::Config> {
        let base = match &self.config {
            None => ConfigBuilder::default(),
            Some(path) => read_config_file(path)?,
        };
        Ok(base.merge(self.overrides()).build()?)
    }

    fn overrides(&self) -> ConfigBuilder {
        ConfigBuilder {
            response_types: self.response_types.clone(),
            namespace: self.namespace.clone(),
            default_format: self.default_format.clone(),
            default_version: self.default_version.clone(),
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigBuilder> {
    let file = File::open(path).with_context(|| format!("read config {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use anyhow::Result;
    use clap::Parser;

    use clientgen::Format;

    use crate::config::Config;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("clientgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_line_only() -> Result<()> {
        let config = parse(&[
            "-i",
            "api/*.json",
            "-r",
            "xml",
            "-r",
            "json",
            "--namespace",
            "my_client",
            "--default-version",
            "v1",
        ]);
        assert_eq!(config.input, vec!["api/*.json"]);
        assert!(!config.dry_run);

        let generator_config = config.generator_config()?;
        assert_eq!(
            generator_config.response_types(),
            &[Format::Xml, Format::Json]
        );
        assert_eq!(generator_config.namespace(), Some("my_client"));
        assert_eq!(generator_config.default_version(), Some("v1"));
        Ok(())
    }

    #[test]
    fn input_is_required() {
        assert!(Config::try_parse_from(["clientgen", "-r", "xml"]).is_err());
    }

    #[test]
    fn missing_response_type_is_an_error() {
        assert!(parse(&["-i", "*.json"]).generator_config().is_err());
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = parse(&["-i", "*.json", "-r", "yaml"])
            .generator_config()
            .unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn command_line_overrides_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "response_types": ["xml", "json"], "namespace": "from_file", "default_version": "v2" }"#,
        )?;

        let config = parse(&[
            "-i",
            "*.json",
            "--config",
            path.to_str().unwrap(),
            "--namespace",
            "from_args",
        ])
        .generator_config()?;
        assert_eq!(config.response_types(), &[Format::Xml, Format::Json]);
        assert_eq!(config.namespace(), Some("from_args"));
        assert_eq!(config.default_version(), Some("v2"));
        Ok(())
    }

    #[test]
    fn unreadable_config_file() {
        let result = parse(&["-i", "*.json", "-r", "xml", "--config", "does/not/exist.json"])
            .generator_config();
        assert!(result.is_err());
    }
}
