use itertools::Itertools;
use log::{debug, info};

use crate::input::Input;
use crate::model::{Config, Endpoint, Format};
use crate::output::{Buffer, Indented};
use crate::{Error, Result};

mod api;
mod response_parser;
mod util;

/// Extension of every emitted file.
pub const SOURCE_EXTENSION: &str = "rs";

/// Name of the emitted client module.
pub const API_MODULE: &str = "api";

/// Name of the emitted parser module for `format`, e.g. `xml_response_parser`.
pub fn response_parser_module(format: Format) -> String {
    format!("{}_response_parser", format.tag())
}

/// One generated source file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EmittedFile {
    pub file_name: String,
    pub contents: String,
}

/// Generates client source files for a fixed [Config].
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// See [generate_each].
    pub fn generate_each(&self, sources: &[&dyn Input]) -> Result<GenerateEach<'_>> {
        generate_each(sources, &self.config)
    }
}

/// Reads and validates the endpoints of all `sources` and returns the files to emit, lazily, in
/// this order:
///
/// 1. `api.rs`, the client with one method per endpoint.
/// 2. `<format>_response_parser.rs` for each of [Config::response_types], in configured order.
///
/// Invalid endpoints fail here, before any file is produced. Each call starts from scratch.
pub fn generate_each<'a>(sources: &[&dyn Input], config: &'a Config) -> Result<GenerateEach<'a>> {
    let mut endpoints = vec![];
    for source in sources {
        endpoints.extend(source.endpoints()?);
    }
    for endpoint in &endpoints {
        endpoint.validate()?;
    }
    if let Some(name) = endpoints
        .iter()
        .map(|endpoint| endpoint.name.as_str())
        .duplicates()
        .next()
    {
        return Err(Error::config(format!(
            "endpoint '{}' is defined more than once",
            name
        )));
    }

    info!(
        "Generating client for {} endpoint(s) with response types [{}]",
        endpoints.len(),
        config.response_types().iter().join(", ")
    );
    debug!("Config: {:#?}", config);
    Ok(GenerateEach {
        config,
        endpoints,
        next: 0,
    })
}

/// Lazy sequence of [EmittedFile]s returned by [generate_each].
#[derive(Debug)]
pub struct GenerateEach<'a> {
    config: &'a Config,
    endpoints: Vec<Endpoint>,
    next: usize,
}

impl GenerateEach<'_> {
    fn file_count(&self) -> usize {
        1 + self.config.response_types().len()
    }
}

impl Iterator for GenerateEach<'_> {
    type Item = anyhow::Result<EmittedFile>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next;
        if index >= self.file_count() {
            return None;
        }
        self.next += 1;

        let file = if index == 0 {
            emit(API_MODULE, |o| {
                api::write_api(&self.endpoints, self.config, o)
            })
        } else {
            let format = self.config.response_types()[index - 1];
            emit(&response_parser_module(format), |o| {
                response_parser::write_response_parser(format, self.config, o)
            })
        };
        Some(file)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.file_count() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GenerateEach<'_> {}

fn emit<F>(module: &str, write: F) -> anyhow::Result<EmittedFile>
where
    F: FnOnce(&mut Indented) -> anyhow::Result<()>,
{
    let file_name = format!("{}.{}", module, SOURCE_EXTENSION);
    debug!("Emitting {}", file_name);
    let mut buffer = Buffer::default();
    write(&mut Indented::new(&mut buffer, util::INDENT))?;
    Ok(EmittedFile {
        file_name,
        contents: buffer.into_string(),
    })
}
