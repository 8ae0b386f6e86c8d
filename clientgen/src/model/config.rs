use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::rust_util::is_identifier;
use crate::{Error, Result};

/// A wire format that responses can be parsed from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Format {
    Xml,
    Json,
}

impl Format {
    pub const ALL: &'static [Format] = &[Format::Xml, Format::Json];

    /// Tag used in configuration and in emitted file names.
    pub fn tag(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
        }
    }

    /// Appended to request paths, e.g. `/v1/users.xml`.
    pub fn extension(&self) -> &'static str {
        self.tag()
    }

    /// Name of the [crate::parser::Parser] type that handles this format.
    pub(crate) fn parser_name(&self) -> &'static str {
        match self {
            Format::Xml => "Xml",
            Format::Json => "Json",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .iter()
            .find(|format| format.tag().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                Error::config(format!(
                    "no response parser for format '{}' (supported: {})",
                    s,
                    Format::ALL.iter().map(Format::tag).join(", ")
                ))
            })
    }
}

/// Validated generator configuration. Use [ConfigBuilder] to create one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    response_types: Vec<Format>,
    namespace: Option<String>,
    default_format: Format,
    default_version: Option<String>,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Formats to emit a response parser for, in emission order. Never empty.
    pub fn response_types(&self) -> &[Format] {
        &self.response_types
    }

    /// If set, every emitted file wraps its declarations in `pub mod <namespace>`.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Format the generated client requests and parses responses with. Always one of
    /// [Config::response_types].
    pub fn default_format(&self) -> Format {
        self.default_format
    }

    /// Prefixed to every request path as `/<version>`.
    pub fn default_version(&self) -> Option<&str> {
        self.default_version.as_deref()
    }
}

/// Unvalidated [Config]. Format tags are plain strings so that configs can be loaded from json
/// and checked in one place by [ConfigBuilder::build].
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigBuilder {
    pub response_types: Vec<String>,
    pub namespace: Option<String>,
    pub default_format: Option<String>,
    pub default_version: Option<String>,
}

impl ConfigBuilder {
    pub fn response_types<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.response_types = tags.into_iter().map(|tag| tag.to_string()).collect_vec();
        self
    }

    pub fn response_type(mut self, tag: impl ToString) -> Self {
        self.response_types.push(tag.to_string());
        self
    }

    pub fn namespace(mut self, namespace: impl ToString) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    pub fn default_format(mut self, tag: impl ToString) -> Self {
        self.default_format = Some(tag.to_string());
        self
    }

    pub fn default_version(mut self, version: impl ToString) -> Self {
        self.default_version = Some(version.to_string());
        self
    }

    /// Overwrites every field that is set in `other`.
    pub fn merge(mut self, other: ConfigBuilder) -> Self {
        if !other.response_types.is_empty() {
            self.response_types = other.response_types;
        }
        self.namespace = other.namespace.or(self.namespace);
        self.default_format = other.default_format.or(self.default_format);
        self.default_version = other.default_version.or(self.default_version);
        self
    }

    pub fn build(self) -> Result<Config> {
        if self.response_types.is_empty() {
            return Err(Error::config("at least one response type is required"));
        }
        let mut response_types = Vec::with_capacity(self.response_types.len());
        for tag in &self.response_types {
            let format = Format::from_str(tag)?;
            if response_types.contains(&format) {
                debug!("ignoring repeated response type '{}'", tag);
                continue;
            }
            response_types.push(format);
        }

        let default_format = match &self.default_format {
            None => response_types[0],
            Some(tag) => {
                let format = Format::from_str(tag)?;
                if !response_types.contains(&format) {
                    return Err(Error::config(format!(
                        "default format '{}' is not one of the response types ({})",
                        format,
                        response_types.iter().join(", ")
                    )));
                }
                format
            }
        };

        if let Some(namespace) = &self.namespace {
            if !is_identifier(namespace) {
                return Err(Error::config(format!(
                    "namespace '{}' is not a valid identifier",
                    namespace
                )));
            }
        }

        if let Some(version) = &self.default_version {
            if version.is_empty() || version.contains('/') {
                return Err(Error::config(format!(
                    "default version '{}' must be a single non-empty path segment",
                    version
                )));
            }
        }

        Ok(Config {
            response_types,
            namespace: self.namespace,
            default_format,
            default_version: self.default_version,
        })
    }
}
