use log::trace;
use serde_json::Value;

use crate::model::{Document, Format};
use crate::parser::Parser;
use crate::{Error, Result};

/// JSON already distinguishes arrays from objects, so this is a direct structural mapping.
/// Scalars become [Document::Text] holding their json text (`1.5`, `true`), `null` becomes
/// [Document::Null].
#[derive(Debug, Default, Copy, Clone)]
pub struct Json;

impl Parser for Json {
    fn format(&self) -> Format {
        Format::Json
    }

    fn parse(&self, text: &str) -> Result<Document> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| Error::malformed(Format::Json, err))?;
        trace!("parsed json: {:?}", value);
        Ok(to_document(value))
    }
}

fn to_document(value: Value) -> Document {
    match value {
        Value::Null => Document::Null,
        Value::Bool(b) => Document::Text(b.to_string()),
        Value::Number(n) => Document::Text(n.to_string()),
        Value::String(s) => Document::Text(s),
        Value::Array(values) => Document::List(values.into_iter().map(to_document).collect()),
        Value::Object(entries) => Document::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, to_document(value)))
                .collect(),
        ),
    }
}
