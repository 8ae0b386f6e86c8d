use crate::model::{Document, Format};
use crate::Result;

pub use json::Json;
pub use xml::Xml;

mod json;
mod xml;

/// Converts raw response text of one wire format into a [Document].
///
/// Parsers are stateless: every call is independent and either returns a complete [Document] or
/// an error, never a partial result.
pub trait Parser {
    fn format(&self) -> Format;

    fn parse(&self, text: &str) -> Result<Document>;
}

/// The structural parser for `format`.
pub fn for_format(format: Format) -> &'static dyn Parser {
    match format {
        Format::Xml => &Xml,
        Format::Json => &Json,
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Format;
    use crate::parser::for_format;

    #[test]
    fn parser_per_format() {
        for format in Format::ALL {
            assert_eq!(for_format(*format).format(), *format);
        }
    }
}
