// Generated by clientgen. Do not edit.

pub mod my_client {
    use clientgen::parser::{Parser, Xml};
    use clientgen::{Document, Result};

    /// Parses a raw xml response body.
    pub fn parse(raw: &str) -> Result<Document> {
        Xml.parse(raw)
    }
}
