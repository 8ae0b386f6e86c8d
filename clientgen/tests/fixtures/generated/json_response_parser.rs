// Generated by clientgen. Do not edit.

pub mod my_client {
    use clientgen::parser::{Parser, Json};
    use clientgen::{Document, Result};

    /// Parses a raw json response body.
    pub fn parse(raw: &str) -> Result<Document> {
        Json.parse(raw)
    }
}
