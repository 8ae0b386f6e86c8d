use anyhow::Result;

use crate::generator::util::{write_block_end, write_block_start, write_file, write_line};
use crate::model::{Config, Format};
use crate::output::{Indented, Output};

/// Writes the response parser module for `format`: a single `parse` function that turns a raw
/// response body into a [crate::Document] using the matching structural parser.
pub fn write_response_parser(format: Format, config: &Config, o: &mut Indented) -> Result<()> {
    write_file(config, o, |o| write_contents(format, o))
}

fn write_contents(format: Format, o: &mut Indented) -> Result<()> {
    let parser = format.parser_name();

    o.write_str("use clientgen::parser::{Parser, ")?;
    o.write_str(parser)?;
    write_line("};", o)?;
    write_line("use clientgen::{Document, Result};", o)?;
    o.newline()?;

    o.write_str("/// Parses a raw ")?;
    o.write_str(format.tag())?;
    write_line(" response body.", o)?;
    o.write_str("pub fn parse(raw: &str) -> Result<Document> ")?;
    write_block_start(o)?;
    o.write_str(parser)?;
    write_line(".parse(raw)", o)?;
    write_block_end(o)
}
