use anyhow::Result;

use crate::generator::response_parser_module;
use crate::generator::util::{
    write_block_end, write_block_start, write_file, write_joined, write_line, write_str_literal,
};
use crate::model::{Config, Endpoint};
use crate::output::{Indented, Output};

/// Writes the client module: an `Api<H>` struct with one method per endpoint. Every method builds
/// its request from a `const` [crate::runtime::Route] and parses the response with the module
/// emitted for the default format.
pub fn write_api(endpoints: &[Endpoint], config: &Config, o: &mut Indented) -> Result<()> {
    write_file(config, o, |o| write_contents(endpoints, config, o))
}

fn write_contents(endpoints: &[Endpoint], config: &Config, o: &mut Indented) -> Result<()> {
    write_line("use clientgen::runtime::{HttpClient, Route};", o)?;
    write_line("use clientgen::{Document, Format, Method, Result};", o)?;
    o.newline()?;

    write_constants(config, o)?;
    o.newline()?;

    write_line("pub struct Api<H: HttpClient> {", o)?;
    o.indent(1);
    write_line("base_url: String,", o)?;
    write_line("http: H,", o)?;
    write_block_end(o)?;
    o.newline()?;

    o.write_str("impl<H: HttpClient> Api<H> ")?;
    write_block_start(o)?;
    write_new(o)?;
    for endpoint in endpoints {
        o.newline()?;
        write_endpoint(endpoint, o)?;
    }
    o.newline()?;
    write_call(config, o)?;
    write_block_end(o)
}

fn write_constants(config: &Config, o: &mut Indented) -> Result<()> {
    o.write_str("const VERSION: Option<&str> = ")?;
    match config.default_version() {
        None => o.write_str("None")?,
        Some(version) => {
            o.write_str("Some(")?;
            write_str_literal(version, o)?;
            o.write_char(')')?;
        }
    }
    write_line(";", o)?;

    o.write_str("const FORMAT: Format = Format::")?;
    o.write_str(config.default_format().parser_name())?;
    write_line(";", o)
}

fn write_new(o: &mut Indented) -> Result<()> {
    o.write_str("pub fn new(base_url: impl Into<String>, http: H) -> Self ")?;
    write_block_start(o)?;
    o.write_str("Self ")?;
    write_block_start(o)?;
    write_line("base_url: base_url.into(),", o)?;
    write_line("http,", o)?;
    write_block_end(o)?;
    write_block_end(o)
}

fn write_endpoint(endpoint: &Endpoint, o: &mut Indented) -> Result<()> {
    o.write_str("pub fn ")?;
    o.write_str(&endpoint.name)?;
    o.write_str("(&self, params: &[(&str, &str)]) -> Result<Document> ")?;
    write_block_start(o)?;

    o.write_str("const ROUTE: Route<'static> = Route ")?;
    write_block_start(o)?;
    o.write_str("name: ")?;
    write_str_literal(&endpoint.name, o)?;
    write_line(",", o)?;
    o.write_str("method: Method::")?;
    o.write_str(endpoint.method.variant_name())?;
    write_line(",", o)?;
    o.write_str("path: ")?;
    write_str_literal(&endpoint.path, o)?;
    write_line(",", o)?;
    o.write_str("params: &[")?;
    write_joined(&endpoint.params, ", ", o, |param, o| {
        write_str_literal(param, o)
    })?;
    write_line("],", o)?;
    o.indent(-1);
    write_line("};", o)?;

    write_line("self.call(&ROUTE, params)", o)?;
    write_block_end(o)
}

fn write_call(config: &Config, o: &mut Indented) -> Result<()> {
    o.write_str("fn call(&self, route: &Route, params: &[(&str, &str)]) -> Result<Document> ")?;
    write_block_start(o)?;
    write_line(
        "let request = route.request(&self.base_url, VERSION, FORMAT, params)?;",
        o,
    )?;
    write_line("let response = request.send(&self.http)?;", o)?;
    write_parse_path(config, o)?;
    write_line("(&response.body)", o)?;
    write_block_end(o)
}

/// Emitted files are sibling modules, so the parser is reached through the parent of `api` (and
/// of the namespace module inside it, if any).
fn write_parse_path(config: &Config, o: &mut dyn Output) -> Result<()> {
    let module = response_parser_module(config.default_format());
    let mut path = vec!["super"];
    if config.namespace().is_some() {
        path.push("super");
    }
    path.push(&module);
    if let Some(namespace) = config.namespace() {
        path.push(namespace);
    }
    path.push("parse");
    write_joined(&path, "::", o, |component, o| o.write_str(component))
}
