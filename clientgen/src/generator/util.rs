use anyhow::Result;

use crate::model::Config;
use crate::output::{Indented, Output};

pub const INDENT: &str = "    ";

const HEADER: &str = "// Generated by clientgen. Do not edit.";

/// Writes the header followed by `write_contents`, wrapped in `pub mod <namespace>` when the
/// config has one.
pub fn write_file<F>(config: &Config, o: &mut Indented, write_contents: F) -> Result<()>
where
    F: FnOnce(&mut Indented) -> Result<()>,
{
    write_line(HEADER, o)?;
    o.newline()?;
    match config.namespace() {
        None => write_contents(o),
        Some(namespace) => {
            o.write_str("pub mod ")?;
            o.write_str(namespace)?;
            o.write_char(' ')?;
            write_block_start(o)?;
            write_contents(o)?;
            write_block_end(o)
        }
    }
}

pub fn write_line(line: &str, o: &mut dyn Output) -> Result<()> {
    o.write_str(line)?;
    o.newline()
}

pub fn write_block_start(o: &mut Indented) -> Result<()> {
    o.write_char('{')?;
    o.indent(1);
    o.newline()
}

pub fn write_block_end(o: &mut Indented) -> Result<()> {
    o.indent(-1);
    o.write_char('}')?;
    o.newline()
}

/// Writes the `components` joined with `separator` without unnecessary allocations.
pub fn write_joined<T, F>(
    components: &[T],
    separator: &str,
    o: &mut dyn Output,
    write_component: F,
) -> Result<()>
where
    F: Fn(&T, &mut dyn Output) -> Result<()>,
{
    let mut first = true;
    for component in components {
        if !first {
            o.write_str(separator)?;
        }
        first = false;
        write_component(component, o)?;
    }
    Ok(())
}

/// Writes `value` as a rust string literal.
pub fn write_str_literal(value: &str, o: &mut dyn Output) -> Result<()> {
    o.write_str(&format!("{:?}", value))
}
