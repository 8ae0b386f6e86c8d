use std::fmt::{Debug, Formatter};

use anyhow::Result;
use log::error;

use crate::output::Output;

/// Indented wraps an existing output and keeps track of the current indentation depth.
///
/// Indentation is applied lazily: after a [Output::newline] nothing is written until the next
/// write, so blank lines carry no trailing whitespace and it does not matter whether
/// [Indented::indent] is called before or after the newline.
pub struct Indented<'a> {
    depth: u32,
    has_pending_indent: bool,
    indent: &'a str,
    output: &'a mut dyn Output,
}

impl<'a> Indented<'a> {
    pub fn new(output: &'a mut dyn Output, indent: &'a str) -> Indented<'a> {
        Indented {
            depth: 0,
            // An indent set before the very first write applies to it.
            has_pending_indent: true,
            indent,
            output,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Adds `amount` to the indent depth. Negative amounts outdent.
    pub fn indent(&mut self, amount: i32) {
        match amount {
            amount if amount > 0 => self.add(amount as u32),
            amount if amount < 0 => self.sub(amount.unsigned_abs()),
            _ => {}
        }
    }

    fn add(&mut self, rhs: u32) {
        if self.depth.checked_add(rhs).is_none() {
            error!("reached maximum indent level! ({})", u32::MAX);
        }
        self.depth = self.depth.saturating_add(rhs);
    }

    fn sub(&mut self, rhs: u32) {
        if self.depth.checked_sub(rhs).is_none() {
            error!("cannot decrement indent below 0! mismatched inc/dec?");
        }
        self.depth = self.depth.saturating_sub(rhs);
    }

    fn write_pending_indent(&mut self) -> Result<()> {
        if !self.has_pending_indent {
            return Ok(());
        }
        self.has_pending_indent = false;
        for _ in 0..self.depth {
            self.output.write_str(self.indent)?;
        }
        Ok(())
    }
}

impl Debug for Indented<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.output.fmt(f)
    }
}

impl Output for Indented<'_> {
    fn begin_file(&mut self, file_name: &str) -> Result<()> {
        self.depth = 0;
        self.has_pending_indent = true;
        self.output.begin_file(file_name)
    }

    fn write_str(&mut self, data: &str) -> Result<()> {
        self.write_pending_indent()?;
        self.output.write_str(data)
    }

    fn write_char(&mut self, data: char) -> Result<()> {
        self.write_pending_indent()?;
        self.output.write_char(data)
    }

    fn newline(&mut self) -> Result<()> {
        self.output.newline()?;
        self.has_pending_indent = true;
        Ok(())
    }
}
