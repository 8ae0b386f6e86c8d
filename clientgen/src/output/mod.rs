use anyhow::Result;
use std::fmt::Debug;

pub use buffer::Buffer;
pub use file_buffer::FileBuffer;
pub use file_set::FileSet;
pub use indented::Indented;
pub use stdout::StdOut;

mod buffer;
mod file_buffer;
mod file_set;
mod indented;
mod stdout;

/// A sink for generated source text.
///
/// Generated files are written one after another: [Output::begin_file] marks the start of each
/// file and every following write belongs to it until the next call. Outputs that have no notion
/// of files (e.g. [Buffer]) ignore it.
pub trait Output: Debug {
    fn begin_file(&mut self, file_name: &str) -> Result<()>;

    fn write_str(&mut self, data: &str) -> Result<()>;

    fn write_char(&mut self, data: char) -> Result<()>;

    fn newline(&mut self) -> Result<()>;
}
