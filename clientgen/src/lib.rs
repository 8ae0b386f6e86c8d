pub use error::{Error, Result};
pub use executor::Executor;
pub use generator::{generate_each, EmittedFile, GenerateEach, Generator};
pub use input::Input;
pub use model::{Config, ConfigBuilder, Document, Endpoint, Format, Method};
pub use output::Output;

pub mod error;
pub mod executor;
pub mod generator;
pub mod input;
pub mod model;
pub mod output;
pub mod parser;
pub mod runtime;

mod rust_util;
