pub use config::{Config, ConfigBuilder, Format};
pub use document::Document;
pub use endpoint::{Endpoint, Method, Segment};

pub(crate) use endpoint::segments;

mod config;
mod document;
mod endpoint;
