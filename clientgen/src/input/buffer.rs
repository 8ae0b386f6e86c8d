use crate::input::{parse_description, Input};
use crate::model::Endpoint;
use crate::Result;

/// An endpoint description held in memory.
#[derive(Debug, Default)]
pub struct Buffer {
    data: String,
}

impl Buffer {
    pub fn new(data: impl ToString) -> Self {
        Self {
            data: data.to_string(),
        }
    }
}

impl Input for Buffer {
    fn endpoints(&self) -> Result<Vec<Endpoint>> {
        parse_description(&self.data, "buffer")
    }
}
