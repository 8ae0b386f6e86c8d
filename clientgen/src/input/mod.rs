use serde::Deserialize;

use crate::model::Endpoint;
use crate::{Error, Result};

pub use buffer::Buffer;
pub use file_set::FileSet;
pub use glob::Glob;

mod buffer;
mod file_set;
mod glob;

/// A source of [Endpoint]s, e.g. one API description.
///
/// Sources are read once per [crate::generate_each] call. Endpoints are returned as described;
/// validation happens when generating.
pub trait Input {
    fn endpoints(&self) -> Result<Vec<Endpoint>>;
}

impl Input for Vec<Endpoint> {
    fn endpoints(&self) -> Result<Vec<Endpoint>> {
        Ok(self.clone())
    }
}

/// JSON endpoint description, e.g.
///
/// ```json
/// { "endpoints": [ { "name": "kirk", "method": "GET", "path": "kirk", "params": ["foo"] } ] }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Description {
    endpoints: Vec<Endpoint>,
}

/// Parses a JSON endpoint description. `origin` names the source in error messages.
fn parse_description(data: &str, origin: &str) -> Result<Vec<Endpoint>> {
    let description: Description = serde_json::from_str(data).map_err(|err| {
        Error::config(format!("invalid endpoint description in {}: {}", origin, err))
    })?;
    Ok(description.endpoints)
}

#[cfg(test)]
mod tests {
    use crate::input::{parse_description, Input};
    use crate::model::{Endpoint, Method};

    #[test]
    fn endpoint_vec_is_input() {
        let endpoints = vec![Endpoint::get("kirk", "kirk")];
        let sources: [&dyn Input; 1] = [&endpoints];
        assert_eq!(sources[0].endpoints().unwrap(), endpoints);
    }

    #[test]
    fn parse_full_description() {
        let endpoints = parse_description(
            r#"{"endpoints": [
                {"name": "kirk", "method": "GET", "path": "kirk", "params": ["foo", "juicy"]},
                {"name": "shaggy", "method": "POST", "path": "shaggy"}
            ]}"#,
            "test",
        )
        .unwrap();
        assert_eq!(
            endpoints,
            vec![
                Endpoint::get("kirk", "kirk").param("foo").param("juicy"),
                Endpoint::new("shaggy", Method::Post, "shaggy"),
            ]
        );
    }

    #[test]
    fn invalid_description_is_config_error() {
        for data in ["", "{}", r#"{"endpoints": [{"name": "x"}]}"#, r#"{"endpointz": []}"#] {
            let err = parse_description(data, "test").unwrap_err();
            assert!(err.is_config(), "data: {}", data);
        }
    }
}
