use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use serde::Deserialize;

use crate::rust_util::is_identifier;
use crate::{Error, Result};

/// Item names the generated `Api` already uses for itself.
const RESERVED_NAMES: &[&str] = &["new", "call"];

/// HTTP verb of an [Endpoint].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// True if leftover parameters are sent as a form-encoded body rather than a query string.
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    /// Name of the variant, used when writing rust source that refers to it.
    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Method::Get => "Get",
            Method::Post => "Post",
            Method::Put => "Put",
            Method::Patch => "Patch",
            Method::Delete => "Delete",
            Method::Head => "Head",
            Method::Options => "Options",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            _ => Err(Error::config(format!("unknown http method '{}'", s))),
        }
    }
}

/// A single callable operation of an API.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct Endpoint {
    pub name: String,
    pub method: Method,
    /// Path template, e.g. `/users/{id}`. Each `{name}` is replaced by the call argument of the
    /// same name.
    pub path: String,
    /// Declared non-path parameters, in declaration order.
    #[serde(default)]
    pub params: Vec<String>,
}

/// A piece of a parsed path template.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

impl Endpoint {
    pub fn new(name: impl ToString, method: Method, path: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            method,
            path: path.to_string(),
            params: vec![],
        }
    }

    pub fn get(name: impl ToString, path: impl ToString) -> Self {
        Self::new(name, Method::Get, path)
    }

    pub fn post(name: impl ToString, path: impl ToString) -> Self {
        Self::new(name, Method::Post, path)
    }

    pub fn param(mut self, name: impl ToString) -> Self {
        self.params.push(name.to_string());
        self
    }

    /// Names of all `{placeholders}` in the path template, in order.
    pub fn placeholders(&self) -> Result<Vec<&str>> {
        Ok(segments(&self.path)?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name),
                Segment::Literal(_) => None,
            })
            .collect_vec())
    }

    /// Checks everything the generated client relies on: the name is usable as a rust method,
    /// the path template is well-formed and no parameter is declared twice.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.name) {
            return Err(Error::config(format!(
                "endpoint name '{}' is not a valid identifier",
                self.name
            )));
        }
        if RESERVED_NAMES.contains(&self.name.as_str()) {
            return Err(Error::config(format!(
                "endpoint name '{}' is reserved",
                self.name
            )));
        }
        if self.path.trim_matches('/').is_empty() {
            return Err(Error::config(format!(
                "endpoint '{}' has an empty path",
                self.name
            )));
        }
        let placeholders = self.placeholders()?;
        if let Some(dupe) = self
            .params
            .iter()
            .map(String::as_str)
            .chain(placeholders)
            .duplicates()
            .next()
        {
            return Err(Error::config(format!(
                "parameter '{}' declared more than once for endpoint '{}'",
                dupe, self.name
            )));
        }
        Ok(())
    }
}

/// Splits a path template into literal text and `{placeholder}`s.
pub(crate) fn segments(template: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = vec![];
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            Error::config(format!("unterminated placeholder in path '{}'", template))
        })?;
        let name = &after[..close];
        if name.is_empty() || name.contains('{') {
            return Err(Error::config(format!(
                "invalid placeholder '{{{}}}' in path '{}'",
                name, template
            )));
        }
        segments.push(Segment::Placeholder(name));
        rest = &after[close + 1..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    mod method {
        use std::str::FromStr;

        use crate::model::Method;

        #[test]
        fn parses_case_insensitive() {
            assert_eq!(Method::from_str("get").unwrap(), Method::Get);
            assert_eq!(Method::from_str("Post").unwrap(), Method::Post);
            assert!(Method::from_str("fetch").is_err());
        }

        #[test]
        fn body_bearing_verbs() {
            assert!(Method::Post.has_body());
            assert!(Method::Put.has_body());
            assert!(Method::Patch.has_body());
            assert!(!Method::Get.has_body());
            assert!(!Method::Delete.has_body());
        }

        #[test]
        fn deserialize_upper_case() {
            let method: Method = serde_json::from_str("\"DELETE\"").unwrap();
            assert_eq!(method, Method::Delete);
        }
    }

    mod segments {
        use crate::model::endpoint::segments;
        use crate::model::Segment;

        #[test]
        fn literal_only() {
            assert_eq!(segments("/users").unwrap(), vec![Segment::Literal("/users")]);
        }

        #[test]
        fn mixed() {
            assert_eq!(
                segments("/users/{id}/posts/{post}").unwrap(),
                vec![
                    Segment::Literal("/users/"),
                    Segment::Placeholder("id"),
                    Segment::Literal("/posts/"),
                    Segment::Placeholder("post"),
                ]
            );
        }

        #[test]
        fn adjacent_placeholders() {
            assert_eq!(
                segments("{a}{b}").unwrap(),
                vec![Segment::Placeholder("a"), Segment::Placeholder("b")]
            );
        }

        #[test]
        fn unterminated_errors() {
            assert!(segments("/users/{id").is_err());
        }

        #[test]
        fn empty_placeholder_errors() {
            assert!(segments("/users/{}").is_err());
        }

        #[test]
        fn nested_brace_errors() {
            assert!(segments("/users/{{id}").is_err());
        }
    }

    mod validate {
        use crate::model::Endpoint;

        #[test]
        fn valid() {
            let endpoint = Endpoint::get("user", "/users/{id}").param("expand");
            assert!(endpoint.validate().is_ok());
            assert_eq!(endpoint.placeholders().unwrap(), vec!["id"]);
        }

        #[test]
        fn bad_name() {
            assert!(Endpoint::get("get-user", "/users").validate().is_err());
            assert!(Endpoint::get("fn", "/users").validate().is_err());
        }

        #[test]
        fn reserved_name() {
            let err = Endpoint::get("new", "/users").validate().unwrap_err();
            assert!(err.is_config());
        }

        #[test]
        fn empty_path() {
            assert!(Endpoint::get("root", "/").validate().is_err());
            assert!(Endpoint::get("root", "").validate().is_err());
        }

        #[test]
        fn duplicate_param() {
            let endpoint = Endpoint::get("users", "/users").param("a").param("a");
            assert!(endpoint.validate().is_err());
        }

        #[test]
        fn param_shadowing_placeholder() {
            let endpoint = Endpoint::get("user", "/users/{id}").param("id");
            assert!(endpoint.validate().is_err());
        }

        #[test]
        fn deserialize_without_params() {
            let endpoint: Endpoint =
                serde_json::from_str(r#"{"name":"kirk","method":"GET","path":"kirk"}"#).unwrap();
            assert_eq!(endpoint, Endpoint::get("kirk", "kirk"));
        }
    }
}
