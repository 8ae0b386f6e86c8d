use itertools::Itertools;
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::model::{segments, Format, Method, Segment};
use crate::runtime::{HttpClient, Response};
use crate::{Error, Result};

/// Everything except RFC 3986 unreserved characters is encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Borrowed, `const`-friendly form of a [crate::Endpoint] as written into generated code.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Route<'a> {
    pub name: &'a str,
    pub method: Method,
    pub path: &'a str,
    /// Declared parameters that are not path placeholders.
    pub params: &'a [&'a str],
}

/// A fully built HTTP request, ready for an [HttpClient].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl Route<'_> {
    /// Builds the request for a call with `args`, given in call order.
    ///
    /// Placeholders in the path are replaced by the non-empty argument with the same name. The
    /// remaining arguments go into the query string for verbs without a body and into a
    /// form-encoded body otherwise. Every remaining argument must be a declared parameter.
    pub fn request(
        &self,
        base_url: &str,
        version: Option<&str>,
        format: Format,
        args: &[(&str, &str)],
    ) -> Result<Request> {
        let segments = segments(self.path)?;
        let mut path = String::new();
        let mut placeholders = vec![];
        for segment in segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder(name) => {
                    // An empty value would leave an empty path segment.
                    let value = args
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| Error::MissingParameter {
                            endpoint: self.name.to_string(),
                            param: name.to_string(),
                        })?;
                    path.extend(utf8_percent_encode(value, COMPONENT));
                    placeholders.push(name);
                }
            }
        }

        let remaining = args
            .iter()
            .filter(|(key, _)| !placeholders.contains(key))
            .collect_vec();
        if let Some((key, _)) = remaining.iter().find(|(key, _)| !self.params.contains(key)) {
            return Err(Error::UnknownParameter {
                endpoint: self.name.to_string(),
                param: key.to_string(),
            });
        }
        let encoded = remaining
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, COMPONENT),
                    utf8_percent_encode(value, COMPONENT)
                )
            })
            .join("&");

        let mut url = base_url.trim_end_matches('/').to_string();
        if let Some(version) = version {
            url.push('/');
            url.push_str(version);
        }
        let path = path.trim_matches('/');
        if !path.is_empty() {
            url.push('/');
            url.push_str(path);
        }
        url.push('.');
        url.push_str(format.extension());

        let body = if self.method.has_body() {
            Some(encoded)
        } else {
            if !encoded.is_empty() {
                url.push('?');
                url.push_str(&encoded);
            }
            None
        };

        Ok(Request {
            method: self.method,
            url,
            body,
        })
    }
}

impl Request {
    /// Sends the request. Transport errors are returned unchanged as [Error::Transport].
    pub fn send<H: HttpClient + ?Sized>(&self, http: &H) -> Result<Response> {
        debug!("{} {}", self.method, self.url);
        http.request(self.method, &self.url, self.body.as_deref())
            .map_err(Error::Transport)
    }
}
