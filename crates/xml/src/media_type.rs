//! Media type values as seen by body readers.
//!
//! Parsing and validation are delegated to the [`mime`] crate. [`MediaType`] keeps the
//! type and subtype exactly as the client sent them, because readers decide on case
//! themselves: the xml reader matches the `xml` subtype ignoring case but the `+xml`
//! suffix with case.

use crate::error::MediaTypeError;
use http::header::CONTENT_TYPE;
use http::HeaderMap;
use mime::Mime;
use std::fmt;
use std::str::FromStr;

/// The wildcard used for both the type and the subtype, as in `*/*`.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    type_: String,
    subtype: String,
    parameters: Vec<(String, String)>,
}

impl MediaType {
    pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self { type_: type_.into(), subtype: subtype.into(), parameters: Vec::new() }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    /// `*/*`
    pub fn wildcard() -> Self {
        Self::new(WILDCARD, WILDCARD)
    }

    /// Reads the `Content-Type` header, `Ok(None)` when the header is absent.
    pub fn from_headers(headers: &HeaderMap) -> Result<Option<Self>, MediaTypeError> {
        let Some(value) = headers.get(CONTENT_TYPE) else {
            return Ok(None);
        };
        let value = value.to_str()?;
        value.parse().map(Some)
    }

    #[inline]
    pub fn type_(&self) -> &str {
        &self.type_
    }

    #[inline]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    #[inline]
    pub fn is_wildcard_type(&self) -> bool {
        self.type_ == WILDCARD
    }

    #[inline]
    pub fn is_wildcard_subtype(&self) -> bool {
        self.subtype == WILDCARD
    }

    /// Looks up a parameter by name, names are compared ignoring ascii case.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// `type/subtype` without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.type_, self.subtype)
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mime = s.parse::<Mime>().map_err(|e| MediaTypeError::invalid(s, e))?;

        // mime normalizes the essence, so take type and subtype back from the raw input
        let essence = s.split(';').next().unwrap_or_default().trim();
        let (type_, subtype) = essence
            .split_once('/')
            .map(|(t, st)| (t.trim(), st.trim()))
            .unwrap_or((mime.type_().as_str(), mime.subtype().as_str()));

        let mut media_type = MediaType::new(type_, subtype);
        media_type.parameters = mime.params().map(|(n, v)| (n.as_str().to_string(), v.as_str().to_string())).collect();
        Ok(media_type)
    }
}

impl From<&Mime> for MediaType {
    fn from(mime: &Mime) -> Self {
        let mut media_type = MediaType::new(mime.type_().as_str(), mime.subtype().as_str());
        media_type.parameters = mime.params().map(|(n, v)| (n.as_str().to_string(), v.as_str().to_string())).collect();
        media_type
    }
}

impl From<Mime> for MediaType {
    fn from(mime: Mime) -> Self {
        MediaType::from(&mime)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        for (name, value) in &self.parameters {
            write!(f, "; {name}={value}")?;
        }
        Ok(())
    }
}
