use crate::error::ReadError;
use crate::media_type::MediaType;
use crate::reader::MessageBodyReader;
use crate::request::ServerRequestContext;
use crate::stream;
use crate::target::TargetType;
use crate::unmarshal::{QuickXmlUnmarshaller, Unmarshaller};
use http::HeaderMap;
use serde::de::DeserializeOwned;
use std::io::BufRead;
use tracing::trace;

/// Reads `application/xml`, `text/xml` and `+xml` bodies through an [`Unmarshaller`].
///
/// Plain [`String`] targets are never accepted, whatever the media type, so a text reader
/// registered after this one gets them.
#[derive(Debug, Clone, Default)]
pub struct XmlMessageBodyReader<U = QuickXmlUnmarshaller> {
    unmarshaller: U,
}

impl XmlMessageBodyReader {
    pub fn new() -> Self {
        Self { unmarshaller: QuickXmlUnmarshaller }
    }
}

impl<U: Unmarshaller> XmlMessageBodyReader<U> {
    pub fn with_unmarshaller(unmarshaller: U) -> Self {
        Self { unmarshaller }
    }

    pub fn unmarshaller(&self) -> &U {
        &self.unmarshaller
    }

    /// The readability decision shared by every call shape.
    pub fn accepts(target: &TargetType, media_type: Option<&MediaType>) -> bool {
        let Some(media_type) = media_type else {
            return false;
        };
        if target.is_string() {
            return false;
        }

        let subtype = media_type.subtype();
        let is_xml_type = matches!(media_type.type_(), "application" | "text");
        // the suffix match is case sensitive, unlike the plain `xml` subtype
        (is_xml_type && subtype.eq_ignore_ascii_case("xml"))
            || subtype.ends_with("+xml")
            || (media_type.is_wildcard_subtype() && (media_type.is_wildcard_type() || is_xml_type))
    }

    fn read<T>(
        &self,
        target: &TargetType,
        stream: &mut dyn BufRead,
        available: Option<usize>,
    ) -> Result<Option<T>, ReadError>
    where
        T: DeserializeOwned + 'static,
    {
        if stream::is_empty(stream)? || available == Some(0) {
            trace!(target_type = target.name(), "empty request body, nothing to unmarshal");
            return Ok(None);
        }

        self.unmarshaller.unmarshal::<T>(stream).map(Some).map_err(ReadError::unmarshal)
    }
}

impl<T, U> MessageBodyReader<T> for XmlMessageBodyReader<U>
where
    T: DeserializeOwned + 'static,
    U: Unmarshaller,
{
    fn is_readable(&self, target: &TargetType, media_type: Option<&MediaType>) -> bool {
        Self::accepts(target, media_type)
    }

    fn read_from(
        &self,
        target: &TargetType,
        _media_type: Option<&MediaType>,
        _headers: &HeaderMap,
        stream: &mut dyn BufRead,
    ) -> Result<Option<T>, ReadError> {
        self.read(target, stream, None)
    }

    fn read_from_context(
        &self,
        target: &TargetType,
        _media_type: Option<&MediaType>,
        context: &mut ServerRequestContext,
    ) -> Result<Option<T>, ReadError> {
        let available = context.available();
        self.read(target, context.input_stream(), Some(available))
    }
}
