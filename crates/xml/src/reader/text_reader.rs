use crate::error::ReadError;
use crate::media_type::MediaType;
use crate::reader::MessageBodyReader;
use crate::stream;
use crate::target::TargetType;
use http::HeaderMap;
use std::io::{BufRead, Read};

/// Reads `text/*` bodies into a [`String`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMessageBodyReader;

impl MessageBodyReader<String> for TextMessageBodyReader {
    fn is_readable(&self, target: &TargetType, media_type: Option<&MediaType>) -> bool {
        let Some(media_type) = media_type else {
            return false;
        };
        target.is_string() && (media_type.type_().eq_ignore_ascii_case("text") || media_type.is_wildcard_type())
    }

    fn read_from(
        &self,
        _target: &TargetType,
        _media_type: Option<&MediaType>,
        _headers: &HeaderMap,
        stream: &mut dyn BufRead,
    ) -> Result<Option<String>, ReadError> {
        if stream::is_empty(stream)? {
            return Ok(None);
        }

        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes).map_err(ReadError::io)?;
        // TODO: decode with the `charset` parameter instead of assuming utf-8
        String::from_utf8(bytes).map(Some).map_err(ReadError::unmarshal)
    }
}
