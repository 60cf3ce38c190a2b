//! Request side input handed to body readers.
//!
//! [`ServerRequestContext`] owns the request headers and the buffered request body. Readers
//! borrow the body as an input stream; bytes they read are gone for later readers, the
//! context itself is never closed by a reader.

use crate::body::BodyLimit;
use crate::error::{BodyError, BoxError, MediaTypeError};
use crate::media_type::MediaType;
use bytes::buf::Reader;
use bytes::{Buf, Bytes};
use http::HeaderMap;
use http_body::Body as HttpBody;
use std::io::BufRead;

#[derive(Debug)]
pub struct ServerRequestContext {
    headers: HeaderMap,
    body: Reader<Bytes>,
}

impl ServerRequestContext {
    pub fn new(headers: HeaderMap, body: Bytes) -> Self {
        Self { headers, body: body.reader() }
    }

    /// Buffers `body` under `limit` and wraps it with `headers`.
    pub async fn buffer<B>(headers: HeaderMap, body: B, limit: BodyLimit) -> Result<Self, BodyError>
    where
        B: HttpBody,
        B::Error: Into<BoxError>,
    {
        let bytes = crate::body::buffer(body, limit).await?;
        Ok(Self::new(headers, bytes))
    }

    /// Returns the HTTP headers of the request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The parsed `Content-Type` header, `None` when the request has none.
    pub fn content_type(&self) -> Result<Option<MediaType>, MediaTypeError> {
        MediaType::from_headers(&self.headers)
    }

    /// Number of body bytes not read yet.
    pub fn available(&self) -> usize {
        self.body.get_ref().remaining()
    }

    pub fn input_stream(&mut self) -> &mut dyn BufRead {
        &mut self.body
    }

    /// Headers and input stream at once, for readers that need both.
    pub fn parts(&mut self) -> (&HeaderMap, &mut dyn BufRead) {
        (&self.headers, &mut self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::CONTENT_TYPE;
    use http::HeaderValue;
    use http_body_util::Full;
    use std::io::Read;

    #[test]
    fn reading_advances_available() {
        let mut context = ServerRequestContext::new(HeaderMap::new(), Bytes::from_static(b"<a/><b/>"));
        assert_eq!(context.available(), 8);

        let mut first = [0u8; 4];
        context.input_stream().read_exact(&mut first).unwrap();
        assert_eq!(&first, b"<a/>");
        assert_eq!(context.available(), 4);
    }

    #[test]
    fn content_type_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/xml; charset=utf-8"));
        let context = ServerRequestContext::new(headers, Bytes::new());

        let media_type = context.content_type().unwrap().unwrap();
        assert_eq!(media_type.essence(), "text/xml");
        assert_eq!(context.available(), 0);
    }

    #[tokio::test]
    async fn buffer_body() {
        let body = Full::new(Bytes::from_static(b"<widget/>"));
        let mut context = ServerRequestContext::buffer(HeaderMap::new(), body, BodyLimit::default()).await.unwrap();

        let (headers, stream) = context.parts();
        assert!(headers.is_empty());
        let mut content = String::new();
        stream.read_to_string(&mut content).unwrap();
        assert_eq!(content, "<widget/>");
    }
}
