//! XML request body extraction.
//!
//! [`Xml<T>`] takes an [`http::Request`], checks its `Content-Type` against the xml reader
//! and, when readable, buffers the body and unmarshals it into `T`. An empty body is
//! extracted as `None`.
//!
//! # Example
//! ```
//! # use serde::Deserialize;
//! # use micro_xml::extract::Xml;
//! # use micro_xml::BodyLimit;
//! # use bytes::Bytes;
//! # use http_body_util::Full;
//! #[derive(Deserialize, Debug)]
//! struct Widget {
//!     name: String,
//! }
//!
//! # tokio_test_block_on(async {
//! let request = http::Request::builder()
//!     .header("content-type", "application/xml")
//!     .body(Full::new(Bytes::from_static(b"<widget><name>gear</name></widget>")))
//!     .unwrap();
//!
//! let Some(Xml(widget)) = Xml::<Widget>::extract(request, BodyLimit::default()).await.unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(widget.name, "gear");
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use crate::body::BodyLimit;
use crate::error::{BoxError, ExtractXmlError};
use crate::media_type::MediaType;
use crate::reader::{MessageBodyReader, XmlMessageBodyReader};
use crate::request::ServerRequestContext;
use crate::target::TargetType;
use crate::unmarshal::Unmarshaller;
use http::Request;
use http_body::Body as HttpBody;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Represented as xml data
///
/// when `post` as `application/xml`, `text/xml` or any `+xml` media type, we can using this
/// struct to inject data, note: the struct must impl [`serde::Deserialize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xml<T>(pub T);

impl<T> Xml<T>
where
    T: DeserializeOwned + 'static,
{
    pub async fn extract<B>(request: Request<B>, limit: BodyLimit) -> Result<Option<Self>, ExtractXmlError>
    where
        B: HttpBody,
        B::Error: Into<BoxError>,
    {
        Self::extract_with(&XmlMessageBodyReader::new(), request, limit).await
    }

    /// Same as [`Xml::extract`] with a caller supplied reader.
    pub async fn extract_with<U, B>(
        reader: &XmlMessageBodyReader<U>,
        request: Request<B>,
        limit: BodyLimit,
    ) -> Result<Option<Self>, ExtractXmlError>
    where
        U: Unmarshaller,
        B: HttpBody,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = request.into_parts();
        let media_type = MediaType::from_headers(&parts.headers)?;
        let target = TargetType::of::<T>();

        if !MessageBodyReader::<T>::is_readable(reader, &target, media_type.as_ref()) {
            debug!(target_type = target.name(), media_type = ?media_type, "reject non xml request body");
            return Err(match media_type {
                Some(media_type) => ExtractXmlError::unsupported_media_type(media_type),
                None => ExtractXmlError::MissingContentType,
            });
        }

        let mut context = ServerRequestContext::buffer(parts.headers, body, limit).await?;
        let value = MessageBodyReader::<T>::read_from_context(reader, &target, media_type.as_ref(), &mut context)?;
        Ok(value.map(Xml))
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BodyError, ReadError};
    use bytes::Bytes;
    use http::StatusCode;
    use http_body_util::{Empty, Full};
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Widget {
        name: String,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request<Full<Bytes>> {
        let mut builder = Request::builder().method("POST").uri("/widgets");
        if let Some(content_type) = content_type {
            builder = builder.header(http::header::CONTENT_TYPE, content_type);
        }
        builder.body(Full::new(Bytes::from_static(body.as_bytes()))).unwrap()
    }

    #[tokio::test]
    async fn extract_widget() {
        let request = request(Some("application/xml"), "<widget><name>gear</name></widget>");
        let widget = Xml::<Widget>::extract(request, BodyLimit::default()).await.unwrap();
        assert_eq!(widget, Some(Xml(Widget { name: "gear".into() })));
    }

    #[tokio::test]
    async fn extract_with_charset() {
        let request = request(Some("text/xml; charset=utf-8"), "<widget><name>gear</name></widget>");
        let widget = Xml::<Widget>::extract(request, BodyLimit::default()).await.unwrap();
        assert_eq!(widget.map(Xml::into_inner), Some(Widget { name: "gear".into() }));
    }

    #[tokio::test]
    async fn extract_empty_body() {
        let request = Request::builder()
            .header(http::header::CONTENT_TYPE, "application/vnd.custom+xml")
            .body(Empty::<Bytes>::new())
            .unwrap();
        let widget = Xml::<Widget>::extract(request, BodyLimit::default()).await.unwrap();
        assert_eq!(widget, None);
    }

    #[tokio::test]
    async fn reject_plain_text() {
        let request = request(Some("text/plain"), "gear");
        let err = Xml::<Widget>::extract(request, BodyLimit::default()).await.unwrap_err();
        assert!(matches!(err, ExtractXmlError::UnsupportedMediaType { ref actual } if actual == "text/plain"));
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn reject_missing_content_type() {
        let request = request(None, "<widget><name>gear</name></widget>");
        let err = Xml::<Widget>::extract(request, BodyLimit::default()).await.unwrap_err();
        assert!(matches!(err, ExtractXmlError::MissingContentType));
    }

    #[tokio::test]
    async fn reject_invalid_content_type() {
        let request = request(Some("hello world"), "<widget><name>gear</name></widget>");
        let err = Xml::<Widget>::extract(request, BodyLimit::default()).await.unwrap_err();
        assert!(matches!(err, ExtractXmlError::InvalidContentType { .. }));
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn reject_string_target() {
        let request = request(Some("application/xml"), "<name>gear</name>");
        let err = Xml::<String>::extract(request, BodyLimit::default()).await.unwrap_err();
        assert!(matches!(err, ExtractXmlError::UnsupportedMediaType { .. }));
    }

    #[tokio::test]
    async fn reject_too_large() {
        let request = request(Some("application/xml"), "<widget><name>gear</name></widget>");
        let err = Xml::<Widget>::extract(request, BodyLimit::max_size(4)).await.unwrap_err();
        assert!(matches!(err, ExtractXmlError::Body { source: BodyError::TooLarge { max_size: 4 } }));
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn reject_malformed_xml() {
        let request = request(Some("application/xml"), "<widget><name>gear</widget>");
        let err = Xml::<Widget>::extract(request, BodyLimit::default()).await.unwrap_err();
        assert!(matches!(err, ExtractXmlError::Read { source: ReadError::Unmarshal { .. } }));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
