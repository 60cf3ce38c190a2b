use crate::error::{BodyError, BoxError};
use bytes::Bytes;
use http_body::Body as HttpBody;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use tracing::debug;

/// An upper limit on the size of buffered request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyLimit {
    Enabled {
        /// in bytes
        max_size: usize,
    },
    Disabled,
}

impl BodyLimit {
    pub const DEFAULT_MAX_SIZE: usize = 2 * 1024 * 1024;

    pub fn max_size(max_size: usize) -> Self {
        Self::Enabled { max_size }
    }
}

impl Default for BodyLimit {
    fn default() -> Self {
        Self::Enabled { max_size: Self::DEFAULT_MAX_SIZE }
    }
}

/// Collects the whole body into memory, honoring `limit`.
pub async fn buffer<B>(body: B, limit: BodyLimit) -> Result<Bytes, BodyError>
where
    B: HttpBody,
    B::Error: Into<BoxError>,
{
    match limit {
        BodyLimit::Enabled { max_size } => match Limited::new(body, max_size).collect().await {
            Ok(collected) => Ok(collected.to_bytes()),
            Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
                debug!(max_size, "request body exceed the limit");
                Err(BodyError::too_large(max_size))
            }
            Err(e) => Err(BodyError::read(e)),
        },
        BodyLimit::Disabled => body.collect().await.map(|c| c.to_bytes()).map_err(BodyError::read),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body::Frame;
    use http_body_util::{Empty, Full, StreamBody};
    use std::io;

    #[tokio::test]
    async fn buffer_full_body() {
        let body = Full::new(Bytes::from_static(b"<widget/>"));
        let bytes = buffer(body, BodyLimit::default()).await.unwrap();
        assert_eq!(bytes, Bytes::from_static(b"<widget/>"));
    }

    #[tokio::test]
    async fn buffer_empty_body() {
        let bytes = buffer(Empty::<Bytes>::new(), BodyLimit::default()).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn buffer_too_large() {
        let body = Full::new(Bytes::from_static(b"<widget><name>gear</name></widget>"));
        let err = buffer(body, BodyLimit::max_size(8)).await.unwrap_err();
        assert!(matches!(err, BodyError::TooLarge { max_size: 8 }));
    }

    #[tokio::test]
    async fn buffer_stream_body_without_limit() {
        let chunks: Vec<Result<_, io::Error>> = vec![
            Ok(Frame::data(Bytes::from_static(b"<widget>"))),
            Ok(Frame::data(Bytes::from_static(b"<name>gear</name>"))),
            Ok(Frame::data(Bytes::from_static(b"</widget>"))),
        ];
        let body = StreamBody::new(futures::stream::iter(chunks));

        let bytes = buffer(body, BodyLimit::Disabled).await.unwrap();
        assert_eq!(bytes, Bytes::from_static(b"<widget><name>gear</name></widget>"));
    }

    #[tokio::test]
    async fn buffer_stream_error() {
        let chunks: Vec<Result<Frame<Bytes>, io::Error>> = vec![
            Ok(Frame::data(Bytes::from_static(b"<widget>"))),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
        ];
        let body = StreamBody::new(futures::stream::iter(chunks));

        let err = buffer(body, BodyLimit::default()).await.unwrap_err();
        assert!(matches!(err, BodyError::Read { .. }));
    }
}
