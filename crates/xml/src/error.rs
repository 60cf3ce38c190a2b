use http::StatusCode;
use std::error::Error as StdError;
use std::io;
use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Error, Debug)]
pub enum MediaTypeError {
    #[error("invalid media type `{value}`: {source}")]
    Invalid {
        value: String,
        #[source]
        source: mime::FromStrError,
    },

    #[error("content-type header contains non visible ascii characters")]
    NotVisibleAscii {
        #[from]
        source: http::header::ToStrError,
    },
}

impl MediaTypeError {
    pub fn invalid<S: ToString>(value: S, source: mime::FromStrError) -> Self {
        Self::Invalid { value: value.to_string(), source }
    }
}

/// Errors raised while reading a body through a [`MessageBodyReader`](crate::reader::MessageBodyReader).
///
/// `Io` and `Unmarshal` carry the underlying failure as is: the display output is the
/// source's own message and the source can be recovered with a downcast.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("{source}")]
    Unmarshal { source: BoxError },

    #[error("no body reader accepts `{target}` with media type `{media_type}`")]
    NoReader { target: &'static str, media_type: String },
}

impl ReadError {
    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }

    pub fn unmarshal<E: Into<BoxError>>(e: E) -> Self {
        Self::Unmarshal { source: e.into() }
    }

    pub fn no_reader<S: ToString>(target: &'static str, media_type: Option<S>) -> Self {
        let media_type = media_type.map_or_else(|| "<none>".to_string(), |m| m.to_string());
        Self::NoReader { target, media_type }
    }
}

#[derive(Error, Debug)]
pub enum BodyError {
    #[error("request body exceed the limit {max_size} bytes")]
    TooLarge { max_size: usize },

    #[error("failed to read request body: {source}")]
    Read { source: BoxError },
}

impl BodyError {
    pub fn too_large(max_size: usize) -> Self {
        Self::TooLarge { max_size }
    }

    pub fn read<E: Into<BoxError>>(e: E) -> Self {
        Self::Read { source: e.into() }
    }
}

/// Rejections produced by the [`Xml`](crate::extract::Xml) extractor.
#[derive(Error, Debug)]
pub enum ExtractXmlError {
    #[error("missing content-type header, expect `application/xml`, `text/xml` or a `+xml` media type")]
    MissingContentType,

    #[error("unsupported media type `{actual}`, expect `application/xml`, `text/xml` or a `+xml` media type")]
    UnsupportedMediaType { actual: String },

    #[error("invalid content-type header: {source}")]
    InvalidContentType {
        #[from]
        source: MediaTypeError,
    },

    #[error("{source}")]
    Body {
        #[from]
        source: BodyError,
    },

    #[error("failed to read xml body: {source}")]
    Read {
        #[from]
        source: ReadError,
    },
}

impl ExtractXmlError {
    pub fn unsupported_media_type<S: ToString>(actual: S) -> Self {
        Self::UnsupportedMediaType { actual: actual.to_string() }
    }

    /// The status a server should answer with when extraction is rejected.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExtractXmlError::MissingContentType
            | ExtractXmlError::UnsupportedMediaType { .. }
            | ExtractXmlError::InvalidContentType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ExtractXmlError::Body { source: BodyError::TooLarge { .. } } => StatusCode::PAYLOAD_TOO_LARGE,
            ExtractXmlError::Body { .. } | ExtractXmlError::Read { .. } => StatusCode::BAD_REQUEST,
        }
    }
}
