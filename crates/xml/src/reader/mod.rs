//! Pluggable request body readers.
//!
//! A [`MessageBodyReader`] answers two questions for the dispatcher: whether it can read a
//! body of a given media type into a given [`TargetType`], and, once chosen, the value read
//! from the body. An empty body is read as `None`, which is not an error.
//!
//! The dispatcher calls readers in one of two shapes. The plain shape carries only the
//! target type and media type, the resource shape also carries the matched handler's
//! [`ResourceInfo`]. Both shapes share one decision, a reader does not look at the resource.
//!
//! # Example
//! ```
//! use micro_xml::reader::{MessageBodyReader, XmlMessageBodyReader};
//! use micro_xml::{MediaType, TargetType};
//! # #[allow(dead_code)]
//! #[derive(serde::Deserialize)]
//! struct Widget {
//!     name: String,
//! }
//!
//! let reader = XmlMessageBodyReader::new();
//! let media_type: MediaType = "application/xml".parse().unwrap();
//! assert!(MessageBodyReader::<Widget>::is_readable(&reader, &TargetType::of::<Widget>(), Some(&media_type)));
//! ```

mod registry;
mod text_reader;
mod xml_reader;

pub use registry::BodyReaders;
pub use registry::BodyReadersBuilder;
pub use text_reader::TextMessageBodyReader;
pub use xml_reader::XmlMessageBodyReader;

use crate::error::ReadError;
use crate::media_type::MediaType;
use crate::request::ServerRequestContext;
use crate::target::TargetType;
use http::HeaderMap;
use std::io::BufRead;

/// Reads request bodies into values of `T`.
///
/// Implementations must be stateless with respect to a single request, they are shared
/// across concurrent requests.
pub trait MessageBodyReader<T>: Send + Sync {
    fn is_readable(&self, target: &TargetType, media_type: Option<&MediaType>) -> bool;

    fn is_readable_for_resource(
        &self,
        target: &TargetType,
        _resource: &ResourceInfo,
        media_type: Option<&MediaType>,
    ) -> bool {
        self.is_readable(target, media_type)
    }

    /// Reads `stream` into a value, `Ok(None)` for an empty stream.
    ///
    /// The stream is borrowed, the reader consumes what it needs and leaves it open.
    fn read_from(
        &self,
        target: &TargetType,
        media_type: Option<&MediaType>,
        headers: &HeaderMap,
        stream: &mut dyn BufRead,
    ) -> Result<Option<T>, ReadError>;

    fn read_from_context(
        &self,
        target: &TargetType,
        media_type: Option<&MediaType>,
        context: &mut ServerRequestContext,
    ) -> Result<Option<T>, ReadError> {
        let (headers, stream) = context.parts();
        self.read_from(target, media_type, headers, stream)
    }
}

/// What the dispatcher knows about the handler a request was routed to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceInfo {
    name: String,
    consumes: Vec<MediaType>,
}

impl ResourceInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), consumes: Vec::new() }
    }

    #[must_use]
    pub fn consumes(mut self, media_type: MediaType) -> Self {
        self.consumes.push(media_type);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn consumed_media_types(&self) -> &[MediaType] {
        &self.consumes
    }
}
