//! Ordered set of body readers for one target type.
//!
//! The dispatcher asks the readers in registration order and hands the body to the first
//! one that reports it readable. When none does, reading fails with
//! [`ReadError::NoReader`].
//!
//! # Example
//! ```
//! use micro_xml::reader::{BodyReaders, TextMessageBodyReader, XmlMessageBodyReader};
//! use micro_xml::{MediaType, ServerRequestContext};
//! use bytes::Bytes;
//! use http::HeaderMap;
//!
//! let readers = BodyReaders::<String>::builder()
//!     .reader(XmlMessageBodyReader::new())
//!     .reader(TextMessageBodyReader)
//!     .build();
//!
//! let media_type: MediaType = "text/plain".parse().unwrap();
//! let mut context = ServerRequestContext::new(HeaderMap::new(), Bytes::from_static(b"gear"));
//! let value = readers.read_from_context(Some(&media_type), &mut context).unwrap();
//! assert_eq!(value.as_deref(), Some("gear"));
//! ```

use crate::error::ReadError;
use crate::media_type::MediaType;
use crate::reader::{MessageBodyReader, ResourceInfo};
use crate::request::ServerRequestContext;
use crate::target::TargetType;
use std::fmt;
use tracing::debug;

pub struct BodyReaders<T> {
    readers: Vec<Box<dyn MessageBodyReader<T>>>,
}

pub struct BodyReadersBuilder<T> {
    readers: Vec<Box<dyn MessageBodyReader<T>>>,
}

impl<T: 'static> BodyReadersBuilder<T> {
    fn new() -> Self {
        Self { readers: Vec::new() }
    }

    /// Registers `reader` after the ones already registered.
    #[must_use]
    pub fn reader(mut self, reader: impl MessageBodyReader<T> + 'static) -> Self {
        self.readers.push(Box::new(reader));
        self
    }

    pub fn build(self) -> BodyReaders<T> {
        BodyReaders { readers: self.readers }
    }
}

impl<T: 'static> BodyReaders<T> {
    pub fn builder() -> BodyReadersBuilder<T> {
        BodyReadersBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.readers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }

    /// The first reader able to read `media_type` into `target`.
    pub fn select(&self, target: &TargetType, media_type: Option<&MediaType>) -> Option<&dyn MessageBodyReader<T>> {
        self.readers.iter().map(|reader| &**reader).find(|reader| reader.is_readable(target, media_type))
    }

    pub fn select_for_resource(
        &self,
        target: &TargetType,
        resource: &ResourceInfo,
        media_type: Option<&MediaType>,
    ) -> Option<&dyn MessageBodyReader<T>> {
        self.readers
            .iter()
            .map(|reader| &**reader)
            .find(|reader| reader.is_readable_for_resource(target, resource, media_type))
    }

    /// Reads the context's body with the first reader accepting `media_type` for `T`.
    pub fn read_from_context(
        &self,
        media_type: Option<&MediaType>,
        context: &mut ServerRequestContext,
    ) -> Result<Option<T>, ReadError> {
        let target = TargetType::of::<T>();
        let Some(reader) = self.select(&target, media_type) else {
            debug!(target_type = target.name(), media_type = ?media_type, "no body reader found");
            return Err(ReadError::no_reader(target.name(), media_type));
        };
        reader.read_from_context(&target, media_type, context)
    }
}

impl<T> fmt::Debug for BodyReaders<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyReaders").field("readers", &self.readers.len()).finish()
    }
}

impl<T> fmt::Debug for BodyReadersBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyReadersBuilder").field("readers", &self.readers.len()).finish()
    }
}
