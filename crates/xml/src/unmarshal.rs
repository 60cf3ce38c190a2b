//! The xml binding facility used by [`XmlMessageBodyReader`](crate::reader::XmlMessageBodyReader).

use serde::de::DeserializeOwned;
use std::io::BufRead;

/// Turns a stream of xml bytes into a value of `T`.
///
/// Implementations decide namespace handling, validation and the like on their own, no
/// options travel through this call.
pub trait Unmarshaller: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn unmarshal<T: DeserializeOwned + 'static>(&self, stream: &mut dyn BufRead) -> Result<T, Self::Error>;
}

/// [`Unmarshaller`] backed by `quick-xml`'s serde deserializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickXmlUnmarshaller;

impl Unmarshaller for QuickXmlUnmarshaller {
    type Error = quick_xml::DeError;

    fn unmarshal<T: DeserializeOwned + 'static>(&self, stream: &mut dyn BufRead) -> Result<T, Self::Error> {
        quick_xml::de::from_reader(stream)
    }
}
