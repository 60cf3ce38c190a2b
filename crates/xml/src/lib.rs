//! Content-type gated XML request body reading.
//!
//! The crate plugs XML deserialization into a request pipeline as one body reader among
//! many:
//! - [`reader::XmlMessageBodyReader`] decides whether a target type and a media type are
//!   readable as XML and reads the body through an [`unmarshal::Unmarshaller`]
//! - [`reader::BodyReaders`] picks the first reader accepting a request
//! - [`extract::Xml`] does the whole trip from an [`http::Request`]

mod body;
mod media_type;
mod request;
mod target;

pub mod error;
pub mod extract;
pub mod reader;
pub mod stream;
pub mod unmarshal;

pub use body::buffer as buffer_body;
pub use body::BodyLimit;
pub use media_type::MediaType;
pub use media_type::WILDCARD;
pub use request::ServerRequestContext;
pub use target::TargetType;
