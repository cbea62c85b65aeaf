pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use error::RemoteError;
pub use http::HttpBackend;
pub use traits::RemoteBackend;
pub use types::{
    decode_envelope, parse_tags, BlogUpload, Envelope, ImageUpload, RemoteBlog,
    RemoteTestimonial, Session, TestimonialUpload, UserProfile,
};

#[cfg(test)]
pub(crate) mod scripted;
