//! Glimpse Gateway HTTP Server
//!
//! Accepts image uploads on `POST /describe` and answers with a caption from
//! the configured captioning model. Every other request gets a JSON 404.

pub mod describe;
pub mod error;
pub mod server;
pub mod upload;

pub use error::ApiError;
pub use server::{build_router, start_server, GatewayState};
pub use upload::{parse_upload, UploadForm};
