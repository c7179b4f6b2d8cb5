pub mod caption;
pub mod error;
pub mod mime_detect;
pub mod traits;
pub mod types;

pub use caption::{extract_caption, CaptionAccessor, CAPTION_ACCESSORS};
pub use error::GlimpseError;
pub use mime_detect::{detect_mime_type, is_image, media_subtype};
pub use traits::{CaptionModel, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use types::{CaptionResult, DataUrl, FileDescriptor, Upload};
