pub mod mock;
pub mod vision;

pub use mock::MockCaptionModel;
pub use glimpse_core::{DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use vision::BytezModel;
