pub mod photo;
pub mod timestamp;
pub mod types;
pub mod upload;

pub use photo::{NewPhoto, PhotoRecord};
pub use timestamp::Timestamp;
pub use types::PhotoId;
pub use upload::UploadSummary;
