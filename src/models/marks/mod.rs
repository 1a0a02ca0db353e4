pub mod entities;
pub mod requests;

pub use entities::{AssessmentType, MarkRecord};
pub use requests::UploadMarksRequest;
