pub mod response;

pub use response::{ErrorBody, MessageResponse};
