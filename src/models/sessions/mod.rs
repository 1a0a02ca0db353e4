pub mod entities;
pub mod requests;

pub use entities::{Session, Student};
pub use requests::{AddStudentsRequest, CreateSessionRequest};
