pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{AuthSession, UserRole};
pub use requests::*;
pub use responses::*;
