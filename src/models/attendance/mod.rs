pub mod requests;

pub use requests::{AttendanceEntry, AttendanceSubmission};
