pub mod notice;
pub mod table;
pub mod validate;

pub use notice::{Notice, NoticeKind};
pub use table::TextTable;
pub use validate::{require_field, today, validate_date, validate_email, validate_otp};
