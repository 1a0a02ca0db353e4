pub mod responses;
pub mod view;

pub use responses::{
    Assessment, AssessmentMark, AttendanceDate, AttendanceRecord, ComprehensiveReport,
};
pub use view::{
    AttendanceColumn, AttendanceRow, AttendanceTable, MarkCell, MarkColumn, MarkRow, MarksTable,
    ReportView, format_number,
};
