//! 报表 CSV 导出

use crate::errors::{AttendanceError, Result};
use crate::models::reports::{AttendanceTable, MarksTable, format_number};

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let data = wtr
        .into_inner()
        .map_err(|e| AttendanceError::file_operation(format!("Failed to flush CSV: {e}")))?;
    String::from_utf8(data)
        .map_err(|e| AttendanceError::serialization(format!("CSV is not valid UTF-8: {e}")))
}

/// 考勤表导出：学号、姓名、各日期、Total、Percentage
pub fn attendance_csv(table: &AttendanceTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["Student ID".to_string(), "Name".to_string()];
    header.extend(
        table
            .columns
            .iter()
            .map(|c| format!("{} (x{})", c.date, c.attendance_weight)),
    );
    header.push(format!("Total ({})", table.total_possible));
    header.push("Percentage".to_string());
    wtr.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![row.student_id.clone(), row.name.clone()];
        record.extend(row.cells.iter().map(|c| c.to_string()));
        record.push(row.total.to_string());
        record.push(format!("{:.2}%", row.percentage));
        wtr.write_record(&record)?;
    }

    finish(wtr)
}

pub fn marks_csv(table: &MarksTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["Student ID".to_string(), "Name".to_string()];
    header.extend(table.columns.iter().map(|c| c.header()));
    wtr.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![row.student_id.clone(), row.name.clone()];
        record.extend(row.cells.iter().map(|c| c.display()));
        wtr.write_record(&record)?;
    }

    finish(wtr)
}
