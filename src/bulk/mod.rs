//! 批量上传解析
//!
//! 名单：无表头，每行 `学号,姓名[,其余列忽略]`。
//! 成绩：首行为表头，必须包含 studentId、studentName、mark（不区分大小写）。
//!
//! 不合格的行直接丢弃，不向用户报告，只记录 debug 日志。

use std::collections::HashMap;
use std::io::Cursor;
use tracing::debug;

use crate::errors::{AttendanceError, Result};
use crate::models::marks::MarkRecord;
use crate::models::sessions::Student;

const STUDENT_ID_COLUMN: &str = "studentid";
const STUDENT_NAME_COLUMN: &str = "studentname";
const MARK_COLUMN: &str = "mark";

/// 解析名单文本，保留前两列都非空的行
pub fn parse_roster(text: &str) -> Vec<Student> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(text.as_bytes()));

    let mut students = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let line = index + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!("Roster line {} dropped: {}", line, e);
                continue;
            }
        };

        let id = record.get(0).unwrap_or("");
        let name = record.get(1).unwrap_or("");
        if id.is_empty() || name.is_empty() {
            debug!("Roster line {} dropped: missing id or name", line);
            continue;
        }
        students.push(Student::new(id, name));
    }
    students
}

/// 解析成绩文本
///
/// 缺少必需列时整个文件报错；单行不合格时丢弃该行。
pub fn parse_marks(text: &str) -> Result<Vec<MarkRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(text.as_bytes()));

    let headers = rdr
        .headers()
        .map_err(|e| AttendanceError::parse(format!("Failed to read header row: {e}")))?;
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_lowercase(), i))
        .collect();

    let column = |name: &str| {
        header_map.get(name).copied().ok_or_else(|| {
            AttendanceError::validation(format!(
                "Missing required column: {name}. Expected studentId, studentName, mark"
            ))
        })
    };
    let id_idx = column(STUDENT_ID_COLUMN)?;
    let name_idx = column(STUDENT_NAME_COLUMN)?;
    let mark_idx = column(MARK_COLUMN)?;

    let mut records = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        // 1-based，跳过表头
        let line = index + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!("Mark line {} dropped: {}", line, e);
                continue;
            }
        };

        let id = record.get(id_idx).unwrap_or("");
        let name = record.get(name_idx).unwrap_or("");
        let mark = record.get(mark_idx).unwrap_or("");
        if id.is_empty() || name.is_empty() || mark.is_empty() {
            debug!("Mark line {} dropped: missing field", line);
            continue;
        }

        match mark.parse::<f64>() {
            Ok(mark) if mark.is_finite() => records.push(MarkRecord {
                student_id: id.to_string(),
                student_name: name.to_string(),
                mark,
            }),
            _ => debug!("Mark line {} dropped: '{}' is not a number", line, mark),
        }
    }
    Ok(records)
}
