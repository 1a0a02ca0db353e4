//! 考勤表（勾选框状态）

use crate::errors::{AttendanceError, Result};
use crate::models::attendance::{AttendanceEntry, AttendanceSubmission};
use crate::models::classes::Class;
use crate::models::sessions::Student;
use crate::utils::{today, validate_date};

#[derive(Debug, Clone)]
pub struct AttendanceSheet {
    class: Class,
    students: Vec<Student>,
    present: Vec<bool>,
    date: String,
    weight: i64,
}

impl AttendanceSheet {
    /// 新表默认全部缺勤，日期为今天
    pub fn new(class: Class, students: Vec<Student>, weight: i64) -> Result<Self> {
        check_weight(weight)?;
        let present = vec![false; students.len()];
        Ok(Self {
            class,
            students,
            present,
            date: today(),
            weight,
        })
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn set_date(&mut self, date: &str) -> Result<()> {
        validate_date(date)?;
        self.date = date.trim().to_string();
        Ok(())
    }

    pub fn set_weight(&mut self, weight: i64) -> Result<()> {
        check_weight(weight)?;
        self.weight = weight;
        Ok(())
    }

    fn index_of(&self, student_id: &str) -> Result<usize> {
        self.students
            .iter()
            .position(|s| s.student_id == student_id)
            .ok_or_else(|| {
                AttendanceError::not_found(format!(
                    "Student {student_id} is not enrolled in {}",
                    self.class.name
                ))
            })
    }

    pub fn set_present(&mut self, student_id: &str, present: bool) -> Result<()> {
        let index = self.index_of(student_id)?;
        self.present[index] = present;
        Ok(())
    }

    pub fn toggle(&mut self, student_id: &str) -> Result<bool> {
        let index = self.index_of(student_id)?;
        self.present[index] = !self.present[index];
        Ok(self.present[index])
    }

    pub fn is_present(&self, student_id: &str) -> bool {
        self.index_of(student_id)
            .map(|i| self.present[i])
            .unwrap_or(false)
    }

    /// 空名单也视为全选
    pub fn all_selected(&self) -> bool {
        self.present.iter().all(|p| *p)
    }

    /// 全选 / 取消全选
    pub fn toggle_all(&mut self) {
        let next = !self.all_selected();
        self.present.iter_mut().for_each(|p| *p = next);
    }

    pub fn present_count(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }

    /// 出勤为当前权重，缺勤为 0，没有中间值
    pub fn to_submission(&self) -> Result<AttendanceSubmission> {
        check_weight(self.weight)?;
        validate_date(&self.date)?;

        let students = self
            .students
            .iter()
            .zip(&self.present)
            .map(|(student, present)| AttendanceEntry {
                student_id: student.student_id.clone(),
                name: student.name.clone(),
                status: if *present { self.weight } else { 0 },
            })
            .collect();

        Ok(AttendanceSubmission {
            date: self.date.clone(),
            attendance_weight: self.weight,
            class_name: self.class.name.clone(),
            session: self.class.session.clone(),
            students,
        })
    }
}

fn check_weight(weight: i64) -> Result<()> {
    if weight < 1 {
        return Err(AttendanceError::validation(
            "Attendance count must be at least 1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(weight: i64) -> AttendanceSheet {
        let class = Class {
            id: "c1".to_string(),
            name: "CSE-101".to_string(),
            session: "2026".to_string(),
        };
        let students = vec![
            Student::new("S1", "Alice"),
            Student::new("S2", "Bob"),
            Student::new("S3", "Carol"),
        ];
        AttendanceSheet::new(class, students, weight).unwrap()
    }

    #[test]
    fn test_status_is_zero_or_weight() {
        for weight in [1, 2, 5] {
            let mut sheet = sheet(weight);
            sheet.set_present("S2", true).unwrap();
            let submission = sheet.to_submission().unwrap();
            for entry in &submission.students {
                assert!(entry.status == 0 || entry.status == weight);
            }
            assert_eq!(submission.students[1].status, weight);
            assert_eq!(submission.students[0].status, 0);
            assert_eq!(submission.attendance_weight, weight);
        }
    }

    #[test]
    fn test_weight_must_be_positive() {
        let mut sheet = sheet(1);
        assert_eq!(sheet.set_weight(0).unwrap_err().code(), "E003");
        assert_eq!(sheet.weight(), 1);

        let class = sheet.class().clone();
        assert!(AttendanceSheet::new(class, vec![], -1).is_err());
    }

    #[test]
    fn test_toggle_all_selects_then_deselects() {
        let mut sheet = sheet(1);
        sheet.set_present("S1", true).unwrap();
        assert!(!sheet.all_selected());

        sheet.toggle_all();
        assert!(sheet.all_selected());
        assert_eq!(sheet.present_count(), 3);

        sheet.toggle_all();
        assert_eq!(sheet.present_count(), 0);
    }

    #[test]
    fn test_unknown_student_is_rejected() {
        let mut sheet = sheet(1);
        assert_eq!(sheet.toggle("S9").unwrap_err().code(), "E009");
        assert!(sheet.toggle("S3").unwrap());
        assert!(sheet.is_present("S3"));
    }

    #[test]
    fn test_submission_carries_class_context() {
        let mut sheet = sheet(2);
        sheet.set_date("2026-03-02").unwrap();
        assert!(sheet.set_date("03/02/2026").is_err());

        let json = serde_json::to_value(sheet.to_submission().unwrap()).unwrap();
        assert_eq!(json["date"], "2026-03-02");
        assert_eq!(json["attdnc"], 2);
        assert_eq!(json["className"], "CSE-101");
        assert_eq!(json["session"], "2026");
        assert_eq!(json["students"][0]["studentId"], "S1");
    }
}
