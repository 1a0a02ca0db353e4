use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AttendanceError, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static OTP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{4,8}$").expect("Invalid otp regex"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 必填字段校验，返回去除首尾空白后的值
pub fn require_field<'a>(label: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AttendanceError::validation(format!("{label} is required")));
    }
    Ok(trimmed)
}

pub fn validate_email(email: &str) -> Result<()> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(AttendanceError::validation("Email format is invalid"));
    }
    Ok(())
}

pub fn validate_otp(otp: &str) -> Result<()> {
    if !OTP_RE.is_match(otp.trim()) {
        return Err(AttendanceError::validation(
            "Verification code must be 4 to 8 letters or digits",
        ));
    }
    Ok(())
}

/// 考勤日期必须是 YYYY-MM-DD
pub fn validate_date(date: &str) -> Result<chrono::NaiveDate> {
    Ok(chrono::NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)?)
}

/// 今天的日期（本地时区）
pub fn today() -> String {
    chrono::Local::now().date_naive().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field() {
        assert_eq!(require_field("Class Name", "  CSE-101 ").unwrap(), "CSE-101");
        let err = require_field("Class Name", "   ").unwrap_err();
        assert_eq!(err.message(), "Class Name is required");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("teacher@school.edu").is_ok());
        assert!(validate_email("teacher@school").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_otp() {
        assert!(validate_otp("123456").is_ok());
        assert!(validate_otp("12").is_err());
        assert!(validate_otp("12 456").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2026-02-28").is_ok());
        assert_eq!(validate_date("2026-02-30").unwrap_err().code(), "E011");
        assert!(validate_date(&today()).is_ok());
    }
}
