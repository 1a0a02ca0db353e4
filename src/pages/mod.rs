//! 控制台页面
//!
//! 每个页面先通过导航控制器做角色校验，再加载数据，
//! 最后返回要打印的表格和一条结果提示。

pub mod add_class;
pub mod attendance_report;
pub mod bulk_upload;
pub mod class_attendance;
pub mod dashboard;
pub mod login;
pub mod manage_sessions;
pub mod registration;

use std::fmt;

use crate::errors::{AttendanceError, Result};
use crate::models::MessageResponse;
use crate::models::auth::UserRole;
use crate::navigation::{Page, PageParams};
use crate::runtime::lifetime::startup::AppContext;
use crate::utils::Notice;

/// 页面输出
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    pub sections: Vec<String>,
    pub notice: Option<Notice>,
}

impl Rendered {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, section: impl fmt::Display) -> Self {
        self.sections.push(section.to_string());
        self
    }

    pub fn notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    /// 只有一条提示的输出
    pub fn from_notice(notice: Notice) -> Self {
        Self::new().notice(notice)
    }

    /// 使用服务端返回的消息，为空时使用默认文案
    pub fn from_response(response: &MessageResponse, fallback: &str) -> Self {
        Self::from_notice(Notice::success(response.message_or(fallback)))
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}", section.trim_end())?;
            writeln!(f)?;
        }
        if let Some(notice) = &self.notice {
            writeln!(f, "{notice}")?;
        }
        Ok(())
    }
}

/// 进入页面，返回当前角色；未登录或角色不符时报错
pub(crate) fn enter(ctx: &mut AppContext, page: Page, params: PageParams) -> Result<UserRole> {
    let state = ctx.navigation.navigate(page, params)?;
    state
        .role()
        .ok_or_else(|| AttendanceError::authentication("Please log in first."))
}

/// 把错误转成页面提示
pub fn error_notice(err: &AttendanceError) -> Notice {
    Notice::error(err.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_prints_sections_then_notice() {
        let rendered = Rendered::new()
            .section("table one\n")
            .notice(Notice::success("Saved"));
        assert_eq!(rendered.to_string(), "table one\n\n[OK] Saved\n");
    }

    #[test]
    fn test_from_response_falls_back() {
        let response = MessageResponse {
            success: true,
            message: String::new(),
        };
        let rendered = Rendered::from_response(&response, "Class added successfully!");
        assert_eq!(
            rendered.notice.unwrap().message,
            "Class added successfully!"
        );
    }

    #[test]
    fn test_error_notice_uses_message_only() {
        let notice = error_notice(&AttendanceError::api("Session already exists"));
        assert!(notice.is_error());
        assert_eq!(notice.message, "Session already exists");
    }
}
