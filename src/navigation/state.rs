//! 应用状态与纯状态转换

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{AttendanceError, Result};
use crate::models::auth::UserRole;

/// 页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Dashboard,
    ManageSessions,
    AddClass,
    ClassAttendance,
    AttendanceReport,
    BulkUpload,
}

impl Page {
    /// 各角色可访问的页面
    pub fn allowed_for(role: UserRole) -> &'static [Page] {
        match role {
            UserRole::Admin => &[Page::Dashboard, Page::ManageSessions],
            UserRole::Teacher => &[
                Page::Dashboard,
                Page::AddClass,
                Page::ClassAttendance,
                Page::AttendanceReport,
                Page::BulkUpload,
            ],
        }
    }

    pub fn is_allowed_for(&self, role: UserRole) -> bool {
        Self::allowed_for(role).contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::ManageSessions => "manageSessions",
            Page::AddClass => "addClass",
            Page::ClassAttendance => "classAttendance",
            Page::AttendanceReport => "attendanceReport",
            Page::BulkUpload => "bulkUpload",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 页面参数，例如 `classId`、`sessionName`
///
/// 不针对页面做校验，由调用方保证。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams(BTreeMap<String, String>);

impl PageParams {
    pub const CLASS_ID: &'static str = "classId";
    pub const SESSION_NAME: &'static str = "sessionName";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum AppState {
    #[default]
    Landing,
    AwaitingCredentials {
        role: UserRole,
    },
    Authenticated {
        role: UserRole,
        page: Page,
        #[serde(default)]
        params: PageParams,
    },
}

impl AppState {
    pub fn role(&self) -> Option<UserRole> {
        match self {
            AppState::Landing => None,
            AppState::AwaitingCredentials { role } | AppState::Authenticated { role, .. } => {
                Some(*role)
            }
        }
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            AppState::Authenticated { page, .. } => Some(*page),
            _ => None,
        }
    }

    pub fn params(&self) -> Option<&PageParams> {
        match self {
            AppState::Authenticated { params, .. } => Some(params),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AppState::Authenticated { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ChooseRole(UserRole),
    BackToLanding,
    Login(UserRole),
    Logout,
    Navigate(Page, PageParams),
}

/// 状态转换；非法转换返回校验错误，原状态不变
pub fn reduce(state: &AppState, action: Action) -> Result<AppState> {
    match (state, action) {
        (AppState::Authenticated { .. }, Action::ChooseRole(_)) => Err(
            AttendanceError::validation("Already logged in. Log out before choosing a role."),
        ),
        (_, Action::ChooseRole(role)) => Ok(AppState::AwaitingCredentials { role }),

        (AppState::Authenticated { .. }, Action::BackToLanding) => Err(
            AttendanceError::validation("Already logged in. Log out to return to the start page."),
        ),
        (_, Action::BackToLanding) => Ok(AppState::Landing),

        (_, Action::Login(role)) => Ok(AppState::Authenticated {
            role,
            page: Page::Dashboard,
            params: PageParams::new(),
        }),

        (_, Action::Logout) => Ok(AppState::Landing),

        (AppState::Authenticated { role, .. }, Action::Navigate(page, params)) => {
            if !page.is_allowed_for(*role) {
                return Err(AttendanceError::validation(format!(
                    "Page {page} is not available to {role} accounts"
                )));
            }
            Ok(AppState::Authenticated {
                role: *role,
                page,
                params,
            })
        }
        (_, Action::Navigate(page, _)) => Err(AttendanceError::validation(format!(
            "Please log in before opening {page}"
        ))),
    }
}
