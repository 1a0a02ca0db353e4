//! 仪表盘数据加载
//!
//! 每次进入仪表盘都重新拉取，不缓存。

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::classes::Class;
use crate::models::sessions::Session;
use crate::models::teachers::Teacher;

use super::{ClassService, SessionService, TeacherService};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub sessions: Vec<Session>,
    pub pending_teachers: Vec<Teacher>,
    pub teachers: Vec<Teacher>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDashboard {
    pub classes: Vec<Class>,
    pub sessions: Vec<Session>,
}

pub struct DashboardService {
    sessions: SessionService,
    classes: ClassService,
    teachers: TeacherService,
}

impl DashboardService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            sessions: SessionService::new(client.clone()),
            classes: ClassService::new(client.clone()),
            teachers: TeacherService::new(client),
        }
    }

    /// 三个请求并发发出，各一次；任一失败则整体失败
    pub async fn load_admin(&self) -> Result<AdminDashboard> {
        let (sessions, pending_teachers, teachers) = futures_util::try_join!(
            self.sessions.list_sessions(),
            self.teachers.list_pending(),
            self.teachers.list_all()
        )?;
        debug!(
            "Admin dashboard loaded: {} sessions, {} pending, {} teachers",
            sessions.len(),
            pending_teachers.len(),
            teachers.len()
        );
        Ok(AdminDashboard {
            sessions,
            pending_teachers,
            teachers,
        })
    }

    pub async fn load_teacher(&self) -> Result<TeacherDashboard> {
        let (classes, sessions) =
            futures_util::try_join!(self.classes.list_classes(), self.sessions.list_sessions())?;
        debug!(
            "Teacher dashboard loaded: {} classes, {} sessions",
            classes.len(),
            sessions.len()
        );
        Ok(TeacherDashboard { classes, sessions })
    }
}
