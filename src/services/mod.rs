//! 业务服务层
//!
//! 每个服务对应一组 REST 接口，负责请求前的客户端校验与响应的类型化。

pub mod attendance;
pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod marks;
pub mod reports;
pub mod sessions;
pub mod teachers;

pub use attendance::{AttendanceService, AttendanceSheet};
pub use auth::AuthService;
pub use classes::ClassService;
pub use dashboard::{AdminDashboard, DashboardService, TeacherDashboard};
pub use marks::MarkService;
pub use reports::ReportService;
pub use sessions::SessionService;
pub use teachers::TeacherService;
