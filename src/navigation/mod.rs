//! 页面导航与登录态
//!
//! 状态转换是纯函数（[`state::reduce`]），控制器负责持久化和启动校验。

pub mod controller;
pub mod state;

pub use controller::NavigationController;
pub use state::{Action, AppState, Page, PageParams, reduce};
