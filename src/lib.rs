//! Attendance - 考勤管理客户端
//!
//! 通过 REST API 管理学期名单、班级、考勤与成绩，附带控制台前端。
//!
//! # 架构
//! - `bulk`: 名单与成绩 CSV 解析
//! - `cli`: 命令行定义与分发
//! - `client`: 远端 API 请求封装
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 请求 / 响应数据模型
//! - `navigation`: 页面导航与登录态
//! - `pages`: 控制台页面
//! - `report`: 报表透视与导出
//! - `runtime`: 启动流程
//! - `services`: 业务服务层
//! - `storage`: 本地键值存储
//! - `utils`: 工具函数

pub mod bulk;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod report;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
