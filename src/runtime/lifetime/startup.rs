use std::sync::Arc;
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::navigation::NavigationController;
use crate::services::{
    AttendanceService, AuthService, ClassService, DashboardService, MarkService, ReportService,
    SessionService, TeacherService,
};
use crate::storage::{KeyValueStore, create_storage};

/// 一次命令运行所需的全部对象
pub struct AppContext {
    pub store: Arc<dyn KeyValueStore>,
    pub client: Arc<ApiClient>,
    pub auth: AuthService,
    pub sessions: SessionService,
    pub classes: ClassService,
    pub attendance: AttendanceService,
    pub reports: ReportService,
    pub marks: MarkService,
    pub teachers: TeacherService,
    pub dashboard: DashboardService,
    pub navigation: NavigationController,
}

impl AppContext {
    /// 由存储和客户端组装服务，不发起任何请求
    pub fn new(store: Arc<dyn KeyValueStore>, client: Arc<ApiClient>) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            sessions: SessionService::new(client.clone()),
            classes: ClassService::new(client.clone()),
            attendance: AttendanceService::new(client.clone()),
            reports: ReportService::new(client.clone()),
            marks: MarkService::new(client.clone()),
            teachers: TeacherService::new(client.clone()),
            dashboard: DashboardService::new(client.clone()),
            navigation: NavigationController::new(store.clone()),
            store,
            client,
        }
    }

    /// 恢复上次的登录态
    pub async fn bootstrap(&mut self) {
        let state = self.navigation.bootstrap(&self.auth).await;
        debug!("Bootstrap finished in state {:?}", state);
    }
}

/// 启动预处理：创建存储、客户端并恢复登录态
pub async fn prepare_client_startup() -> Result<AppContext> {
    let config = AppConfig::get();

    let store = create_storage().await?;
    let client = Arc::new(ApiClient::from_config(store.clone())?);
    debug!("API client targeting {}", config.api.base_url);

    if config.is_production() && config.api.base_url.starts_with("http://") {
        warn!(
            "API base URL {} is not using TLS in production",
            config.api.base_url
        );
    }

    let mut context = AppContext::new(store, client);
    context.bootstrap().await;
    Ok(context)
}
