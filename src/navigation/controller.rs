use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::models::auth::{AuthSession, UserRole};
use crate::services::AuthService;
use crate::storage::{AUTH_TOKEN_KEY, KeyValueStore, USER_ROLE_KEY};

use super::state::{Action, AppState, Page, PageParams, reduce};

/// 持有当前状态和持久化存储，只有 `bootstrap` 会发起网络请求
pub struct NavigationController {
    state: AppState,
    store: Arc<dyn KeyValueStore>,
}

/// 持久化的 (token, role) 的读取结果
enum StoredPair {
    Empty,
    Complete(AuthSession),
    Broken,
}

impl NavigationController {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: AppState::Landing,
            store,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn apply(&mut self, action: Action) -> Result<&AppState> {
        self.state = reduce(&self.state, action)?;
        Ok(&self.state)
    }

    pub fn choose_role(&mut self, role: UserRole) -> Result<&AppState> {
        self.apply(Action::ChooseRole(role))
    }

    pub fn back_to_landing(&mut self) -> Result<&AppState> {
        self.apply(Action::BackToLanding)
    }

    pub fn navigate(&mut self, page: Page, params: PageParams) -> Result<&AppState> {
        let state = self.apply(Action::Navigate(page, params))?;
        debug!("Navigated to {}", page);
        Ok(state)
    }

    /// 先写存储再切换状态，写入失败时状态不变
    pub async fn login(&mut self, session: &AuthSession) -> Result<&AppState> {
        self.store.set(AUTH_TOKEN_KEY, &session.token).await?;
        self.store
            .set(USER_ROLE_KEY, &session.role.to_string())
            .await?;
        debug!("Persisted credentials for {}", session.role);
        self.apply(Action::Login(session.role))
    }

    /// 无论当前在哪个页面都回到首页并清除两个键
    pub async fn logout(&mut self) -> Result<&AppState> {
        self.state = reduce(&self.state, Action::Logout)?;
        self.clear_persisted().await?;
        info!("Logged out");
        Ok(&self.state)
    }

    /// 两个键都尝试删除，返回第一个错误
    async fn clear_persisted(&self) -> Result<()> {
        let token = self.store.remove(AUTH_TOKEN_KEY).await;
        let role = self.store.remove(USER_ROLE_KEY).await;
        token.and(role)
    }

    async fn read_pair(&self) -> Result<StoredPair> {
        let token = self.store.get(AUTH_TOKEN_KEY).await?;
        let role = self.store.get(USER_ROLE_KEY).await?;
        Ok(match (token, role) {
            (None, None) => StoredPair::Empty,
            (Some(token), Some(role)) if !token.is_empty() => match role.parse::<UserRole>() {
                Ok(role) => StoredPair::Complete(AuthSession { token, role }),
                Err(_) => StoredPair::Broken,
            },
            _ => StoredPair::Broken,
        })
    }

    /// 已保存的登录态（不做网络校验）
    pub async fn persisted_session(&self) -> Result<Option<AuthSession>> {
        Ok(match self.read_pair().await? {
            StoredPair::Complete(session) => Some(session),
            _ => None,
        })
    }

    /// 启动时恢复登录态
    ///
    /// 校验失败不向用户报告，只清空存储回到首页。
    pub async fn bootstrap(&mut self, auth: &AuthService) -> &AppState {
        self.state = AppState::Landing;

        let session = match self.read_pair().await {
            Ok(StoredPair::Empty) => return &self.state,
            Ok(StoredPair::Complete(session)) => session,
            Ok(StoredPair::Broken) => {
                info!("Stored credentials are incomplete, clearing them");
                self.clear_quietly().await;
                return &self.state;
            }
            Err(e) => {
                warn!("Failed to read stored credentials: {}", e);
                return &self.state;
            }
        };

        match auth.verify_token().await {
            Ok(()) => {
                debug!("Stored token verified for {}", session.role);
                self.state = AppState::Authenticated {
                    role: session.role,
                    page: Page::Dashboard,
                    params: PageParams::new(),
                };
            }
            Err(e) => {
                info!("Stored token rejected: {}", e);
                self.clear_quietly().await;
            }
        }
        &self.state
    }

    async fn clear_quietly(&self) {
        if let Err(e) = self.clear_persisted().await {
            warn!("Failed to clear stored credentials: {}", e);
        }
    }
}
