pub mod login;
pub mod password;
pub mod register;
pub mod token;

use std::sync::Arc;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::MessageResponse;
use crate::models::auth::{AuthSession, UserRole};

pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub(crate) fn client(&self) -> &ApiClient {
        &self.client
    }

    // 登录（管理员使用用户名，教师使用邮箱）
    pub async fn login(
        &self,
        role: UserRole,
        identifier: &str,
        password: &str,
    ) -> Result<AuthSession> {
        login::handle_login(self, role, identifier, password).await
    }

    // 验证令牌
    pub async fn verify_token(&self) -> Result<()> {
        token::handle_verify_token(self).await
    }

    // 教师注册：发送验证码
    pub async fn send_registration_otp(&self, email: &str) -> Result<MessageResponse> {
        register::handle_send_otp(self, email).await
    }

    // 教师注册：校验验证码
    pub async fn verify_registration_otp(&self, email: &str, otp: &str) -> Result<MessageResponse> {
        register::handle_verify_otp(self, email, otp).await
    }

    // 教师注册：提交资料
    pub async fn complete_registration(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<MessageResponse> {
        register::handle_complete(self, name, email, password).await
    }

    // 找回密码：发送验证码
    pub async fn send_reset_otp(&self, email: &str) -> Result<MessageResponse> {
        password::handle_send_otp(self, email).await
    }

    // 找回密码：校验验证码
    pub async fn verify_reset_otp(&self, email: &str, otp: &str) -> Result<MessageResponse> {
        password::handle_verify_otp(self, email, otp).await
    }

    // 找回密码：设置新密码
    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<MessageResponse> {
        password::handle_reset_password(self, email, otp, new_password).await
    }
}
