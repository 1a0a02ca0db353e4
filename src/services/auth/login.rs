use tracing::{info, warn};

use crate::errors::{AttendanceError, Result};
use crate::models::auth::{
    AuthSession, LoginRequest, LoginResponse, TeacherLoginRequest, UserRole,
};
use crate::utils::{require_field, validate_email};

use super::AuthService;

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

pub async fn handle_login(
    service: &AuthService,
    role: UserRole,
    identifier: &str,
    password: &str,
) -> Result<AuthSession> {
    let password = require_field("Password", password)?;

    // 1. 按角色构造请求体
    let response: LoginResponse = match role {
        UserRole::Admin => {
            let request = LoginRequest {
                username: require_field("Username", identifier)?.to_string(),
                password: password.to_string(),
            };
            service
                .client()
                .post(role.login_endpoint(), &request)
                .await?
        }
        UserRole::Teacher => {
            let email = require_field("Email", identifier)?;
            validate_email(email)?;
            let request = TeacherLoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            };
            service
                .client()
                .post(role.login_endpoint(), &request)
                .await?
        }
    };

    // 2. 没有 token 视为失败
    let token = response
        .token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            AttendanceError::authentication(response.message.unwrap_or_else(|| LOGIN_FAILED.into()))
        })?;

    if let Some(server_role) = response.role
        && server_role != role
    {
        warn!(
            "Server reported role {} for a {} login, keeping the selected role",
            server_role, role
        );
    }

    info!("Logged in as {}", role);
    Ok(AuthSession { token, role })
}
