//! 教师注册流程：发送验证码 → 校验验证码 → 提交资料（等待管理员审批）

use tracing::info;

use crate::errors::Result;
use crate::models::MessageResponse;
use crate::models::auth::{CompleteRegistrationRequest, SendOtpRequest, VerifyOtpRequest};
use crate::utils::{require_field, validate_email, validate_otp};

use super::AuthService;

pub async fn handle_send_otp(service: &AuthService, email: &str) -> Result<MessageResponse> {
    let email = require_field("Email", email)?;
    validate_email(email)?;

    let request = SendOtpRequest {
        email: email.to_string(),
    };
    let response = service
        .client()
        .post_command(&["teacher", "register", "send-otp"], &request)
        .await?;
    info!("Registration code requested for {}", email);
    Ok(response)
}

pub async fn handle_verify_otp(
    service: &AuthService,
    email: &str,
    otp: &str,
) -> Result<MessageResponse> {
    let email = require_field("Email", email)?;
    validate_email(email)?;
    let otp = require_field("Verification code", otp)?;
    validate_otp(otp)?;

    let request = VerifyOtpRequest {
        email: email.to_string(),
        otp: otp.to_string(),
    };
    service
        .client()
        .post_command(&["teacher", "register", "verify-otp"], &request)
        .await
}

pub async fn handle_complete(
    service: &AuthService,
    name: &str,
    email: &str,
    password: &str,
) -> Result<MessageResponse> {
    let request = CompleteRegistrationRequest {
        name: require_field("Name", name)?.to_string(),
        email: {
            let email = require_field("Email", email)?;
            validate_email(email)?;
            email.to_string()
        },
        password: require_field("Password", password)?.to_string(),
    };
    let response = service
        .client()
        .post_command(&["teacher", "register", "complete"], &request)
        .await?;
    info!("Registration submitted for {}", request.email);
    Ok(response)
}
