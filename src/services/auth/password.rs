//! 找回密码流程

use crate::errors::Result;
use crate::models::MessageResponse;
use crate::models::auth::{ResetPasswordRequest, SendOtpRequest, VerifyOtpRequest};
use crate::utils::{require_field, validate_email, validate_otp};

use super::AuthService;

pub async fn handle_send_otp(service: &AuthService, email: &str) -> Result<MessageResponse> {
    let email = require_field("Email", email)?;
    validate_email(email)?;

    service
        .client()
        .post_command(
            &["teacher", "forgot-password", "send-otp"],
            &SendOtpRequest {
                email: email.to_string(),
            },
        )
        .await
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

    service
        .client()
        .post_command(
            &["teacher", "forgot-password", "verify-otp"],
            &VerifyOtpRequest {
                email: email.to_string(),
                otp: otp.to_string(),
            },
        )
        .await
}

pub async fn handle_reset_password(
    service: &AuthService,
    email: &str,
    otp: &str,
    new_password: &str,
) -> Result<MessageResponse> {
    let email = require_field("Email", email)?;
    validate_email(email)?;
    let otp = require_field("Verification code", otp)?;
    validate_otp(otp)?;
    let new_password = require_field("New password", new_password)?;

    service
        .client()
        .post_command(
            &["teacher", "reset-password"],
            &ResetPasswordRequest {
                email: email.to_string(),
                otp: otp.to_string(),
                new_password: new_password.to_string(),
            },
        )
        .await
}
