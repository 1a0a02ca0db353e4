//! 教师注册与找回密码
//!
//! 这两个流程不需要登录，也不改变导航状态。

use crate::errors::{AttendanceError, Result};
use crate::runtime::lifetime::startup::AppContext;

use super::Rendered;

const OTP_SENT: &str = "Verification code sent to your email.";
const OTP_VERIFIED: &str = "Email verified. You can now complete your registration.";
const REGISTRATION_SUBMITTED: &str =
    "Registration submitted. Please wait for an administrator to approve your account.";
const RESET_OTP_VERIFIED: &str = "Code verified. You can now set a new password.";
const PASSWORD_RESET: &str = "Password reset successfully. Please log in.";

pub async fn send_registration_otp(ctx: &AppContext, email: &str) -> Result<Rendered> {
    let response = ctx.auth.send_registration_otp(email).await?;
    Ok(Rendered::from_response(&response, OTP_SENT))
}

pub async fn verify_registration_otp(ctx: &AppContext, email: &str, otp: &str) -> Result<Rendered> {
    let response = ctx.auth.verify_registration_otp(email, otp).await?;
    Ok(Rendered::from_response(&response, OTP_VERIFIED))
}

pub async fn complete_registration(
    ctx: &AppContext,
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Rendered> {
    check_confirmation(password, confirm_password)?;
    let response = ctx.auth.complete_registration(name, email, password).await?;
    Ok(Rendered::from_response(&response, REGISTRATION_SUBMITTED))
}

pub async fn send_reset_otp(ctx: &AppContext, email: &str) -> Result<Rendered> {
    let response = ctx.auth.send_reset_otp(email).await?;
    Ok(Rendered::from_response(&response, OTP_SENT))
}

pub async fn verify_reset_otp(ctx: &AppContext, email: &str, otp: &str) -> Result<Rendered> {
    let response = ctx.auth.verify_reset_otp(email, otp).await?;
    Ok(Rendered::from_response(&response, RESET_OTP_VERIFIED))
}

pub async fn reset_password(
    ctx: &AppContext,
    email: &str,
    otp: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<Rendered> {
    check_confirmation(new_password, confirm_password)?;
    let response = ctx.auth.reset_password(email, otp, new_password).await?;
    Ok(Rendered::from_response(&response, PASSWORD_RESET))
}

fn check_confirmation(password: &str, confirm: &str) -> Result<()> {
    if password != confirm {
        return Err(AttendanceError::validation("Passwords do not match."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_confirmation() {
        assert!(check_confirmation("secret1", "secret1").is_ok());
        assert_eq!(
            check_confirmation("secret1", "secret2").unwrap_err().message(),
            "Passwords do not match."
        );
    }
}
