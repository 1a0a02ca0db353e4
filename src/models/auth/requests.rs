use serde::Serialize;
use ts_rs::TS;

// 管理员登录请求
#[derive(Debug, Clone, Serialize, TS)]
pub struct LoginRequest {
    /// 用户名
    pub username: String,
    /// 密码
    pub password: String,
}

// 教师登录请求
#[derive(Debug, Clone, Serialize, TS)]
pub struct TeacherLoginRequest {
    pub email: String,
    pub password: String,
}

// 发送验证码（注册 / 找回密码共用）
#[derive(Debug, Clone, Serialize, TS)]
pub struct SendOtpRequest {
    pub email: String,
}

// 校验验证码
#[derive(Debug, Clone, Serialize, TS)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

// 完成教师注册，提交后等待管理员审批
#[derive(Debug, Clone, Serialize, TS)]
pub struct CompleteRegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// 重置密码
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}
