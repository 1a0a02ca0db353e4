use crate::errors::Result;
use crate::models::MessageResponse;

use super::AuthService;

/// 任何 2xx 响应都表示 token 有效
pub async fn handle_verify_token(service: &AuthService) -> Result<()> {
    let _: MessageResponse = service
        .client()
        .command::<()>(reqwest::Method::GET, &["verify-token"], None)
        .await?;
    Ok(())
}
