use tracing::debug;

use crate::errors::Result;
use crate::models::auth::UserRole;
use crate::navigation::AppState;
use crate::runtime::lifetime::startup::AppContext;
use crate::utils::{Notice, TextTable};

use super::Rendered;

/// 选择角色并登录，成功后进入仪表盘
pub async fn login(
    ctx: &mut AppContext,
    role: UserRole,
    identifier: &str,
    password: &str,
) -> Result<Rendered> {
    if !ctx.navigation.state().is_authenticated() {
        ctx.navigation.choose_role(role)?;
    }

    let session = match ctx.auth.login(role, identifier, password).await {
        Ok(session) => session,
        Err(e) => {
            if !ctx.navigation.state().is_authenticated() {
                ctx.navigation.back_to_landing()?;
            }
            return Err(e);
        }
    };
    ctx.navigation.login(&session).await?;

    Ok(Rendered::from_notice(Notice::success(format!(
        "Logged in as {role}."
    ))))
}

pub async fn logout(ctx: &mut AppContext) -> Result<Rendered> {
    let was_authenticated = ctx.navigation.state().is_authenticated();
    ctx.navigation.logout().await?;
    debug!("Logout requested (authenticated: {})", was_authenticated);
    Ok(Rendered::from_notice(Notice::success("Logged out.")))
}

/// 当前登录态
pub fn status(ctx: &AppContext) -> Rendered {
    let state = ctx.navigation.state();
    let mut table = TextTable::new(["Field", "Value"]).title("Status");
    match state {
        AppState::Authenticated { role, page, .. } => {
            table.push_row(["State", "logged in"]);
            table.push_row(["Role".to_string(), role.to_string()]);
            table.push_row(["Page".to_string(), page.to_string()]);
        }
        AppState::AwaitingCredentials { role } => {
            table.push_row(["State", "awaiting credentials"]);
            table.push_row(["Role".to_string(), role.to_string()]);
        }
        AppState::Landing => {
            table.push_row(["State", "logged out"]);
        }
    }

    let notice = if state.is_authenticated() {
        Notice::info("Session is valid.")
    } else {
        Notice::info("Not logged in. Use `login --role admin|teacher`.")
    };
    Rendered::new().section(table).notice(notice)
}
