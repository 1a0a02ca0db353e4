use crate::errors::Result;
use crate::navigation::{Page, PageParams};
use crate::runtime::lifetime::startup::AppContext;
use crate::utils::Notice;

use super::{Rendered, enter};

/// 新建班级；未指定 Session 时使用列表中的第一个
pub async fn create(
    ctx: &mut AppContext,
    class_name: &str,
    session_name: Option<&str>,
) -> Result<Rendered> {
    enter(ctx, Page::AddClass, PageParams::new())?;

    let session_name = match session_name {
        Some(name) => name.to_string(),
        None => {
            let sessions = ctx.sessions.list_sessions().await?;
            sessions
                .into_iter()
                .next()
                .map(|session| session.name)
                .unwrap_or_default()
        }
    };

    ctx.classes.create_class(class_name, &session_name).await?;
    Ok(Rendered::from_notice(Notice::success(
        "Class created successfully!",
    )))
}

pub async fn delete(ctx: &mut AppContext, class_id: &str) -> Result<Rendered> {
    enter(ctx, Page::Dashboard, PageParams::new())?;
    let response = ctx.classes.delete_class(class_id).await?;
    Ok(Rendered::from_response(&response, "Class deleted."))
}
