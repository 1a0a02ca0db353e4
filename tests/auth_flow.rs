mod support;

use rust_attendance_next::models::MessageResponse;
use rust_attendance_next::models::auth::UserRole;
use rust_attendance_next::navigation::{AppState, Page};
use rust_attendance_next::pages;
use rust_attendance_next::storage::{AUTH_TOKEN_KEY, FileStorage, KeyValueStore, USER_ROLE_KEY};
use std::sync::Arc;

use rust_attendance_next::runtime::lifetime::startup::AppContext;
use support::{ADMIN_TOKEN, TEACHER_TOKEN, TestServer};

#[actix_web::test]
async fn test_admin_login_then_dashboard_fetches_each_list_once() {
    let server = TestServer::start().await;
    let (mut ctx, store) = server.context();

    let rendered = pages::login::login(&mut ctx, UserRole::Admin, "admin", "secret")
        .await
        .unwrap();
    assert_eq!(rendered.notice.unwrap().message, "Logged in as admin.");
    assert_eq!(
        store.get(AUTH_TOKEN_KEY).await.unwrap().as_deref(),
        Some(ADMIN_TOKEN)
    );
    assert_eq!(store.get(USER_ROLE_KEY).await.unwrap().as_deref(), Some("admin"));

    let rendered = pages::dashboard::show(&mut ctx).await.unwrap().to_string();
    assert!(rendered.contains("2027 Fall"));
    assert!(rendered.contains("eli@example.com"));

    let backend = &server.backend;
    assert_eq!(backend.count("GET", "/sessions"), 1);
    assert_eq!(backend.count("GET", "/admin/teachers/pending"), 1);
    assert_eq!(backend.count("GET", "/admin/teachers"), 1);
    assert_eq!(backend.count("GET", "/classes"), 0);

    // 登录之后的请求都带上 token
    let expected = format!("Bearer {ADMIN_TOKEN}");
    assert!(
        backend
            .calls()
            .iter()
            .filter(|c| c.path != "/login")
            .all(|c| c.authorization.as_deref() == Some(expected.as_str()))
    );

    server.stop().await;
}

#[actix_web::test]
async fn test_failed_login_surfaces_server_message() {
    let server = TestServer::start().await;
    let (mut ctx, store) = server.context();

    let err = pages::login::login(&mut ctx, UserRole::Admin, "admin", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");
    assert_eq!(err.message(), "Invalid credentials");
    assert_eq!(ctx.navigation.state(), &AppState::Landing);
    assert_eq!(store.get(AUTH_TOKEN_KEY).await.unwrap(), None);

    let err = pages::login::login(&mut ctx, UserRole::Teacher, "dana@example.com", "nope")
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Account not approved yet");

    server.stop().await;
}

#[actix_web::test]
async fn test_teacher_login_rejects_bad_email_without_request() {
    let server = TestServer::start().await;
    let (mut ctx, _) = server.context();

    let err = pages::login::login(&mut ctx, UserRole::Teacher, "not-an-email", "secret")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E003");
    assert_eq!(server.backend.count("POST", "/teacher/login"), 0);

    server.stop().await;
}

#[actix_web::test]
async fn test_bootstrap_restores_valid_session() {
    let server = TestServer::start().await;
    let (mut ctx, store) = server.context();
    store.set(AUTH_TOKEN_KEY, TEACHER_TOKEN).await.unwrap();
    store.set(USER_ROLE_KEY, "teacher").await.unwrap();

    ctx.bootstrap().await;
    assert_eq!(ctx.navigation.state().role(), Some(UserRole::Teacher));
    assert_eq!(ctx.navigation.state().page(), Some(Page::Dashboard));
    assert_eq!(server.backend.count("GET", "/verify-token"), 1);

    server.stop().await;
}

#[actix_web::test]
async fn test_bootstrap_failure_clears_storage_silently() {
    let server = TestServer::start().await;
    let (mut ctx, store) = server.context();
    store.set(AUTH_TOKEN_KEY, "expired").await.unwrap();
    store.set(USER_ROLE_KEY, "admin").await.unwrap();

    ctx.bootstrap().await;
    assert_eq!(ctx.navigation.state(), &AppState::Landing);
    assert_eq!(store.get(AUTH_TOKEN_KEY).await.unwrap(), None);
    assert_eq!(store.get(USER_ROLE_KEY).await.unwrap(), None);

    // 未登录时页面被拒绝
    let err = pages::dashboard::show(&mut ctx).await.unwrap_err();
    assert_eq!(err.code(), "E003");
    assert_eq!(server.backend.count("GET", "/sessions"), 0);

    server.stop().await;
}

#[actix_web::test]
async fn test_login_survives_restart_with_file_storage() {
    let server = TestServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("session.json");

    {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStorage::open(&path).await.unwrap());
        let mut ctx = AppContext::new(store.clone(), server.client(store));
        pages::login::login(&mut ctx, UserRole::Admin, "admin", "secret")
            .await
            .unwrap();
    }

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStorage::open(&path).await.unwrap());
    let mut ctx = AppContext::new(store.clone(), server.client(store.clone()));
    ctx.bootstrap().await;
    assert_eq!(ctx.navigation.state().role(), Some(UserRole::Admin));

    pages::login::logout(&mut ctx).await.unwrap();
    let reopened = FileStorage::open(&path).await.unwrap();
    assert_eq!(reopened.get(AUTH_TOKEN_KEY).await.unwrap(), None);
    assert_eq!(reopened.get(USER_ROLE_KEY).await.unwrap(), None);

    server.stop().await;
}

#[actix_web::test]
async fn test_admin_cannot_open_teacher_pages() {
    let server = TestServer::start().await;
    let (mut ctx, _) = server.context();
    pages::login::login(&mut ctx, UserRole::Admin, "admin", "secret")
        .await
        .unwrap();

    let err = pages::attendance_report::show(&mut ctx, "c1", None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E003");
    assert_eq!(ctx.navigation.state().page(), Some(Page::Dashboard));
    assert_eq!(
        server
            .backend
            .count("GET", "/classes/c1/comprehensive-report"),
        0
    );

    server.stop().await;
}

#[actix_web::test]
async fn test_teacher_dashboard_fetches_classes_and_sessions_once() {
    let server = TestServer::start().await;
    let (mut ctx, _) = server.context();
    pages::login::login(&mut ctx, UserRole::Teacher, "dana@example.com", "secret")
        .await
        .unwrap();

    let rendered = pages::dashboard::show(&mut ctx).await.unwrap().to_string();
    assert!(rendered.contains("CSE-101"));
    assert!(rendered.contains("2027 Fall"));

    let backend = &server.backend;
    assert_eq!(backend.count("GET", "/classes"), 1);
    assert_eq!(backend.count("GET", "/sessions"), 1);
    assert_eq!(backend.count("GET", "/admin/teachers"), 0);
    assert_eq!(backend.count("GET", "/admin/teachers/pending"), 0);

    server.stop().await;
}

#[actix_web::test]
async fn test_teacher_deletes_session_and_class_from_dashboard() {
    let server = TestServer::start().await;
    let (mut ctx, _) = server.context();
    pages::login::login(&mut ctx, UserRole::Teacher, "dana@example.com", "secret")
        .await
        .unwrap();

    let rendered = pages::manage_sessions::delete(&mut ctx, "2026").await.unwrap();
    // 204 响应按成功处理
    assert_eq!(
        rendered.notice.unwrap().message,
        MessageResponse::OPERATION_SUCCESSFUL
    );
    let rendered = pages::add_class::delete(&mut ctx, "c1").await.unwrap();
    assert_eq!(
        rendered.notice.unwrap().message,
        MessageResponse::OPERATION_SUCCESSFUL
    );

    let backend = &server.backend;
    assert_eq!(backend.count("DELETE", "/sessions/2026"), 1);
    assert_eq!(backend.count("DELETE", "/classes/c1"), 1);
    let expected = format!("Bearer {TEACHER_TOKEN}");
    assert!(
        backend
            .calls()
            .iter()
            .filter(|c| c.method == "DELETE")
            .all(|c| c.authorization.as_deref() == Some(expected.as_str()))
    );

    server.stop().await;
}

#[actix_web::test]
async fn test_bootstrap_sends_stored_token_as_bearer() {
    let server = TestServer::start().await;
    let (mut ctx, store) = server.context();
    store.set(AUTH_TOKEN_KEY, TEACHER_TOKEN).await.unwrap();
    store.set(USER_ROLE_KEY, "teacher").await.unwrap();

    ctx.bootstrap().await;

    let calls = server.backend.calls();
    let verify: Vec<_> = calls.iter().filter(|c| c.path == "/verify-token").collect();
    assert_eq!(verify.len(), 1);
    assert_eq!(
        verify[0].authorization.as_deref(),
        Some(format!("Bearer {TEACHER_TOKEN}").as_str())
    );

    server.stop().await;
}
