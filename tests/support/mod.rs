//! 进程内的假后端，用于集成测试

#![allow(dead_code)]

use actix_web::dev::{Service as _, ServerHandle};
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use rust_attendance_next::client::ApiClient;
use rust_attendance_next::runtime::lifetime::startup::AppContext;
use rust_attendance_next::storage::{KeyValueStore, MemoryStorage};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const TEACHER_TOKEN: &str = "teacher-token";

/// 一次请求的记录
#[derive(Debug, Clone)]
pub struct Call {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Default)]
pub struct Backend {
    pub calls: Mutex<Vec<Call>>,
    pub bodies: Mutex<Vec<(String, Value)>>,
}

impl Backend {
    /// 某个 `METHOD /path` 被调用的次数
    pub fn count(&self, method: &str, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// 最后一次发到该路径的请求体
    pub fn last_body(&self, path: &str) -> Option<Value> {
        self.bodies
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
    }

    fn record_body(&self, req: &HttpRequest, body: &Value) {
        self.bodies
            .lock()
            .unwrap()
            .push((req.path().to_string(), body.clone()));
    }
}

pub struct TestServer {
    pub base_url: String,
    pub backend: web::Data<Backend>,
    handle: ServerHandle,
}

impl TestServer {
    pub async fn start() -> Self {
        let backend = web::Data::new(Backend::default());
        let data = backend.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .wrap_fn(|req, srv| {
                    if let Some(backend) = req.app_data::<web::Data<Backend>>() {
                        let authorization = req
                            .headers()
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        backend.calls.lock().unwrap().push(Call {
                            method: req.method().to_string(),
                            path: req.path().to_string(),
                            authorization,
                        });
                    }
                    srv.call(req)
                })
                .configure(routes)
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind test server");

        let port = server.addrs()[0].port();
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            backend,
            handle,
        }
    }

    pub fn client(&self, store: Arc<dyn KeyValueStore>) -> Arc<ApiClient> {
        Arc::new(ApiClient::new(&self.base_url, "attendance-tests", store).expect("client"))
    }

    /// 使用内存存储的完整上下文
    pub fn context(&self) -> (AppContext, Arc<dyn KeyValueStore>) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStorage::new());
        let client = self.client(store.clone());
        (AppContext::new(store.clone(), client), store)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

fn bearer(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "message": "Invalid or expired token" }))
}

fn authorized(req: &HttpRequest) -> bool {
    matches!(bearer(req), Some(ADMIN_TOKEN) | Some(TEACHER_TOKEN))
}

fn students() -> Value {
    json!([
        { "studentId": "S1", "name": "Alice" },
        { "studentId": "S2", "name": "Bob" },
        { "studentId": "S3", "name": "Carol" }
    ])
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(admin_login))
        .route("/teacher/login", web::post().to(teacher_login))
        .route("/verify-token", web::get().to(verify_token))
        .route("/teacher/register/send-otp", web::post().to(echo_message))
        .route("/teacher/register/verify-otp", web::post().to(echo_message))
        .route("/teacher/register/complete", web::post().to(echo_message))
        .route("/teacher/forgot-password/send-otp", web::post().to(echo_message))
        .route("/teacher/forgot-password/verify-otp", web::post().to(echo_message))
        .route("/teacher/reset-password", web::post().to(echo_message))
        .route("/sessions", web::get().to(list_sessions))
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{name}", web::get().to(get_session))
        .route("/sessions/{name}", web::delete().to(no_content))
        .route("/sessions/{name}/students", web::post().to(echo_message))
        .route("/sessions/{name}/students/{id}", web::delete().to(no_content))
        .route("/classes", web::get().to(list_classes))
        .route("/classes", web::post().to(echo_message))
        .route("/classes/{id}", web::get().to(get_class))
        .route("/classes/{id}", web::delete().to(no_content))
        .route("/classes/{id}/comprehensive-report", web::get().to(report))
        .route("/classes/{id}/marks", web::post().to(echo_message))
        .route("/attendance", web::post().to(echo_message))
        .route("/admin/teachers", web::get().to(all_teachers))
        .route("/admin/teachers/pending", web::get().to(pending_teachers))
        .route("/admin/teachers/approve/{id}", web::post().to(approve_teacher))
        .route("/admin/teachers/{id}", web::delete().to(no_content))
        .route("/fail-json", web::get().to(fail_json))
        .route("/fail-plain", web::get().to(fail_plain))
        .route("/fail-unknown", web::get().to(fail_unknown))
        .route("/no-content", web::get().to(no_content));
}

async fn admin_login(body: web::Json<Value>) -> HttpResponse {
    if body["username"] == "admin" && body["password"] == "secret" {
        HttpResponse::Ok().json(json!({ "token": ADMIN_TOKEN, "role": "admin" }))
    } else {
        HttpResponse::Unauthorized().json(json!({ "message": "Invalid credentials" }))
    }
}

async fn teacher_login(body: web::Json<Value>) -> HttpResponse {
    if body["email"] == "dana@example.com" && body["password"] == "secret" {
        HttpResponse::Ok().json(json!({ "token": TEACHER_TOKEN }))
    } else {
        HttpResponse::BadRequest().json(json!({ "message": "Account not approved yet" }))
    }
}

async fn verify_token(req: HttpRequest) -> HttpResponse {
    if authorized(&req) {
        HttpResponse::Ok().json(json!({ "valid": true }))
    } else {
        unauthorized()
    }
}

async fn echo_message(
    req: HttpRequest,
    backend: web::Data<Backend>,
    body: web::Json<Value>,
) -> HttpResponse {
    backend.record_body(&req, &body);
    HttpResponse::Created().json(json!({ "message": format!("Saved {}", req.path()) }))
}

async fn list_sessions(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!([
        { "_id": "s1", "name": "2026", "students": students() },
        { "_id": "s2", "name": "2027 Fall", "students": [] }
    ]))
}

async fn create_session(
    req: HttpRequest,
    backend: web::Data<Backend>,
    body: web::Json<Value>,
) -> HttpResponse {
    backend.record_body(&req, &body);
    if body["name"] == "2026" {
        return HttpResponse::Conflict().json(json!({ "message": "Session already exists" }));
    }
    HttpResponse::Created().json(json!({ "message": "Session created" }))
}

async fn get_session(path: web::Path<String>) -> HttpResponse {
    match path.as_str() {
        "2026" => HttpResponse::Ok().json(json!({ "name": "2026", "students": students() })),
        "2027 Fall" => HttpResponse::Ok().json(json!({ "name": "2027 Fall", "students": [] })),
        _ => HttpResponse::NotFound().json(json!({ "message": "Session not found" })),
    }
}

async fn list_classes() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        { "_id": "c1", "name": "CSE-101", "session": "2026" }
    ]))
}

async fn get_class(path: web::Path<String>) -> HttpResponse {
    match path.as_str() {
        "c1" => HttpResponse::Ok().json(json!({ "_id": "c1", "name": "CSE-101", "session": "2026" })),
        _ => HttpResponse::NotFound().json(json!({ "message": "Class not found" })),
    }
}

async fn report() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "className": "CSE-101",
        "session": "2026",
        "students": students(),
        "attendanceDates": [
            { "date": "2026-03-01", "attendanceWeight": 2 },
            { "date": "2026-03-02", "attendanceWeight": 1 }
        ],
        "attendanceRecords": [
            { "studentId": "S1", "2026-03-01": 2, "2026-03-02": 1 },
            { "studentId": "S2", "2026-03-01": 2 }
        ],
        "assessments": [
            { "name": "CT-1", "type": "CT", "totalMarks": 20,
              "records": [{ "studentId": "S1", "mark": 18 }, { "studentId": "S3", "mark": 0 }] },
            { "name": "Quiz-1", "type": "Lab Quiz", "totalMarks": 10,
              "records": [{ "studentId": "S2", "mark": 7.5 }] }
        ]
    }))
}

async fn all_teachers() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        { "_id": "t1", "name": "Dana", "email": "dana@example.com", "isApproved": true },
        { "_id": "t2", "name": "Eli", "email": "eli@example.com", "isApproved": false }
    ]))
}

async fn pending_teachers() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        { "_id": "t2", "name": "Eli", "email": "eli@example.com", "isApproved": false }
    ]))
}

async fn approve_teacher() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("approved")
}

async fn no_content() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

async fn fail_json() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "message": "Session already exists" }))
}

async fn fail_plain() -> HttpResponse {
    HttpResponse::ServiceUnavailable()
        .content_type("text/plain")
        .body("upstream down")
}

async fn fail_unknown() -> HttpResponse {
    HttpResponse::build(StatusCode::from_u16(599).unwrap()).finish()
}
