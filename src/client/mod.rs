//! 远端 API 请求封装
//!
//! 所有请求都经过 [`ApiClient::execute`]：
//! - 存储中有 token 时附带 `Authorization: Bearer <token>`
//! - 有请求体时附带 `Content-Type: application/json`
//! - 非 2xx 视为失败，尽力从 JSON 的 `message` 字段提取错误信息，否则使用状态文本
//! - 204 或非 JSON 的成功响应视为无数据的成功

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::AppConfig;
use crate::errors::{AttendanceError, Result};
use crate::models::{ErrorBody, MessageResponse};
use crate::storage::{AUTH_TOKEN_KEY, KeyValueStore};

const BEARER_PREFIX: &str = "Bearer ";
const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, user_agent: &str, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AttendanceError::config(format!("Invalid API base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AttendanceError::config(format!(
                "API base URL '{base_url}' cannot be used as a base"
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| AttendanceError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            store,
        })
    }

    /// 使用全局配置创建
    pub fn from_config(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let config = AppConfig::get();
        Self::new(&config.api.base_url, &config.api.user_agent, store)
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// 拼接接口地址，每个路径段单独做百分号编码
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AttendanceError::config("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// 发送请求，返回 `None` 表示成功但没有 JSON 响应体
    pub async fn execute<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Option<serde_json::Value>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let mut request = self.http.request(method.clone(), url.clone());

        if let Some(token) = self.store.get(AUTH_TOKEN_KEY).await? {
            request = request.header(AUTHORIZATION, format!("{BEARER_PREFIX}{token}"));
        }
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        debug!("{} {}", method, url.path());

        let response = request.send().await.map_err(|e| {
            error!("API Error on {} {}: {}", method, url.path(), e);
            AttendanceError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let fallback = status.canonical_reason().map(str::to_string);
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.into_message().or(fallback),
                Err(_) => fallback,
            }
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

            error!("API Error on {} {}: {} ({})", method, url.path(), message, status);
            return Err(if status == StatusCode::UNAUTHORIZED {
                AttendanceError::authentication(message)
            } else {
                AttendanceError::api(message)
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);
        if !is_json {
            return Ok(None);
        }

        Ok(Some(response.json::<serde_json::Value>().await?))
    }

    /// 需要 JSON 数据的请求
    pub async fn fetch<B, T>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.execute(method, segments, body).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Err(AttendanceError::serialization(format!(
                "Expected a JSON response from /{}",
                segments.join("/")
            ))),
        }
    }

    /// 只关心成功与否的请求
    pub async fn command<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<MessageResponse>
    where
        B: Serialize + ?Sized,
    {
        match self.execute(method, segments, body).await? {
            // 响应体不是对象（例如数组）时同样视为成功
            Some(value) => {
                Ok(serde_json::from_value(value).unwrap_or_else(|_| MessageResponse::operation_successful()))
            }
            None => Ok(MessageResponse::operation_successful()),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.fetch::<(), T>(Method::GET, segments, None).await
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(Method::POST, segments, Some(body)).await
    }

    pub async fn post_command<B>(&self, segments: &[&str], body: &B) -> Result<MessageResponse>
    where
        B: Serialize + ?Sized,
    {
        self.command(Method::POST, segments, Some(body)).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<MessageResponse> {
        self.command::<()>(Method::DELETE, segments, None).await
    }
}
