//! 排班服务 HTTP 客户端
//!
//! 同步发送一次 POST 请求，不做重试

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::error::ProbeError;
use crate::model::{ScheduleResult, SchedulingConfig};

/// 排班服务的默认地址
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/schedule";

/// 客户端配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScheduleClientConfig {
    /// 排班接口地址，如 "http://localhost:8000/schedule"
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// 请求超时，None 表示一直等待服务响应
    #[serde(default)]
    pub timeout: Option<Duration>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ScheduleClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: None,
        }
    }
}

/// 排班服务客户端
///
/// # 示例
/// ```no_run
/// use shift_probe::client::{ScheduleClient, ScheduleClientConfig};
/// use shift_probe::fixture::debug_request;
///
/// let client = ScheduleClient::new(ScheduleClientConfig::default()).unwrap();
/// match client.submit(debug_request()) {
///     Ok(result) => println!("{} shifts", result.shifts.len()),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
pub struct ScheduleClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl ScheduleClient {
    pub fn new(config: ScheduleClientConfig) -> Result<Self, ProbeError> {
        // blocking 客户端默认 30 秒超时，这里显式传入配置值（None 即不超时）
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ProbeError::Build)?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 提交排班请求
    pub fn submit(&self, request: &SchedulingConfig) -> Result<ScheduleResult, ProbeError> {
        let body = serde_json::to_value(request)?;
        self.submit_raw(&body)
    }

    /// 提交任意 JSON 请求体，用于透传外部请求文档
    pub fn submit_raw(&self, body: &Value) -> Result<ScheduleResult, ProbeError> {
        tracing::debug!(endpoint = %self.endpoint, "sending schedule request");

        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(ProbeError::Transport)?;

        let status = resp.status();
        let text = resp.text().map_err(ProbeError::Transport)?;
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "received response");

        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "schedule request rejected");
            return Err(ProbeError::Status {
                code: status.as_u16(),
                body: text,
            });
        }

        decode_response(&text)
    }
}

/// 解析排班服务响应
///
/// 服务在 200 响应中携带 `error` 字段时按服务端错误处理
pub fn decode_response(body: &str) -> Result<ScheduleResult, ProbeError> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(ProbeError::Service(message.to_string()));
    }

    let result: ScheduleResult = serde_json::from_value(value)?;
    tracing::debug!(
        shifts = result.shifts.len(),
        violations = result.violations.len(),
        "decoded schedule result"
    );
    Ok(result)
}
