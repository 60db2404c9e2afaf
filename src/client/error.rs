use std::path::PathBuf;
use thiserror::Error;

/// 调用排班服务的错误类型
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("API request failed with status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("malformed schedule response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("scheduling service reported an error: {0}")]
    Service(String),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("failed to export CSV {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// 非 2xx 状态码时返回状态码
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// 是否为连接、超时等传输层错误
    pub fn is_transport(&self) -> bool {
        matches!(self, ProbeError::Transport(_))
    }
}
