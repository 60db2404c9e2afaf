//! client 模块 - 排班服务客户端

pub mod error;
pub mod schedule_client;

pub use error::ProbeError;
pub use schedule_client::{decode_response, ScheduleClient, ScheduleClientConfig, DEFAULT_ENDPOINT};
