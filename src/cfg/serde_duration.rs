use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

pub use serde_with::{serde_as, DeserializeAs, SerializeAs};

/// 人类可读的 Duration 序列化格式
///
/// 支持 "500ms"、"30s"、"2m"、"1h30m" 等写法，用于配置文件中的超时时间
pub struct HumanDur;

impl SerializeAs<Duration> for HumanDur {
    fn serialize_as<S>(source: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_duration(*source))
    }
}

impl<'de> DeserializeAs<'de, Duration> for HumanDur {
    fn deserialize_as<D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }
}

static SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)(ns|us|ms|s|m|h|d)").expect("valid duration regex"));

/// 每个单位对应的纳秒数，按从大到小排列
const UNITS: [(&str, u128); 7] = [
    ("d", 86_400_000_000_000),
    ("h", 3_600_000_000_000),
    ("m", 60_000_000_000),
    ("s", 1_000_000_000),
    ("ms", 1_000_000),
    ("us", 1_000),
    ("ns", 1),
];

fn unit_nanos(unit: &str) -> Option<u128> {
    UNITS.iter().find(|(u, _)| *u == unit).map(|(_, n)| *n)
}

/// 解析时间字符串: "1m30s" -> Duration
///
/// 整个字符串必须由若干 `<数字><单位>` 片段组成，不允许出现多余字符
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return Err(anyhow!("时间字符串为空"));
    }

    let mut consumed = 0;
    let mut nanos: f64 = 0.0;
    for cap in SEGMENT.captures_iter(&s) {
        let whole = cap.get(0).ok_or_else(|| anyhow!("无效的时间格式: {}", s))?;
        if whole.start() != consumed {
            return Err(anyhow!("无效的时间格式: {}", s));
        }
        consumed = whole.end();

        let value: f64 = cap[1]
            .parse()
            .map_err(|_| anyhow!("无效数字: {}", &cap[1]))?;
        let unit = unit_nanos(&cap[2]).ok_or_else(|| anyhow!("不支持的时间单位: {}", &cap[2]))?;
        nanos += value * unit as f64;
    }

    if consumed != s.len() {
        return Err(anyhow!("无效的时间格式: {}", s));
    }

    let nanos = nanos.round();
    if nanos >= u64::MAX as f64 {
        return Err(anyhow!("时间过长: {}", s));
    }
    Ok(Duration::from_nanos(nanos as u64))
}

/// Duration 格式化为字符串: Duration -> "1m30s"
pub fn format_duration(duration: Duration) -> String {
    let mut remaining = duration.as_nanos();
    if remaining == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    for (unit, size) in UNITS {
        if remaining >= size {
            out.push_str(&format!("{}{}", remaining / size, unit));
            remaining %= size;
        }
    }
    out
}
