use once_cell::sync::Lazy;
use regex_lite::{Captures, Regex};

static ENV_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env reference regex"));

/// 展开文本中的 `${VAR_NAME}` 环境变量引用
///
/// 未设置的变量保持原样，方便在解析失败时定位
pub fn expand_env_vars(content: &str) -> String {
    ENV_REF
        .replace_all(content, |caps: &Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
