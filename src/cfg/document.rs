// 多格式文档加载

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// 支持的文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Json5,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// 根据文件扩展名判断格式，未知扩展名按 JSON5 处理（JSON5 兼容普通 JSON）
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => DocumentFormat::Json,
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json5,
        }
    }

    /// 按当前格式解析字符串
    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        let value: T = match self {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Json5 => json5::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
        };
        Ok(value)
    }
}

/// 从文件加载文档，格式由扩展名决定
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    DocumentFormat::from_path(path)
        .parse(&content)
        .with_context(|| format!("Failed to parse file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::path::PathBuf;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("a.json")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("a.YML")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("a.toml")),
            DocumentFormat::Toml
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("request")),
            DocumentFormat::Json5
        );
    }

    #[test]
    fn test_parse_each_format() {
        let expected = Sample {
            name: "emp1".to_string(),
            count: 2,
        };

        let json: Sample = DocumentFormat::Json
            .parse(r#"{"name":"emp1","count":2}"#)
            .unwrap();
        let json5: Sample = DocumentFormat::Json5
            .parse("{ name: 'emp1', count: 2, // 注释\n }")
            .unwrap();
        let yaml: Sample = DocumentFormat::Yaml.parse("name: emp1\ncount: 2\n").unwrap();
        let toml: Sample = DocumentFormat::Toml
            .parse("name = \"emp1\"\ncount = 2\n")
            .unwrap();

        assert_eq!(json, expected);
        assert_eq!(json5, expected);
        assert_eq!(yaml, expected);
        assert_eq!(toml, expected);
    }

    #[test]
    fn test_load_document_missing_file() {
        let err = load_document::<Sample>(&PathBuf::from("/nonexistent/request.json"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/request.json"));
    }
}
