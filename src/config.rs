//! 解析器設定のロード (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 文脈解析器の設定
///
/// 閾値はどちらも原典の分類器と同じ既定値を持ちますが、
/// 呼び出し側で調整できるパラメータとして公開します。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// 確信度算出に必要な最小連接観測数
    /// 観測数がこの値以下の間は「データ不足」を返す
    #[serde(default = "default_min_relations")]
    pub min_relations: u32,
    /// 連接観測数の上限。超えたら解析を打ち切る
    /// (推定は既に安定しており、病的な入力への歯止めにもなる)
    #[serde(default = "default_max_relations")]
    pub max_relations: u32,
}

fn default_min_relations() -> u32 {
    4
}

fn default_max_relations() -> u32 {
    1000
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_relations: default_min_relations(),
            max_relations: default_max_relations(),
        }
    }
}

impl AnalyzerConfig {
    /// 既定値で設定を生成
    pub fn new() -> Self {
        Self::default()
    }

    /// 最小観測数を設定
    pub fn with_min_relations(mut self, min_relations: u32) -> Self {
        self.min_relations = min_relations;
        self
    }

    /// 観測数上限を設定
    pub fn with_max_relations(mut self, max_relations: u32) -> Self {
        self.max_relations = max_relations;
        self
    }
}

/// 設定ファイルをロード (ファイルがない・解析できない場合は既定値)
pub fn load_config(path: &Path) -> AnalyzerConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("設定ファイルの解析に失敗、既定値を使用: {}", e);
            AnalyzerConfig::default()
        }),
        Err(_) => AnalyzerConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.min_relations, 4);
        assert_eq!(config.max_relations, 1000);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AnalyzerConfig::new()
            .with_min_relations(10)
            .with_max_relations(500);
        assert_eq!(config.min_relations, 10);
        assert_eq!(config.max_relations, 500);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = AnalyzerConfig::new().with_min_relations(8);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // フィールドが欠けた設定ファイルでも既定値で補完される
        let json = r#"{"min_relations": 2}"#;
        let config: AnalyzerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.min_relations, 2);
        assert_eq!(config.max_relations, 1000);
    }

    #[test]
    fn test_load_missing_file() {
        let config = load_config(Path::new("/nonexistent/kanari.json"));
        assert_eq!(config, AnalyzerConfig::default());
    }
}
