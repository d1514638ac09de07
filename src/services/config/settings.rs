// JSON設定ファイルの読み込み
// 全ての項目は省略可能で、指定された項目のみデフォルト設定を上書きする

use super::implementations::DefaultProcessingConfig;
use crate::core::TraversalMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 設定ファイルの内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecryptSettings {
    pub workers: Option<usize>,
    pub buffer_size: Option<usize>,
    pub traversal: Option<TraversalMode>,
    pub suffixes: Option<Vec<String>>,
    pub progress: Option<bool>,
    pub progress_interval_ms: Option<u64>,
}

impl DecryptSettings {
    /// JSONファイルから読み込む
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let settings = serde_json::from_str(content)?;
        Ok(settings)
    }

    /// 指定された項目を設定に適用する
    pub fn apply_to(&self, mut config: DefaultProcessingConfig) -> DefaultProcessingConfig {
        if let Some(workers) = self.workers {
            config = config.with_worker_count(workers);
        }
        if let Some(buffer_size) = self.buffer_size {
            config = config.with_buffer_size(buffer_size);
        }
        if let Some(mode) = self.traversal {
            config = config.with_traversal_mode(mode);
        }
        if let Some(suffixes) = &self.suffixes {
            config = config.with_suffixes(suffixes.iter().cloned());
        }
        if let Some(progress) = self.progress {
            config = config.with_progress_reporting(progress);
        }
        if let Some(interval_ms) = self.progress_interval_ms {
            config = config.with_progress_interval(Duration::from_millis(interval_ms));
        }
        config
    }
}
