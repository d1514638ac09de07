// 実行レポートのJSON出力

use crate::core::ProcessingSummary;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// JSONファイルに書き出す実行レポート
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub root: &'a Path,
    #[serde(flatten)]
    pub summary: &'a ProcessingSummary,
}

/// サマリーをJSONレポートとして保存する
#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    output_path: PathBuf,
}

impl JsonReportWriter {
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub async fn write(&self, root: &Path, summary: &ProcessingSummary) -> Result<()> {
        let report = RunReport { root, summary };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        tokio::fs::write(&self.output_path, json)
            .await
            .with_context(|| format!("Failed to write report: {}", self.output_path.display()))?;
        Ok(())
    }
}
