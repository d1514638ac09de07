use crate::cli::Cli;
use crate::core::{ProcessingConfig, ProcessingError, ProcessingSummary, TraversalMode};
use crate::engine::{create_default_processing_engine, create_quiet_processing_engine};
use crate::services::{DecryptSettings, DefaultProcessingConfig, JsonReportWriter};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// decryptコマンドの実行設定
#[derive(Debug)]
pub struct DecryptCommand {
    pub directory: PathBuf,
    pub config: DefaultProcessingConfig,
    pub report: Option<PathBuf>,
}

impl DecryptCommand {
    /// コマンドライン引数から実行設定を構築
    ///
    /// 優先順位: デフォルト < 設定ファイル < コマンドライン
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let directory = cli
            .directory
            .clone()
            .ok_or_else(|| ProcessingError::usage("対象ディレクトリを指定してください"))?;

        let mut config = DefaultProcessingConfig::default();
        if let Some(path) = &cli.config {
            config = DecryptSettings::from_json_file(path)?.apply_to(config);
        }

        if let Some(threads) = cli.threads {
            config = config.with_worker_count(threads);
        }
        if let Some(buffer_size) = cli.buffer_size {
            config = config.with_buffer_size(buffer_size);
        }
        if cli.flat {
            config = config.with_traversal_mode(TraversalMode::Flat);
        }
        if !cli.suffixes.is_empty() {
            config = config.with_suffixes(cli.suffixes.iter().cloned());
        }
        if cli.no_progress {
            config = config.with_progress_reporting(false);
        }
        if let Some(interval_ms) = cli.interval_ms {
            config = config.with_progress_interval(Duration::from_millis(interval_ms));
        }

        config.validate()?;

        Ok(Self {
            directory,
            config,
            report: cli.report.clone(),
        })
    }
}

/// ディレクトリ内の暗号化画像を復号する
pub async fn execute_decrypt(command: DecryptCommand) -> Result<ProcessingSummary> {
    let DecryptCommand {
        directory,
        config,
        report,
    } = command;

    let summary = if config.enable_progress_reporting() {
        create_default_processing_engine(config)
            .process_directory(&directory)
            .await?
    } else {
        create_quiet_processing_engine(config)
            .process_directory(&directory)
            .await?
    };

    if let Some(report_path) = report {
        let writer = JsonReportWriter::new(&report_path);
        writer.write(&directory, &summary).await?;
        info!(report = %report_path.display(), "レポートを出力しました");
    }

    Ok(summary)
}
