// ProcessingEngine - 依存性注入による並列復号エンジン
// 変換・ストレージ・設定・進捗報告をコンストラクタで注入する

use super::pipeline::ProcessingPipeline;
use crate::{
    core::{
        HeaderTransform, ProcessingConfig, ProcessingResult, ProcessingSummary, ProgressReporter,
    },
    file_scanner::FileScanner,
    services::config::validate_config,
    storage::{FileSink, StorageBackend},
};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// 依存性注入による並列処理エンジン
///
/// 並列処理で共有される依存関係は初期からArcで管理する。
/// 出力拡張子は変換側が決める。
pub struct ProcessingEngine<T, S, C, R> {
    transform: Arc<T>,
    sink: Arc<FileSink<S>>,
    config: C,
    reporter: Arc<R>,
}

impl<T, S, C, R> ProcessingEngine<T, S, C, R>
where
    T: HeaderTransform + 'static,
    S: StorageBackend + 'static,
    C: ProcessingConfig,
    R: ProgressReporter + 'static,
{
    /// 新しい処理エンジンを作成
    pub fn new(transform: T, storage: S, config: C, reporter: R) -> Self {
        let sink = FileSink::new(storage, transform.output_extension());
        Self {
            transform: Arc::new(transform),
            sink: Arc::new(sink),
            config,
            reporter: Arc::new(reporter),
        }
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// 進捗報告への参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 変換への参照を取得
    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// 指定されたディレクトリを並列処理
    ///
    /// 設定とルートを検証してからタスクを起動する。検証に失敗した場合は何も書き込まない。
    pub async fn process_directory<P: AsRef<Path>>(
        &self,
        root: P,
    ) -> ProcessingResult<ProcessingSummary> {
        let root = root.as_ref();

        validate_config(&self.config)?;
        FileScanner::validate_root(root)?;

        debug!(
            root = %root.display(),
            worker_count = self.config.worker_count(),
            buffer_size = self.config.channel_buffer_size(),
            mode = ?self.config.traversal_mode(),
            "エンジン設定"
        );

        let pipeline = ProcessingPipeline::new(Arc::clone(&self.transform), Arc::clone(&self.sink));
        pipeline
            .execute(root, &self.config, Arc::clone(&self.reporter))
            .await
    }
}
