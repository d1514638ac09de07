// Pipeline - Producer-Consumer パイプライン
// 走査・ワーカープール・集計・進捗監視のオーケストレーション

use super::{consumer::spawn_consumers, producer::spawn_producer};
use crate::{
    core::{
        Counters, HeaderTransform, ProcessingConfig, ProcessingError, ProcessingOutcome,
        ProcessingResult, ProcessingSummary, ProgressReporter,
    },
    file_scanner::{FileScanner, SuffixFilter},
    services::{monitoring::spawn_progress_monitor, persistence::spawn_result_collector},
    storage::{FileSink, StorageBackend},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::info;

/// 責任が明確に分離されたパイプライン
pub struct ProcessingPipeline<T, S> {
    transform: Arc<T>,
    sink: Arc<FileSink<S>>,
}

impl<T, S> ProcessingPipeline<T, S>
where
    T: HeaderTransform + 'static,
    S: StorageBackend + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(transform: Arc<T>, sink: Arc<FileSink<S>>) -> Self {
        Self { transform, sink }
    }

    /// ディレクトリを走査しながら全ファイルを処理
    ///
    /// 全ワーカーが終了するまで戻らない。呼び出し前にルートと設定の検証を済ませること。
    pub async fn execute<C, R>(
        &self,
        root: &Path,
        config: &C,
        reporter: Arc<R>,
    ) -> ProcessingResult<ProcessingSummary>
    where
        C: ProcessingConfig,
        R: ProgressReporter + 'static,
    {
        let start_time = Instant::now();
        let counters = Arc::new(Counters::new());
        let worker_count = config.worker_count();

        // Producer-Consumerチャンネル構築
        let (work_tx, work_rx) = mpsc::channel::<PathBuf>(config.channel_buffer_size());
        let (result_tx, result_rx) =
            mpsc::channel::<ProcessingOutcome>(config.channel_buffer_size());

        reporter.report_started(root, worker_count).await;
        info!(root = %root.display(), worker_count, "処理開始");

        let monitor = config.enable_progress_reporting().then(|| {
            spawn_progress_monitor(
                config.progress_interval(),
                Arc::clone(&counters),
                Arc::clone(&reporter),
                start_time,
            )
        });

        // Consumer Pool起動
        let consumer_handles = spawn_consumers(
            Arc::clone(&self.transform),
            Arc::clone(&self.sink),
            work_rx,
            result_tx,
            Arc::clone(&counters),
            worker_count,
        );

        // Result Collector起動（全ワーカーのresult_txがドロップされると終了）
        let collector_handle = spawn_result_collector(result_rx);

        // Producer起動
        let scanner = FileScanner::new(
            config.traversal_mode(),
            SuffixFilter::new(config.suffixes().iter().cloned()),
        );
        let producer_handle = spawn_producer(
            scanner,
            root.to_path_buf(),
            Arc::clone(&counters),
            work_tx,
        );

        // Producer完了を待機（ここでキューが閉じられる）
        let scan_result = producer_handle.await.map_err(ProcessingError::task)?;

        // 全Consumerの終了を待機
        for handle in consumer_handles {
            handle.await.map_err(ProcessingError::task)?;
        }

        let tally = collector_handle.await.map_err(ProcessingError::task)?;

        if let Some(monitor) = monitor {
            monitor.stop().await?;
        }

        let scan_stats = scan_result?;
        let snapshot = counters.snapshot();
        let elapsed = start_time.elapsed();

        info!(
            produced = snapshot.produced,
            completed = snapshot.completed,
            converted = tally.converted,
            failed = tally.failed,
            skipped_entries = scan_stats.skipped,
            elapsed_ms = elapsed.as_millis() as u64,
            "処理完了"
        );

        Ok(ProcessingSummary {
            produced: snapshot.produced,
            completed: snapshot.completed,
            converted: tally.converted,
            failed: tally.failed,
            elapsed,
            failures: tally.failures,
        })
    }
}
