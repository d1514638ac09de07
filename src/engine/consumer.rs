// Consumer - 並列ワーカー機能

use crate::{
    core::{Counters, HeaderTransform, ProcessingOutcome},
    services::processing::process_single_file,
    storage::{FileSink, StorageBackend},
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::trace;

/// 単一Consumerワーカー
///
/// キューが閉じられて空になるまで処理を続ける。1件の失敗でワーカーは止まらない。
pub fn spawn_single_consumer<T, S>(
    worker_id: usize,
    transform: Arc<T>,
    sink: Arc<FileSink<S>>,
    work_rx: Arc<Mutex<mpsc::Receiver<PathBuf>>>,
    result_tx: mpsc::Sender<ProcessingOutcome>,
    counters: Arc<Counters>,
) -> tokio::task::JoinHandle<()>
where
    T: HeaderTransform + 'static,
    S: StorageBackend + 'static,
{
    tokio::spawn(async move {
        loop {
            // 次の作業を取得（ロックは受信の間だけ保持する）
            let file_path = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(path) => path,
                    None => break, // チャンネル終了
                }
            };

            let outcome = process_single_file(&transform, &sink, &file_path, worker_id).await;

            // 成否に関わらず1件につき1回
            counters.record_completed();

            // 集計側が既に終了していても残りの処理は続ける
            if result_tx.send(outcome).await.is_err() {
                trace!(worker_id, "結果チャンネルが閉じられています");
            }
        }
        trace!(worker_id, "ワーカー終了");
    })
}

/// Consumers: 並列ワーカープール
pub fn spawn_consumers<T, S>(
    transform: Arc<T>,
    sink: Arc<FileSink<S>>,
    work_rx: mpsc::Receiver<PathBuf>,
    result_tx: mpsc::Sender<ProcessingOutcome>,
    counters: Arc<Counters>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<()>>
where
    T: HeaderTransform + 'static,
    S: StorageBackend + 'static,
{
    let work_rx = Arc::new(Mutex::new(work_rx));

    (0..worker_count)
        .map(|worker_id| {
            spawn_single_consumer(
                worker_id,
                Arc::clone(&transform),
                Arc::clone(&sink),
                Arc::clone(&work_rx),
                result_tx.clone(),
                Arc::clone(&counters),
            )
        })
        .collect()
}
