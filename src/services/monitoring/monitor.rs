// Progress Monitor - カウンターを定期的に観測するタスク

use crate::core::{Counters, ProcessingError, ProcessingResult, ProgressReporter};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// 実行中の進捗監視タスクへのハンドル
pub struct ProgressMonitor {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl ProgressMonitor {
    /// 停止を通知し、最終報告の完了を待つ
    pub async fn stop(self) -> ProcessingResult<()> {
        // 受信側が既に終了していても最終報告はタスク側で行われる
        let _ = self.stop_tx.send(());
        self.handle.await.map_err(ProcessingError::task)
    }
}

/// 進捗監視タスクを起動
///
/// 最初の報告は`interval`経過後。停止時に最終スナップショットと経過時間を報告する。
/// カウンターはアトミックに読むだけなので、スキャナーやワーカーを待たせない。
pub fn spawn_progress_monitor<R>(
    interval: Duration,
    counters: Arc<Counters>,
    reporter: Arc<R>,
    started_at: Instant,
) -> ProgressMonitor
where
    R: ProgressReporter + 'static,
{
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = &mut stop_rx => break,
                _ = ticker.tick() => {
                    reporter.report_progress(counters.snapshot()).await;
                }
            }
        }

        reporter
            .report_completed(counters.snapshot(), started_at.elapsed())
            .await;
    });

    ProgressMonitor { stop_tx, handle }
}
