// テスト用の進捗報告モック実装

use crate::core::{CounterSnapshot, ProgressReporter};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// 呼び出しを記録する進捗報告モック
#[derive(Debug, Default, Clone)]
pub struct MockProgressReporter {
    pub started_calls: Arc<Mutex<Vec<(PathBuf, usize)>>>,
    pub progress_calls: Arc<Mutex<Vec<CounterSnapshot>>>,
    pub completed_calls: Arc<Mutex<Vec<(CounterSnapshot, Duration)>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress_snapshots(&self) -> Vec<CounterSnapshot> {
        self.progress_calls.lock().unwrap().clone()
    }

    pub fn completed_snapshots(&self) -> Vec<CounterSnapshot> {
        self.completed_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(snapshot, _)| *snapshot)
            .collect()
    }
}

#[async_trait::async_trait]
impl ProgressReporter for MockProgressReporter {
    async fn report_started(&self, root: &Path, worker_count: usize) {
        self.started_calls
            .lock()
            .unwrap()
            .push((root.to_path_buf(), worker_count));
    }

    async fn report_progress(&self, snapshot: CounterSnapshot) {
        self.progress_calls.lock().unwrap().push(snapshot);
    }

    async fn report_completed(&self, snapshot: CounterSnapshot, elapsed: Duration) {
        self.completed_calls.lock().unwrap().push((snapshot, elapsed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let reporter = MockProgressReporter::new();
        let reporter_ref: &dyn ProgressReporter = &reporter;

        reporter_ref.report_started(Path::new("/game"), 2).await;
        reporter_ref
            .report_progress(CounterSnapshot {
                produced: 5,
                completed: 1,
            })
            .await;
        reporter_ref
            .report_completed(
                CounterSnapshot {
                    produced: 5,
                    completed: 5,
                },
                Duration::from_millis(3),
            )
            .await;

        assert_eq!(
            reporter.started_calls.lock().unwrap()[0],
            (PathBuf::from("/game"), 2)
        );
        assert_eq!(reporter.progress_snapshots().len(), 1);
        assert_eq!(
            reporter.completed_snapshots(),
            vec![CounterSnapshot {
                produced: 5,
                completed: 5
            }]
        );
    }
}
