// Collector - 処理結果の集計

use crate::core::{FailedFile, ProcessingOutcome};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// ワーカーから受け取った結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub converted: usize,
    pub failed: usize,
    pub failures: Vec<FailedFile>,
}

impl OutcomeTally {
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }

    pub fn record(&mut self, outcome: ProcessingOutcome) {
        match outcome {
            ProcessingOutcome::Converted { .. } => self.converted += 1,
            ProcessingOutcome::Failed { source_path, error } => {
                self.failed += 1;
                self.failures.push(FailedFile {
                    path: source_path,
                    error,
                });
            }
        }
    }
}

/// Collector: 全ての送信側が閉じられるまで結果を集計
pub fn spawn_result_collector(
    mut result_rx: mpsc::Receiver<ProcessingOutcome>,
) -> JoinHandle<OutcomeTally> {
    tokio::spawn(async move {
        let mut tally = OutcomeTally::default();

        while let Some(outcome) = result_rx.recv().await {
            tally.record(outcome);
        }

        // 失敗一覧は出力を安定させるためパス順
        tally.failures.sort_by(|a, b| a.path.cmp(&b.path));
        tally
    })
}
