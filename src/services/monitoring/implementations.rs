// 進捗監視の具象実装

use crate::core::{CounterSnapshot, ProgressReporter};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

/// 定期報告の1行
pub fn format_progress_line(snapshot: CounterSnapshot) -> String {
    format!(
        "📊 Processed {}/{} files...",
        snapshot.completed, snapshot.produced
    )
}

/// 完了時のサマリー行
pub fn format_completed_lines(snapshot: CounterSnapshot, elapsed: Duration) -> [String; 2] {
    [
        format!(
            "✅ Processed {}/{} files",
            snapshot.completed, snapshot.produced
        ),
        format!("⏱️  Done in {:.2}ms", elapsed.as_secs_f64() * 1000.0),
    ]
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, root: &Path, worker_count: usize) {
        if !self.quiet {
            println!(
                "🚀 Decrypting {} with {worker_count} workers...",
                root.display()
            );
        }
    }

    async fn report_progress(&self, snapshot: CounterSnapshot) {
        if !self.quiet {
            println!("{}", format_progress_line(snapshot));
        }
    }

    async fn report_completed(&self, snapshot: CounterSnapshot, elapsed: Duration) {
        if !self.quiet {
            for line in format_completed_lines(snapshot, elapsed) {
                println!("{line}");
            }
        }
    }
}

/// 何もしない進捗報告実装（テスト・バックグラウンド用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _root: &Path, _worker_count: usize) {
        // 何もしない
    }

    async fn report_progress(&self, _snapshot: CounterSnapshot) {
        // 何もしない
    }

    async fn report_completed(&self, _snapshot: CounterSnapshot, _elapsed: Duration) {
        // 何もしない
    }
}
