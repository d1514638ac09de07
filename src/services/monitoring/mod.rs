// 進捗監視機能
// 定期的な進捗報告、完了時のサマリー報告

pub mod implementations;
pub mod monitor;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
pub use monitor::{spawn_progress_monitor, ProgressMonitor};
