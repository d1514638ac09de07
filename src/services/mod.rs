// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod persistence;
pub mod processing;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{DecryptSettings, DefaultProcessingConfig};
pub use monitoring::{
    spawn_progress_monitor, ConsoleProgressReporter, NoOpProgressReporter, ProgressMonitor,
};
pub use persistence::{spawn_result_collector, JsonReportWriter, OutcomeTally};
pub use processing::process_single_file;
