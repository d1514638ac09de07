// 結果の集計と永続化
// ワーカーからの結果収集、JSONレポート出力

pub mod collector;
pub mod report;

// 公開API
pub use collector::{spawn_result_collector, OutcomeTally};
pub use report::{JsonReportWriter, RunReport};
