// バッチ処理システムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::DecryptResult;
use super::types::{CounterSnapshot, TraversalMode};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// 並列処理の設定を抽象化するトレイト
pub trait ProcessingConfig: Send + Sync {
    /// ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// ジョブキューの容量を取得
    fn channel_buffer_size(&self) -> usize;

    /// ディレクトリ走査モードを取得
    fn traversal_mode(&self) -> TraversalMode;

    /// 対象とするファイル名の接尾辞
    fn suffixes(&self) -> &[String];

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;

    /// 進捗報告の間隔
    fn progress_interval(&self) -> Duration;
}

/// ヘッダー変換の抽象化トレイト
///
/// I/Oや共有状態を持たない純粋な変換であること。
pub trait HeaderTransform: Send + Sync {
    /// 生のファイル内容を検証し、変換後の内容を返す
    ///
    /// 入力バッファの所有権を受け取り、可能ならそのまま再利用する。
    fn transform(&self, raw: Vec<u8>) -> DecryptResult<Vec<u8>>;

    /// 出力ファイルの拡張子（ドットなし）
    fn output_extension(&self) -> &str;
}

/// 進捗報告の抽象化トレイト
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, root: &Path, worker_count: usize);

    /// 定期的な進捗の報告
    async fn report_progress(&self, snapshot: CounterSnapshot);

    /// 処理完了時の報告
    async fn report_completed(&self, snapshot: CounterSnapshot, elapsed: Duration);
}
