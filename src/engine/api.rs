// 高レベル公開API
// ProcessingEngineを簡単に使用できるようにするための便利な関数

use super::ProcessingEngine;
use crate::{
    core::{ProcessingResult, ProcessingSummary},
    services::{ConsoleProgressReporter, DefaultProcessingConfig, NoOpProgressReporter},
    storage::local::LocalStorageBackend,
    transform::RpgMakerPngTransform,
};
use std::path::Path;

/// コンソール出力付きの標準エンジン
pub type DefaultEngine = ProcessingEngine<
    RpgMakerPngTransform,
    LocalStorageBackend,
    DefaultProcessingConfig,
    ConsoleProgressReporter,
>;

/// 出力なしの標準エンジン
pub type QuietEngine = ProcessingEngine<
    RpgMakerPngTransform,
    LocalStorageBackend,
    DefaultProcessingConfig,
    NoOpProgressReporter,
>;

/// ProcessingEngine作成のヘルパー関数
///
/// ローカルファイルシステムとコンソール進捗報告を使う
pub fn create_default_processing_engine(config: DefaultProcessingConfig) -> DefaultEngine {
    ProcessingEngine::new(
        RpgMakerPngTransform::new(),
        LocalStorageBackend::new(),
        config,
        ConsoleProgressReporter::new(),
    )
}

/// ProcessingEngine作成のヘルパー関数（静音版）
///
/// テストやバックグラウンド処理用
pub fn create_quiet_processing_engine(config: DefaultProcessingConfig) -> QuietEngine {
    ProcessingEngine::new(
        RpgMakerPngTransform::new(),
        LocalStorageBackend::new(),
        config.with_progress_reporting(false),
        NoOpProgressReporter::new(),
    )
}

/// デフォルト設定でディレクトリを静かに復号する
pub async fn decrypt_directory<P: AsRef<Path>>(root: P) -> ProcessingResult<ProcessingSummary> {
    create_quiet_processing_engine(DefaultProcessingConfig::default())
        .process_directory(root)
        .await
}
