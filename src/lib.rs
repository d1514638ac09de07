// RPG Maker MV 暗号化画像の一括復号ライブラリ
// スキャナー・ワーカープール・進捗監視をProducer-Consumerで構成する

pub mod cli;
pub mod core;
pub mod engine;
pub mod file_scanner;
pub mod services;
pub mod storage;
pub mod transform;

// 公開API
pub use crate::core::{
    DecryptError, HeaderTransform, ProcessingConfig, ProcessingError, ProcessingResult,
    ProcessingSummary, ProgressReporter,
};
pub use engine::{decrypt_directory, ProcessingEngine};
pub use transform::RpgMakerPngTransform;
