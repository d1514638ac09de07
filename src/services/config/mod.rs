// 設定管理
// デフォルト設定、ビルダー、JSON設定ファイル

pub mod implementations;
pub mod settings;

// 公開API
pub use implementations::{
    validate_config, DefaultProcessingConfig, DEFAULT_BUFFER_SIZE, DEFAULT_PROGRESS_INTERVAL,
};
pub use settings::DecryptSettings;
