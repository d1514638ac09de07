// Custom error types for batch decryption
// 処理全体を止める致命的エラーと、ファイル単位のエラーを分けて定義

use std::path::PathBuf;
use thiserror::Error;

/// 処理全体を中断する致命的エラー
///
/// プロセス境界まで伝播するのはこの型のみ。
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("使用方法エラー: {message}")]
    UsageError { message: String },

    #[error("ディレクトリ走査エラー: {} - {source}", path.display())]
    TraversalError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ProcessingError {
    /// 使用方法エラーの作成
    pub fn usage(message: impl Into<String>) -> Self {
        Self::UsageError {
            message: message.into(),
        }
    }

    /// 走査エラーの作成
    pub fn traversal(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TraversalError {
            path: path.into(),
            source,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }
}

impl From<tokio::task::JoinError> for ProcessingError {
    fn from(source: tokio::task::JoinError) -> Self {
        Self::task(source)
    }
}

/// ファイル単位のエラー
///
/// ワーカーの外に伝播することはなく、ログ出力と集計のみに使われる。
#[derive(Error, Debug)]
pub enum DecryptError {
    #[error("読み込みエラー: {} - {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("ファイルが小さすぎます: {len}バイト (最低{min}バイト必要)")]
    TooSmall { len: usize, min: usize },

    #[error("ヘッダーが一致しません")]
    BadMagic,

    #[error("書き込みエラー: {} - {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("変換処理が異常終了しました: {message}")]
    TransformPanicked { message: String },
}

impl DecryptError {
    /// 読み込みエラーの作成
    pub fn read(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// 書き込みエラーの作成
    pub fn write(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    /// 異常終了したタスクからの作成
    pub fn panicked(source: tokio::task::JoinError) -> Self {
        Self::TransformPanicked {
            message: source.to_string(),
        }
    }
}

/// 致命的エラーの結果型
pub type ProcessingResult<T> = std::result::Result<T, ProcessingError>;

/// ファイル単位処理の結果型
pub type DecryptResult<T> = std::result::Result<T, DecryptError>;
