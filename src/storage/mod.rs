use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::path::{Path, PathBuf};

pub mod local;
pub mod sink;

pub use sink::FileSink;

/// ストレージバックエンドのトレイト
#[automock]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// ファイル全体を読み込む
    async fn read_item(&self, path: &Path) -> Result<Vec<u8>>;

    /// ファイルを作成または切り詰めて書き込む
    async fn write_item(&self, path: &Path, data: &[u8]) -> Result<()>;
}

// StorageBackend for Box<dyn StorageBackend>
#[async_trait]
impl StorageBackend for Box<dyn StorageBackend> {
    async fn read_item(&self, path: &Path) -> Result<Vec<u8>> {
        self.as_ref().read_item(path).await
    }

    async fn write_item(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.as_ref().write_item(path, data).await
    }
}

/// 出力先パスを導出する
///
/// 拡張子を置き換える。拡張子がなければ追加する。同じディレクトリに出力される。
pub fn derive_output_path(source: &Path, extension: &str) -> PathBuf {
    source.with_extension(extension)
}
