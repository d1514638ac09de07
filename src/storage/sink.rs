// File Sink - 変換結果の書き出し

use super::{derive_output_path, StorageBackend};
use crate::core::{DecryptError, DecryptResult};
use std::path::{Path, PathBuf};

/// 変換済みデータを元ファイルと同じディレクトリに書き出す
///
/// 元ファイルは削除しない。
#[derive(Debug, Clone)]
pub struct FileSink<S> {
    storage: S,
    extension: String,
}

impl<S> FileSink<S>
where
    S: StorageBackend,
{
    pub fn new(storage: S, extension: impl Into<String>) -> Self {
        Self {
            storage,
            extension: extension.into(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 出力先を導出して書き込み、書き込んだパスを返す
    pub async fn write(&self, source: &Path, payload: &[u8]) -> DecryptResult<PathBuf> {
        let destination = derive_output_path(source, &self.extension);
        self.storage
            .write_item(&destination, payload)
            .await
            .map_err(|e| DecryptError::write(&destination, e))?;
        Ok(destination)
    }
}
