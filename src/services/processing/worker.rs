// Worker - 単一ファイル処理機能

use crate::core::{DecryptError, DecryptResult, HeaderTransform, ProcessingOutcome};
use crate::storage::{FileSink, StorageBackend};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// 読み込み・変換・書き出しを1単位として実行
///
/// 変換はブロッキングプールで実行し、パニックはこのファイルの失敗として扱う。
pub async fn decrypt_file<T, S>(
    transform: &Arc<T>,
    sink: &FileSink<S>,
    source: &Path,
) -> DecryptResult<(PathBuf, usize)>
where
    T: HeaderTransform + 'static,
    S: StorageBackend,
{
    let raw = sink
        .storage()
        .read_item(source)
        .await
        .map_err(|e| DecryptError::read(source, e))?;

    let transform = Arc::clone(transform);
    let payload = tokio::task::spawn_blocking(move || transform.transform(raw))
        .await
        .map_err(DecryptError::panicked)??;

    let output_path = sink.write(source, &payload).await?;
    Ok((output_path, payload.len()))
}

/// 単一ファイルの処理
///
/// エラーはここで捕捉され、呼び出し側には結果としてのみ返る。
pub async fn process_single_file<T, S>(
    transform: &Arc<T>,
    sink: &FileSink<S>,
    source: &Path,
    worker_id: usize,
) -> ProcessingOutcome
where
    T: HeaderTransform + 'static,
    S: StorageBackend,
{
    match decrypt_file(transform, sink, source).await {
        Ok((output_path, bytes_written)) => {
            debug!(
                worker_id,
                source = %source.display(),
                output = %output_path.display(),
                bytes_written,
                "変換完了"
            );
            ProcessingOutcome::Converted {
                source_path: source.to_path_buf(),
                output_path,
                bytes_written,
            }
        }
        Err(error) => {
            warn!(worker_id, path = %source.display(), %error, "変換に失敗しました");
            ProcessingOutcome::Failed {
                source_path: source.to_path_buf(),
                error: error.to_string(),
            }
        }
    }
}
