// Producer - ディレクトリ走査によるファイルパス配信

use crate::core::{Counters, ProcessingResult};
use crate::file_scanner::{FileScanner, ScanStats};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Producer: 走査しながらファイルパスを配信
///
/// walkdirは同期APIのためブロッキングプールで実行する。
/// キューが満杯の間は`blocking_send`で待機する。
/// 走査終了時に`work_tx`がドロップされ、キューが一度だけ閉じられる。
pub fn spawn_producer(
    scanner: FileScanner,
    root: PathBuf,
    counters: Arc<Counters>,
    work_tx: mpsc::Sender<PathBuf>,
) -> tokio::task::JoinHandle<ProcessingResult<ScanStats>> {
    tokio::task::spawn_blocking(move || {
        scanner.scan(&root, &counters, |path| work_tx.blocking_send(path).is_ok())
    })
}
