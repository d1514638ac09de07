// ファイル処理機能
// 単一ファイルの読み込み、ヘッダー変換、書き出し

pub mod worker;

// 公開API
pub use worker::{decrypt_file, process_single_file};
