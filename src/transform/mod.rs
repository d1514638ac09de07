// ヘッダー変換機能
// 暗号化コンテナのヘッダーを取り除き、正規フォーマットのヘッダーを書き込む

pub mod rpgmvp;

use crate::core::{DecryptError, DecryptResult, HeaderPattern};

pub use rpgmvp::{RpgMakerPngTransform, PNG_HEADER, RPGMV_PNG, RPGMV_SIGNATURE};

/// ヘッダーパターンに従ってバッファを検証する
///
/// 成功時は何も変更しない。
pub fn validate_header(pattern: &HeaderPattern, raw: &[u8]) -> DecryptResult<()> {
    if raw.len() < pattern.min_len() {
        return Err(DecryptError::TooSmall {
            len: raw.len(),
            min: pattern.min_len(),
        });
    }

    if &raw[..pattern.source_magic.len()] != pattern.source_magic {
        return Err(DecryptError::BadMagic);
    }

    Ok(())
}

/// 入力バッファを再利用してヘッダーを書き換える
///
/// 先頭の`source_magic`分を取り除き、残りの先頭に`target_magic`を上書きする。
pub fn rewrite_header(pattern: &HeaderPattern, mut raw: Vec<u8>) -> DecryptResult<Vec<u8>> {
    validate_header(pattern, &raw)?;

    raw.drain(..pattern.source_magic.len());
    raw[..pattern.target_magic.len()].copy_from_slice(pattern.target_magic);

    Ok(raw)
}

/// 借用したバッファから新しい出力バッファを作成する
pub fn rewrite_header_copy(pattern: &HeaderPattern, raw: &[u8]) -> DecryptResult<Vec<u8>> {
    validate_header(pattern, raw)?;

    let mut output = raw[pattern.source_magic.len()..].to_vec();
    output[..pattern.target_magic.len()].copy_from_slice(pattern.target_magic);

    Ok(output)
}
