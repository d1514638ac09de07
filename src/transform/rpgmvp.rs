use super::rewrite_header;
use crate::core::{DecryptResult, HeaderPattern, HeaderTransform};

/// RPGツクールMVの暗号化コンテナシグネチャ ("RPGMV" + バージョン情報)
pub const RPGMV_SIGNATURE: [u8; 16] = [
    0x52, 0x50, 0x47, 0x4D, 0x56, 0x00, 0x00, 0x00, //
    0x00, 0x03, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// PNGシグネチャ + IHDRチャンクの先頭
pub const PNG_HEADER: [u8; 16] = [
    // PNGマジック
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
    // チャンク長: 13 (IHDRは常に固定)
    0x00, 0x00, 0x00, 0x0D,
    // チャンクタイプ: "IHDR"
    0x49, 0x48, 0x44, 0x52,
];

/// `.rpgmvp` / `.png_` 画像用のヘッダーパターン
pub const RPGMV_PNG: HeaderPattern = HeaderPattern {
    source_magic: &RPGMV_SIGNATURE,
    target_magic: &PNG_HEADER,
};

/// RPGツクールMV/MZの暗号化PNGを復元する変換
#[derive(Debug, Clone)]
pub struct RpgMakerPngTransform {
    pattern: HeaderPattern,
}

impl Default for RpgMakerPngTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl RpgMakerPngTransform {
    pub fn new() -> Self {
        Self { pattern: RPGMV_PNG }
    }

    pub fn pattern(&self) -> &HeaderPattern {
        &self.pattern
    }
}

impl HeaderTransform for RpgMakerPngTransform {
    fn transform(&self, raw: Vec<u8>) -> DecryptResult<Vec<u8>> {
        rewrite_header(&self.pattern, raw)
    }

    fn output_extension(&self) -> &str {
        "png"
    }
}
