// エラーハンドリング統合テスト

use crate::fixtures::*;
use rpgmvp_decrypt::{
    core::{DecryptError, HeaderTransform, ProcessingError},
    engine::{create_quiet_processing_engine, decrypt_directory, ProcessingEngine},
    services::{DefaultProcessingConfig, NoOpProgressReporter},
    storage::local::LocalStorageBackend,
    transform::RpgMakerPngTransform,
};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_nonexistent_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does_not_exist");

    let result = decrypt_directory(&missing).await;

    assert!(matches!(
        result,
        Err(ProcessingError::TraversalError { .. })
    ));
    assert_eq!(count_png_files(temp_dir.path()), 0);
}

#[tokio::test]
async fn test_file_as_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_container(temp_dir.path(), "a.rpgmvp", b"x");

    let result = decrypt_directory(&file).await;

    assert!(matches!(
        result,
        Err(ProcessingError::TraversalError { .. })
    ));
    assert!(!temp_dir.path().join("a.png").exists());
}

#[tokio::test]
async fn test_invalid_configuration_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    write_container(temp_dir.path(), "a.rpgmvp", b"x");

    let engine =
        create_quiet_processing_engine(DefaultProcessingConfig::new(2).with_worker_count(0));
    let result = engine.process_directory(temp_dir.path()).await;

    assert!(matches!(
        result,
        Err(ProcessingError::ConfigurationError { .. })
    ));
    assert!(!temp_dir.path().join("a.png").exists());
}

#[tokio::test]
async fn test_failure_messages_are_recorded() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_raw(root, "short.rpgmvp", b"tiny");
    let mut bad_magic = valid_container(b"payload");
    bad_magic[5] = 0x01;
    write_raw(root, "magic.png_", &bad_magic);

    let summary = decrypt_directory(root).await.unwrap();

    assert_eq!(summary.failed, 2);
    assert_eq!(summary.completed, summary.produced);
    let short = summary
        .failures
        .iter()
        .find(|failure| failure.path.ends_with("short.rpgmvp"))
        .unwrap();
    assert_eq!(
        short.error,
        DecryptError::TooSmall { len: 4, min: 32 }.to_string()
    );
    let magic = summary
        .failures
        .iter()
        .find(|failure| failure.path.ends_with("magic.png_"))
        .unwrap();
    assert_eq!(magic.error, DecryptError::BadMagic.to_string());
}

/// 特定の入力でパニックする変換
struct ExplodingTransform;

impl HeaderTransform for ExplodingTransform {
    fn transform(&self, raw: Vec<u8>) -> Result<Vec<u8>, DecryptError> {
        if raw.starts_with(b"boom") {
            panic!("exploding transform");
        }
        Ok(raw)
    }

    fn output_extension(&self) -> &str {
        "out"
    }
}

#[tokio::test]
async fn test_panicking_transform_fails_single_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_raw(root, "a.rpgmvp", b"boom");
    write_raw(root, "b.rpgmvp", b"fine");

    let engine = ProcessingEngine::new(
        ExplodingTransform,
        LocalStorageBackend::new(),
        DefaultProcessingConfig::new(2).with_progress_reporting(false),
        NoOpProgressReporter::new(),
    );
    let summary = engine.process_directory(root).await.unwrap();

    assert_eq!(summary.completed, 2);
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(fs::read(root.join("b.out")).unwrap(), b"fine");
    assert!(!root.join("a.out").exists());
}

#[cfg(unix)]
#[tokio::test]
async fn test_unwritable_output_directory_fails_per_file() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let locked = temp_dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    write_container(&locked, "a.rpgmvp", b"x");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // rootで実行している場合は権限チェックが効かない
    if fs::write(locked.join("probe"), b"").is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let summary = decrypt_directory(temp_dir.path()).await.unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(summary.produced, 1);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.failed, 1);
}
