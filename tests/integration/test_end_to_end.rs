// エンドツーエンド統合テスト

use crate::fixtures::*;
use rpgmvp_decrypt::{
    core::{ProcessingConfig, TraversalMode},
    engine::{create_quiet_processing_engine, decrypt_directory, ProcessingEngine},
    services::{DefaultProcessingConfig, NoOpProgressReporter},
    storage::local::LocalStorageBackend,
    transform::RpgMakerPngTransform,
};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_mixed_directory_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_container(root, "a.rpgmvp", b"image-a");
    write_container(root, "b.png_", b"image-b");
    write_raw(root, "c.txt", b"not an image");
    write_raw(root, "d.rpgmvp", b"12345");

    let summary = decrypt_directory(root).await.unwrap();

    assert_eq!(summary.produced, 3);
    assert_eq!(summary.completed, 3);
    assert_eq!(summary.converted, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.failures[0].path, root.join("d.rpgmvp"));

    assert_eq!(fs::read(root.join("a.png")).unwrap(), expected_png(b"image-a"));
    assert_eq!(fs::read(root.join("b.png")).unwrap(), expected_png(b"image-b"));
    assert!(!root.join("c.png").exists());
    assert!(!root.join("d.png").exists());

    // 入力ファイルは変更されない
    assert_eq!(fs::read(root.join("d.rpgmvp")).unwrap(), b"12345");
}

#[tokio::test]
async fn test_empty_directory() {
    let temp_dir = TempDir::new().unwrap();

    let summary = decrypt_directory(temp_dir.path()).await.unwrap();

    assert_eq!(summary.produced, 0);
    assert_eq!(summary.completed, 0);
    assert!(summary.failures.is_empty());
}

#[tokio::test]
async fn test_many_files_with_some_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let nested = root.join("img").join("characters");
    fs::create_dir_all(&nested).unwrap();

    let total = 60;
    let malformed = 7;
    for i in 0..total {
        let name = format!("actor{i}.rpgmvp");
        if i < malformed {
            // 署名の1バイト目を壊す
            let mut data = valid_container(b"payload");
            data[0] ^= 0xFF;
            write_raw(&nested, &name, &data);
        } else {
            write_container(&nested, &name, format!("payload-{i}").as_bytes());
        }
    }

    let config = DefaultProcessingConfig::new(4).with_buffer_size(3);
    let summary = create_quiet_processing_engine(config)
        .process_directory(root)
        .await
        .unwrap();

    assert_eq!(summary.produced, total);
    assert_eq!(summary.completed, total);
    assert_eq!(summary.converted, total - malformed);
    assert_eq!(summary.failed, malformed);
    assert_eq!(count_png_files(root), total - malformed);

    let sample = fs::read(nested.join("actor42.png")).unwrap();
    assert_eq!(sample, expected_png(b"payload-42"));
}

#[tokio::test]
async fn test_flat_and_recursive_traversal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let nested = root.join("pictures");
    fs::create_dir(&nested).unwrap();
    write_container(root, "top.rpgmvp", b"top");
    write_container(&nested, "deep.rpgmvp", b"deep");

    let flat = create_quiet_processing_engine(
        DefaultProcessingConfig::new(2).with_traversal_mode(TraversalMode::Flat),
    );
    let summary = flat.process_directory(root).await.unwrap();
    assert_eq!(summary.produced, 1);
    assert!(root.join("top.png").exists());
    assert!(!nested.join("deep.png").exists());

    let recursive = create_quiet_processing_engine(DefaultProcessingConfig::new(2));
    assert_eq!(recursive.config().traversal_mode(), TraversalMode::Recursive);
    let summary = recursive.process_directory(root).await.unwrap();
    assert_eq!(summary.produced, 2);
    assert!(nested.join("deep.png").exists());
}

#[tokio::test]
async fn test_custom_suffix_set() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_container(root, "a.rpgmvp", b"a");
    write_container(root, "b.enc", b"b");

    let engine = ProcessingEngine::new(
        RpgMakerPngTransform::new(),
        LocalStorageBackend::new(),
        DefaultProcessingConfig::new(2)
            .with_suffixes([".enc"])
            .with_progress_reporting(false),
        NoOpProgressReporter::new(),
    );
    let summary = engine.process_directory(root).await.unwrap();

    assert_eq!(summary.produced, 1);
    assert!(root.join("b.png").exists());
    assert!(!root.join("a.png").exists());
}

#[tokio::test]
async fn test_rerun_overwrites_existing_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_container(root, "a.rpgmvp", b"fresh");
    write_raw(root, "a.png", b"stale contents that are longer than the new output");

    decrypt_directory(root).await.unwrap();
    let summary = decrypt_directory(root).await.unwrap();

    assert_eq!(summary.converted, 1);
    assert_eq!(fs::read(root.join("a.png")).unwrap(), expected_png(b"fresh"));
}

#[tokio::test]
async fn test_concurrent_runs_do_not_share_counters() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    for i in 0..5 {
        write_container(first.path(), &format!("{i}.rpgmvp"), b"x");
    }
    for i in 0..9 {
        write_container(second.path(), &format!("{i}.png_"), b"y");
    }

    let (a, b) = tokio::join!(
        decrypt_directory(first.path()),
        decrypt_directory(second.path())
    );

    assert_eq!(a.unwrap().produced, 5);
    assert_eq!(b.unwrap().produced, 9);
}
