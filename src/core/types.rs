// 処理に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// ヘッダー書き換えの対象となる2つの固定バイト列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderPattern {
    /// 暗号化コンテナを識別する先頭シグネチャ
    pub source_magic: &'static [u8],
    /// 復元後のフォーマットの正規ヘッダー
    pub target_magic: &'static [u8],
}

impl HeaderPattern {
    /// 変換に必要な最小ファイルサイズ
    pub const fn min_len(&self) -> usize {
        self.source_magic.len() + self.target_magic.len()
    }
}

/// ディレクトリ走査モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    /// サブディレクトリも再帰的に走査
    #[default]
    Recursive,
    /// 直下のエントリのみ
    Flat,
}

/// 発見数と完了数のカウンター
///
/// スキャナー・ワーカー・レポーター間で`Arc<Counters>`として共有される。
/// 許可される操作はアトミックなインクリメントと読み取りのみ。
#[derive(Debug, Default)]
pub struct Counters {
    produced: AtomicUsize,
    completed: AtomicUsize,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// キュー投入前に1回だけ呼ばれる
    pub fn record_produced(&self) {
        self.produced.fetch_add(1, Ordering::Release);
    }

    /// 成否に関わらず処理試行ごとに1回だけ呼ばれる
    pub fn record_completed(&self) {
        self.completed.fetch_add(1, Ordering::Release);
    }

    pub fn produced(&self) -> usize {
        self.produced.load(Ordering::Acquire)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }

    /// 現在値のスナップショット
    ///
    /// completedを先に読むことで `completed <= produced` が常に成り立つ。
    pub fn snapshot(&self) -> CounterSnapshot {
        let completed = self.completed();
        let produced = self.produced();
        CounterSnapshot {
            produced,
            completed,
        }
    }
}

/// カウンターのある時点での値
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CounterSnapshot {
    pub produced: usize,
    pub completed: usize,
}

impl CounterSnapshot {
    pub fn is_drained(&self) -> bool {
        self.produced == self.completed
    }
}

/// 個別処理の結果
#[derive(Debug)]
pub enum ProcessingOutcome {
    Converted {
        source_path: PathBuf,
        output_path: PathBuf,
        bytes_written: usize,
    },
    Failed {
        source_path: PathBuf,
        error: String,
    },
}

impl ProcessingOutcome {
    pub fn source_path(&self) -> &PathBuf {
        match self {
            Self::Converted { source_path, .. } | Self::Failed { source_path, .. } => source_path,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// 失敗したファイルの記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

/// 処理全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingSummary {
    pub produced: usize,
    pub completed: usize,
    pub converted: usize,
    pub failed: usize,
    #[serde(serialize_with = "serialize_duration_ms")]
    pub elapsed: Duration,
    pub failures: Vec<FailedFile>,
}

impl ProcessingSummary {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

fn serialize_duration_ms<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}
