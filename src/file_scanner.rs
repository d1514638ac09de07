// Directory Scanner - 対象ファイルの発見と配信

use crate::core::{Counters, ProcessingError, ProcessingResult, TraversalMode};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// デフォルトで対象とする接尾辞
pub const DEFAULT_SUFFIXES: [&str; 2] = [".rpgmvp", ".png_"];

/// ファイル名の接尾辞によるフィルター（大文字小文字を区別する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl Default for SuffixFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIXES)
    }
}

impl SuffixFilter {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.suffixes
            .iter()
            .any(|suffix| name.len() > suffix.len() && name.ends_with(suffix.as_str()))
    }
}

/// 走査結果の統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// 配信したファイル数
    pub matched: usize,
    /// 読み込めずにスキップしたエントリ数
    pub skipped: usize,
}

/// ディレクトリを走査して対象ファイルを配信する
#[derive(Debug, Clone)]
pub struct FileScanner {
    mode: TraversalMode,
    filter: SuffixFilter,
}

impl FileScanner {
    pub fn new(mode: TraversalMode, filter: SuffixFilter) -> Self {
        Self { mode, filter }
    }

    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    pub fn filter(&self) -> &SuffixFilter {
        &self.filter
    }

    /// ルートが存在し、読み込み可能なディレクトリであることを確認
    pub fn validate_root(root: &Path) -> ProcessingResult<()> {
        std::fs::read_dir(root)
            .map(|_| ())
            .map_err(|e| ProcessingError::traversal(root, e))
    }

    fn walker(&self, root: &Path) -> WalkDir {
        let walker = WalkDir::new(root).min_depth(1);
        match self.mode {
            TraversalMode::Recursive => walker,
            TraversalMode::Flat => walker.max_depth(1),
        }
    }

    /// 対象ファイルごとに`produced`を加算してから`emit`を呼ぶ
    ///
    /// `emit`がブロックすることでバックプレッシャーがかかる。
    /// `emit`が`false`を返した場合は受信側が存在しないため走査を中断する。
    pub fn scan<F>(&self, root: &Path, counters: &Counters, mut emit: F) -> ProcessingResult<ScanStats>
    where
        F: FnMut(PathBuf) -> bool,
    {
        Self::validate_root(root)?;

        let mut stats = ScanStats::default();

        for entry in self.walker(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if err.depth() == 0 {
                        let message = err.to_string();
                        let source = err
                            .into_io_error()
                            .unwrap_or_else(|| std::io::Error::other(message));
                        return Err(ProcessingError::traversal(root, source));
                    }
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    warn!(path = %path, error = %err, "ディレクトリを読み込めないためスキップします");
                    stats.skipped += 1;
                    continue;
                }
            };

            if entry.file_type().is_dir() || !self.filter.matches(entry.path()) {
                continue;
            }

            counters.record_produced();
            stats.matched += 1;

            if !emit(entry.into_path()) {
                return Err(ProcessingError::channel(
                    "ジョブキューの受信側が閉じられています",
                ));
            }
        }

        debug!(
            root = %root.display(),
            matched = stats.matched,
            skipped = stats.skipped,
            "走査完了"
        );
        Ok(stats)
    }

    /// 対象ファイルを一覧として取得
    pub fn scan_directory(&self, root: &Path) -> ProcessingResult<Vec<PathBuf>> {
        let counters = Counters::new();
        let mut file_paths = Vec::new();
        self.scan(root, &counters, |path| {
            file_paths.push(path);
            true
        })?;
        file_paths.sort();
        Ok(file_paths)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new(TraversalMode::default(), SuffixFilter::default())
    }
}
