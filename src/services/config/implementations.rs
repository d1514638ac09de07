// 設定管理の具象実装

use crate::core::{ProcessingConfig, ProcessingError, ProcessingResult, TraversalMode};
use crate::file_scanner::DEFAULT_SUFFIXES;
use std::time::Duration;
use tokio::sync::Semaphore;

/// 進捗報告のデフォルト間隔
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(300);

/// ジョブキューのデフォルト容量
pub const DEFAULT_BUFFER_SIZE: usize = 100;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultProcessingConfig {
    worker_count: usize,
    buffer_size: usize,
    traversal_mode: TraversalMode,
    suffixes: Vec<String>,
    enable_progress: bool,
    progress_interval: Duration,
}

impl DefaultProcessingConfig {
    pub fn new(cpu_count: usize) -> Self {
        Self {
            worker_count: cpu_count.max(1),
            buffer_size: DEFAULT_BUFFER_SIZE,
            traversal_mode: TraversalMode::Recursive,
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            enable_progress: true,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_traversal_mode(mut self, mode: TraversalMode) -> Self {
        self.traversal_mode = mode;
        self
    }

    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }

    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    /// 処理開始前の設定検証
    pub fn validate(&self) -> ProcessingResult<()> {
        validate_config(self)
    }
}

impl Default for DefaultProcessingConfig {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl ProcessingConfig for DefaultProcessingConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn traversal_mode(&self) -> TraversalMode {
        self.traversal_mode
    }

    fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }

    fn progress_interval(&self) -> Duration {
        self.progress_interval
    }
}

/// 任意の`ProcessingConfig`を検証する
pub fn validate_config<C: ProcessingConfig + ?Sized>(config: &C) -> ProcessingResult<()> {
    if config.worker_count() == 0 {
        return Err(ProcessingError::configuration(
            "ワーカー数は1以上である必要があります",
        ));
    }

    if config.channel_buffer_size() == 0 {
        return Err(ProcessingError::configuration(
            "バッファサイズは1以上である必要があります",
        ));
    }

    if config.channel_buffer_size() > Semaphore::MAX_PERMITS {
        return Err(ProcessingError::configuration(format!(
            "バッファサイズは{}以下である必要があります",
            Semaphore::MAX_PERMITS
        )));
    }

    if config.suffixes().is_empty() || config.suffixes().iter().any(|s| s.is_empty()) {
        return Err(ProcessingError::configuration(
            "対象の接尾辞を1つ以上指定する必要があります",
        ));
    }

    if config.enable_progress_reporting() && config.progress_interval().is_zero() {
        return Err(ProcessingError::configuration(
            "進捗報告の間隔は0より大きい必要があります",
        ));
    }

    Ok(())
}
