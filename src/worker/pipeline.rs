// ==========================================
// Excel 数据提取服务 - 任务处理管线
// ==========================================
// 职责: 单条消息的状态机: 定位 → 提取 → 提交 → 清理
// 输出: JobOutcome, 由消费者映射为 ack / nack(requeue) / nack(drop)
// ==========================================

use crate::domain::job::JobMessage;
use crate::extractor::{ExcelProcessor, ExtractError};
use crate::worker::file_store::FileStore;
use crate::worker::submitter::ResultSubmitter;
use tracing::{error, info, instrument};

/// 一次投递的处理结局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// 提交成功, 消息应被确认 (ack)
    Completed,

    /// 下游提交失败, 消息应带 requeue 负确认, 等待重投
    Retry,

    /// 致命失败 (文件缺失/损坏/其他), 消息应不带 requeue 负确认, 永久丢弃
    Discard,
}

/// 任务处理管线
///
/// 严格串行: 调用方保证同一时刻只有一条消息在处理。
pub struct JobPipeline<S: ResultSubmitter> {
    store: FileStore,
    processor: ExcelProcessor,
    submitter: S,
}

impl<S: ResultSubmitter> JobPipeline<S> {
    pub fn new(store: FileStore, submitter: S) -> Self {
        Self {
            store,
            processor: ExcelProcessor::new(),
            submitter,
        }
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// 处理一次投递
    ///
    /// 空结果 (无任何工作表产出数据) 不是异步路径的错误,
    /// 空的处理结果照常提交。
    #[instrument(skip(self, msg), fields(file_id = msg.file_id, file = %msg.stored_filename))]
    pub async fn handle(&self, msg: &JobMessage) -> JobOutcome {
        info!("开始处理任务");

        // === 步骤 1: 定位并提取 ===
        let path = self.store.resolve(&msg.stored_filename);
        let result = match self.processor.process_path(&path, &msg.original_filename) {
            Ok(result) => result,
            Err(ExtractError::FileNotFound(p)) => {
                error!(path = %p, "源文件不存在, 任务永久丢弃");
                return JobOutcome::Discard;
            }
            Err(e) => {
                error!(error = %e, "文件提取失败, 任务永久丢弃");
                return JobOutcome::Discard;
            }
        };

        // === 步骤 2: 提交下游 ===
        if let Err(e) = self.submitter.submit(msg.file_id, &result).await {
            error!(error = %e, "下游提交失败, 消息将重新投递");
            return JobOutcome::Retry;
        }

        // === 步骤 3: 清理源文件 (尽力而为) ===
        self.store.remove_best_effort(&msg.stored_filename);

        info!(sheets = result.sheets.len(), "任务处理完成");
        JobOutcome::Completed
    }
}
