// ==========================================
// Excel 数据提取服务 - 工作者层
// ==========================================
// 职责: 异步任务管线: 队列消费 → 提取 → 下游提交 → 确认/重投
// 语义: 至少一次投递; 严格串行, 同一时刻只处理一条消息
// ==========================================

pub mod consumer;
pub mod file_store;
pub mod pipeline;
pub mod submitter;

// 重导出核心类型
pub use file_store::FileStore;
pub use pipeline::{JobOutcome, JobPipeline};
pub use submitter::{HttpResultSubmitter, ResultSubmitter, SubmitError};
