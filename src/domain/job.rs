// ==========================================
// Excel 数据提取服务 - 队列任务消息
// ==========================================
// 职责: 定义队列消息契约 (与上游投递方的 JSON 字段一致)
// ==========================================

use serde::{Deserialize, Serialize};

/// 一条队列消息对应一个异步处理任务
///
/// 线上字段为驼峰命名: fileId / storedFilename / originalFilename。
/// 每次投递恰好消费一次, 负确认且 requeue 时会被重新投递。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMessage {
    /// 上游文件记录 ID
    pub file_id: i64,

    /// 共享存储区内的存储文件名
    pub stored_filename: String,

    /// 用户上传时的原始文件名
    pub original_filename: String,
}
