// ==========================================
// Excel 数据提取服务 - 下游提交器
// ==========================================
// 职责: 将处理结果提交给内部下游系统
// 接口: ResultSubmitter trait, 便于管线测试替换
// 配置: 下游基地址在构造时显式传入, 不使用全局单例
// ==========================================

use crate::domain::record::ProcessingResult;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

/// 提交错误, 一律可重试
#[derive(Error, Debug)]
pub enum SubmitError {
    /// 网络层失败 (连接拒绝、超时等)
    #[error("下游请求失败: {0}")]
    Transport(String),

    /// 下游返回非成功状态码
    #[error("下游返回非成功状态: {0}")]
    Status(u16),
}

// ==========================================
// ResultSubmitter Trait
// ==========================================
// 用途: 下游提交接口
// 实现者: HttpResultSubmitter (生产), 测试替身 (tests/)
#[async_trait]
pub trait ResultSubmitter: Send + Sync {
    /// 提交一个文件的处理结果
    ///
    /// # 参数
    /// - file_id: 上游文件记录 ID
    /// - result: 聚合后的处理结果
    async fn submit(&self, file_id: i64, result: &ProcessingResult) -> Result<(), SubmitError>;
}

// ==========================================
// HttpResultSubmitter - HTTP 实现
// ==========================================
pub struct HttpResultSubmitter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResultSubmitter {
    /// 创建提交器
    ///
    /// # 参数
    /// - base_url: 下游服务基地址, 如 http://localhost:8080
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, file_id: i64) -> String {
        format!(
            "{}/api/internal/files/{}/processed-data",
            self.base_url.trim_end_matches('/'),
            file_id
        )
    }
}

#[async_trait]
impl ResultSubmitter for HttpResultSubmitter {
    async fn submit(&self, file_id: i64, result: &ProcessingResult) -> Result<(), SubmitError> {
        let url = self.endpoint(file_id);
        debug!(file_id = file_id, url = %url, "提交处理结果");

        let response = self
            .client
            .post(&url)
            .json(result)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        info!(file_id = file_id, "处理结果提交成功");
        Ok(())
    }
}
