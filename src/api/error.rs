// ==========================================
// Excel 数据提取服务 - API层错误类型
// ==========================================
// 职责: 将提取层错误转换为带稳定错误码的结构化响应
// 约定: 错误码与 HTTP 状态码一经发布不得变更
// ==========================================

use crate::extractor::ExtractError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 扩展名不在受支持的表格格式之列
    #[error("文件格式无效: 仅支持 .xlsx/.xls 文件")]
    InvalidFileFormat,

    /// 聚合后没有任何工作表产出数据 (业务级错误, 非引擎异常)
    #[error("未提取到任何数据: 所有工作表均无有效内容")]
    NoDataProcessed,

    /// 工作簿级损坏, 整个文件被中止
    #[error("文件损坏或无法解析: {0}")]
    FileCorrupt(String),

    /// 其他未预期的内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    /// 稳定错误码
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidFileFormat => "INVALID_FILE_FORMAT",
            ApiError::NoDataProcessed => "NO_DATA_PROCESSED",
            ApiError::FileCorrupt(_) => "FILE_CORRUPT",
            ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// 对应的 HTTP 状态码
    pub fn http_status(&self) -> u16 {
        match self {
            ApiError::InvalidFileFormat
            | ApiError::NoDataProcessed
            | ApiError::FileCorrupt(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }

    /// 生成结构化错误响应体
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error_code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

// 提取层错误映射: 损坏 → FILE_CORRUPT, 其余 → 内部错误
// (同步路径处理的是内存字节, 不会出现 FileNotFound)
impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Format(msg) => ApiError::FileCorrupt(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// 结构化错误响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
