// ==========================================
// Excel 数据提取服务 - API 层
// ==========================================
// 职责: 同步处理入口的业务封装与稳定错误码
// 说明: HTTP 路由本身由外部协作方承担, 此处只定义契约
// ==========================================

pub mod error;
pub mod process_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use process_api::{ProcessApi, SUPPORTED_EXTENSIONS};
