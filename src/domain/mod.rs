// ==========================================
// Excel 数据提取服务 - 领域层
// ==========================================
// 职责: 定义提取结果的数据模型与外部消息契约
// ==========================================

pub mod cell;
pub mod job;
pub mod record;
pub mod schema;

// 重导出核心类型
pub use cell::CellValue;
pub use job::JobMessage;
pub use record::{FieldValue, ProcessingResult, RowRecord, SheetResult};
pub use schema::{ColumnSchema, ColumnType};
