// ==========================================
// Excel 数据提取服务 - 工作簿聚合层
// ==========================================
// 职责: 打开工作簿, 逐表运行抽取引擎, 聚合处理结果
// ==========================================

pub mod error;
pub mod excel_processor;

pub use error::{ExtractError, ExtractResult};
pub use excel_processor::ExcelProcessor;
