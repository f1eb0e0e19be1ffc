// ==========================================
// Excel 数据提取服务 - 核心库
// ==========================================
// 职责: 从松散结构的表格文件中提取规范化的类型化记录集
// 消费方: 同步处理调用方 + 异步任务工作者
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 数据模型与消息契约
pub mod domain;

// 引擎层 - 表格抽取规则
pub mod engine;

// 提取层 - 工作簿聚合
pub mod extractor;

// API 层 - 同步处理入口
pub mod api;

// 工作者层 - 异步任务管线
pub mod worker;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CellValue, ColumnSchema, ColumnType, FieldValue, JobMessage, ProcessingResult, RowRecord,
    SheetResult,
};

// 引擎
pub use engine::{
    Grid, HeaderDetector, HeaderSplit, MergeFiller, RowMaterializer, SheetExtractor,
    TypeInferencer,
};

// 提取层
pub use extractor::{ExcelProcessor, ExtractError};

// API
pub use api::{ApiError, ErrorResponse, ProcessApi};

// 工作者
pub use worker::{
    FileStore, HttpResultSubmitter, JobOutcome, JobPipeline, ResultSubmitter, SubmitError,
};

// 配置
pub use config::WorkerConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Excel 数据提取服务";
