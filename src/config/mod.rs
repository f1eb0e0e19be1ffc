// ==========================================
// Excel 数据提取服务 - 配置层
// ==========================================
// 职责: 工作者运行配置 (显式传入各组件, 不使用全局单例)
// ==========================================

pub mod worker_config;

pub use worker_config::WorkerConfig;
