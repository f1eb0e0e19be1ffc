// ==========================================
// Excel 数据提取服务 - 工作者主入口
// ==========================================
// 职责: 初始化日志与配置, 启动队列消费主循环
// ==========================================

use excel_processor::config::WorkerConfig;
use excel_processor::{logging, worker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 异步处理工作者", excel_processor::APP_NAME);
    tracing::info!("系统版本: {}", excel_processor::VERSION);
    tracing::info!("==================================================");

    // 加载配置
    let config = WorkerConfig::from_env();
    tracing::info!(
        queue = %config.queue_name,
        storage_dir = %config.storage_dir.display(),
        downstream = %config.downstream_base_url,
        "工作者配置加载完成"
    );

    // 启动消费主循环 (仅进程终止可停止)
    worker::consumer::run(config).await
}
