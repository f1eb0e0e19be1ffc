// ==========================================
// Excel 数据提取服务 - 队列消费者
// ==========================================
// 职责: 连接消息队列, 串行消费任务消息并执行确认策略
// 语义: prefetch=1, FIFO, 无超时 (下游挂起会阻塞整个工作者)
// ==========================================

use crate::config::WorkerConfig;
use crate::domain::job::JobMessage;
use crate::worker::file_store::FileStore;
use crate::worker::pipeline::{JobOutcome, JobPipeline};
use crate::worker::submitter::HttpResultSubmitter;
use futures::StreamExt;
use lapin::options::{
    BasicAckOptions, BasicConsumeOptions, BasicNackOptions, BasicQosOptions, QueueDeclareOptions,
};
use lapin::types::FieldTable;
use lapin::{Connection, ConnectionProperties};
use tracing::{error, info, warn};

/// 运行工作者主循环
///
/// 连接失败按固定间隔重试; 消费中断后重新建立连接。
/// 进程终止是唯一的停止方式, 在途消息保持未确认, 等待重投。
pub async fn run(config: WorkerConfig) -> anyhow::Result<()> {
    let submitter = HttpResultSubmitter::new(config.downstream_base_url.clone());
    let pipeline = JobPipeline::new(FileStore::new(&config.storage_dir), submitter);

    loop {
        let connection = connect_with_retry(&config).await;
        info!("消息队列连接成功");

        if let Err(e) = consume(&connection, &config, &pipeline).await {
            error!(error = %e, "消费循环中断, 准备重连");
        }

        tokio::time::sleep(config.reconnect_delay).await;
    }
}

/// 按固定间隔重试, 直到连接成功
async fn connect_with_retry(config: &WorkerConfig) -> Connection {
    loop {
        match Connection::connect(&config.amqp_addr, ConnectionProperties::default()).await {
            Ok(connection) => return connection,
            Err(e) => {
                warn!(
                    error = %e,
                    delay_secs = config.reconnect_delay.as_secs(),
                    "消息队列连接失败, 稍后重试"
                );
                tokio::time::sleep(config.reconnect_delay).await;
            }
        }
    }
}

async fn consume(
    connection: &Connection,
    config: &WorkerConfig,
    pipeline: &JobPipeline<HttpResultSubmitter>,
) -> anyhow::Result<()> {
    let channel = connection.create_channel().await?;

    // 与上游投递方一致: 持久化队列
    channel
        .queue_declare(
            &config.queue_name,
            QueueDeclareOptions {
                durable: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await?;

    // 严格串行: 同一时刻最多一条在手消息
    channel.basic_qos(1, BasicQosOptions::default()).await?;

    let mut consumer = channel
        .basic_consume(
            &config.queue_name,
            "excel-processor-worker",
            BasicConsumeOptions::default(),
            FieldTable::default(),
        )
        .await?;

    info!(queue = %config.queue_name, "工作者已就绪, 等待处理任务");

    while let Some(delivery) = consumer.next().await {
        let delivery = delivery?;

        let msg: JobMessage = match serde_json::from_slice(&delivery.data) {
            Ok(msg) => msg,
            Err(e) => {
                // 无法解码的消息不得卡住队列, 按致命失败丢弃
                error!(error = %e, "消息体解码失败, 永久丢弃");
                delivery
                    .acker
                    .nack(BasicNackOptions {
                        requeue: false,
                        ..Default::default()
                    })
                    .await?;
                continue;
            }
        };

        match pipeline.handle(&msg).await {
            JobOutcome::Completed => {
                delivery.acker.ack(BasicAckOptions::default()).await?;
            }
            JobOutcome::Retry => {
                delivery
                    .acker
                    .nack(BasicNackOptions {
                        requeue: true,
                        ..Default::default()
                    })
                    .await?;
            }
            JobOutcome::Discard => {
                delivery
                    .acker
                    .nack(BasicNackOptions {
                        requeue: false,
                        ..Default::default()
                    })
                    .await?;
            }
        }
    }

    Ok(())
}
