use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shogiwars::cli::Cli;
use shogiwars::commands;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志（输出到 stderr，stdout 只留给命令结果）
    let level = if cli.debug { "shogiwars=debug" } else { "shogiwars=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(level.parse()?))
        .init();

    debug!("参数: {:?}", cli);
    commands::run(cli).await
}
