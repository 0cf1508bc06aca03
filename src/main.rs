use anyhow::Result;
use quiz_convert::utils::logging;
use quiz_convert::{App, Config};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置：QUIZ_CONFIG 指定 TOML 文件时优先使用，否则读环境变量
    let config = match std::env::var("QUIZ_CONFIG") {
        Ok(path) => Config::from_file(Path::new(&path))?,
        Err(_) => Config::from_env()?,
    };

    // 初始化并运行应用
    let outcome = App::initialize(config).await?.run().await?;

    if outcome.summary.documents_converted == 0 && outcome.summary.documents_seen > 0 {
        anyhow::bail!("没有任何文档转换成功");
    }

    Ok(())
}
