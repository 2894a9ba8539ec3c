use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use misere_nim_server::config::ServerConfig;
use misere_nim_server::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("配置无效: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(seed) = config.seed {
        info!("使用固定随机种子 {}", seed);
    }

    let state = Arc::new(AppState::new(config.game.clone(), config.seed));
    let app = create_router(state, &config.static_dir);

    let addr = config.addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("无法监听 {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    info!("服务器正在监听 {}，静态文件目录 {}", addr, config.static_dir.display());

    if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
        error!("服务器异常退出: {}", e);
    }
    info!("服务器已停止");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("无法注册 Ctrl+C 信号处理: {}", e);
        std::future::pending::<()>().await;
    }
}
