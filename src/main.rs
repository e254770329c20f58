use calorie_tracker::{load_data, models::ActivityState, resolve_data_path, router, AppState};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path();
    let data = match &data_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }
            let data = load_data(path).await;
            info!(path = %path.display(), activities = data.len(), "loaded snapshot");
            data
        }
        None => {
            info!("CALORIE_DATA_PATH not set, keeping activities in memory only");
            ActivityState::default()
        }
    };
    let app = router(AppState::new(data_path, data));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
