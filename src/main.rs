use nutrition_tracker::{app, config::AppConfig, state::AppState};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "nutrition_tracker=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Local offset detection must happen while the process is single-threaded.
    let config = AppConfig::from_env()?;
    tracing::info!(offset = %config.utc_offset, "day boundaries use this offset");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(config))
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    let state = AppState::init(config)?;
    app::serve(app::build_app(state), &addr).await
}
