use roster_app::app::api::routes;
use roster_app::config::ConfigHandler;
use roster_app::db_handler::DbProviderHandler;
use roster_core::config::load_config;
use roster_db::db::connection::create_pool;
use roster_db::db::migrate::run_migrations;
use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting care roster server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let database_url = config.database.url();

    run_migrations(&database_url).await?;

    let pool = create_pool(&database_url, u32::from(config.database.max_connections)).await?;

    tracing::info!("Database connection pool created.");

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(DbProviderHandler { provider: pool })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
