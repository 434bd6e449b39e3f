//! `vnpay-gateway` binary.
//!
//! Loads and validates configuration (failing fast on missing gateway
//! credentials), initializes logging, wires the adapters and serves the
//! HTTP API until SIGINT/SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;

use vnpay_gateway::adapters::http::{app_router, AppState};
use vnpay_gateway::adapters::memory::InMemoryOrderRepository;
use vnpay_gateway::adapters::postgres::PostgresOrderRepository;
use vnpay_gateway::adapters::vnpay::{DisabledQueryClient, VnpayQueryClient};
use vnpay_gateway::config::AppConfig;
use vnpay_gateway::logging::init_logging;
use vnpay_gateway::ports::{OrderRepository, TransactionQueryClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_logging(&config.server.log_filter, config.server.log_format);

    let credentials = Arc::new(
        config
            .vnpay
            .to_credentials()
            .context("invalid gateway credentials")?,
    );

    let order_repository: Arc<dyn OrderRepository> = match &config.database {
        Some(database) => {
            let pool = database
                .connect()
                .await
                .context("failed to connect to database")?;
            if database.run_migrations {
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("failed to run migrations")?;
                tracing::info!("database migrations applied");
            }
            Arc::new(PostgresOrderRepository::new(pool))
        }
        None => {
            tracing::warn!("no database configured; orders are kept in memory");
            Arc::new(InMemoryOrderRepository::new())
        }
    };

    let query_client: Arc<dyn TransactionQueryClient> = match config.vnpay.query_url() {
        Some(url) => Arc::new(
            VnpayQueryClient::new(url, config.vnpay.query_timeout())
                .context("failed to build gateway query client")?,
        ),
        None => {
            tracing::info!("gateway query URL not configured; transaction query disabled");
            Arc::new(DisabledQueryClient)
        }
    };

    let state = AppState::new(credentials.clone(), order_repository, query_client);
    let router = app_router(state, &config.server);

    let addr = config.server.bind_address;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        address = %addr,
        environment = ?config.server.environment,
        tmn_code = %credentials.tmn_code(),
        payment_route_prefix = %config.server.payment_route_prefix,
        "vnpay-gateway listening"
    );

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received, draining connections");
}
