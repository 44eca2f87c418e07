use anyhow::Result;
use akkor::config::Config;
use akkor_shared::user::Role;

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting akkor server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let state =
        akkor::db::create_state(&config.database.url, config.database.max_connections).await?;
    akkor::db::migrate(&state.write_db).await?;

    bootstrap_root(&config, &state).await?;

    let app = akkor::create_app(config, state.clone());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pools...");
    state.read_db.close().await;
    state.write_db.close().await;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

/// Creates the configured administrator account unless its email is
/// already registered.
async fn bootstrap_root(config: &Config, state: &akkor_shared::State) -> Result<()> {
    if config.root.email.is_empty() {
        return Ok(());
    }

    let query = akkor_user::Query::new(state.clone());
    if query.find_by_email(&config.root.email).await?.is_some() {
        return Ok(());
    }

    let command = akkor_user::Command::new(state.clone());
    let id = command
        .create(
            akkor_user::RegisterInput {
                pseudo: "root".to_owned(),
                email: config.root.email.to_owned(),
                password: config.root.password.to_owned(),
            },
            Role::Admin,
        )
        .await?;

    tracing::info!(user_id = id, email = %config.root.email, "Root administrator created");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
