//! mg-server: HTTP front end of the three demo services.
//!
//! Each service runs in its own process and owns its own database file:
//!
//! - **cats**: raw prepared-statement CRUD over the `cats` table plus a
//!   query-echo endpoint
//! - **people**: entity-mapped CRUD over the `people` table, seeded on first start
//! - **hello**: a static greeting
//!
//! [`start`] opens storage (fatally failing on error), builds the router and
//! serves until SIGINT/SIGTERM.

pub mod context;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod routes;

use std::net::SocketAddr;
use std::path::Path;

use mg_core::config::Config;
use mg_db::migrations::Schema;

use crate::context::AppContext;

/// Which of the three services this process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Cats,
    People,
    Hello,
}

impl Service {
    /// Tables the service's database needs.
    pub fn schema(self) -> Schema {
        match self {
            Service::Cats => Schema::Cats,
            Service::People => Schema::People,
            Service::Hello => Schema::Empty,
        }
    }
}

/// Open the database at `db_path` (creating its directory if needed), ensure
/// the schema and wrap the pool in an [`AppContext`].
pub fn open_context(db_path: &Path, schema: Schema) -> mg_core::Result<AppContext> {
    let existed = db_path.exists();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            tracing::info!("Created database directory {}", parent.display());
        }
    }

    let db_str = db_path.to_string_lossy();
    let db = mg_db::pool::init_pool(&db_str, schema)?;
    if existed {
        tracing::info!("Database opened (existing) at {db_str}");
    } else {
        tracing::info!("Database created (new) at {db_str}");
    }

    Ok(AppContext::new(db))
}

/// Start `service`.
///
/// Storage initialization and seeding happen before the listener is bound;
/// any failure there is returned and nothing is served. Returns when a
/// shutdown signal is received.
pub async fn start(service: Service, config: Config) -> mg_core::Result<()> {
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    let app = match service {
        Service::Hello => router::hello_router(),
        Service::Cats => {
            let ctx = open_context(&config.database.cats_path, service.schema())?;
            router::cats_router(ctx)
        }
        Service::People => {
            let ctx = open_context(&config.database.people_path, service.schema())?;
            if config.database.seed_people {
                let mut conn = mg_db::pool::get_conn(&ctx.db)?;
                mg_db::seed::seed_people(&mut conn)?;
            }
            router::people_router(ctx)
        }
    };

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| mg_core::Error::Internal(format!("Invalid server address: {e}")))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| mg_core::Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!(?service, "Welcome to the server");
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
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

    tracing::info!("Shutdown signal received");
}
