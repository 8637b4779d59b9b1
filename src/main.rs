use anyhow::Result;
use fable_foundry::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use fable_foundry::config::{AppConfig, ContentSourceConfig};
use fable_foundry::domain::{
    community::CommentRepository,
    content::ContentSource,
    library::{BookmarkRepository, ReadingProgressRepository},
};
use fable_foundry::infrastructure::{
    content::{CachedContentSource, JsonFileContentSource, SanityContentSource},
    database,
    repositories::{
        PostgresBookmarkRepository, PostgresCommentRepository, PostgresReadingProgressRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use fable_foundry::presentation::http::{
    routes::{RouterOptions, build_router_with},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let bookmark_repo: Arc<dyn BookmarkRepository> =
        Arc::new(PostgresBookmarkRepository::new(pool.clone()));
    let progress_repo: Arc<dyn ReadingProgressRepository> =
        Arc::new(PostgresReadingProgressRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let content = content_source(&config, slugger)?;

    let services = Arc::new(ApplicationServices::new(
        content,
        bookmark_repo,
        progress_repo,
        comment_repo,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router_with(
        state,
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn content_source(
    config: &AppConfig,
    slugger: Arc<dyn SlugGenerator>,
) -> Result<Arc<dyn ContentSource>> {
    let origin: Arc<dyn ContentSource> = match config.content_source() {
        ContentSourceConfig::Sanity(sanity) => {
            tracing::info!(project = %sanity.project_id, dataset = %sanity.dataset, "using CMS content source");
            Arc::new(SanityContentSource::new(sanity.clone(), slugger)?)
        }
        ContentSourceConfig::File(path) => {
            tracing::info!(path = %path.display(), "using JSON file content source");
            Arc::new(JsonFileContentSource::new(path.clone(), slugger))
        }
    };
    Ok(Arc::new(CachedContentSource::new(
        origin,
        config.content_cache_ttl(),
    )))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
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
    tracing::info!("shutdown signal received");
}
