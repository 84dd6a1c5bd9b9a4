use anyhow::Result;
use craftstore::application::{
    carousel::{CarouselTiming, SlideRotationController},
    services::{ApplicationServices, ServiceDependencies},
};
use craftstore::config::AppConfig;
use craftstore::domain::carousel::SlideDeck;
use craftstore::infrastructure::{
    carts::{CartLimits, InMemoryCartStore},
    database,
    media::FilesystemBlobStore,
    repositories::{
        PostgresCategoryRepository, PostgresProductRepository, PostgresReviewRepository,
    },
    time::SystemClock,
};
use craftstore::presentation::http::{
    routes::build_router,
    state::{HttpSettings, HttpState},
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

    let blobs = FilesystemBlobStore::new(config.media_root(), config.media_public_url());
    blobs.ensure_root().await?;

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        products: Arc::new(PostgresProductRepository::new(pool.clone())),
        reviews: Arc::new(PostgresReviewRepository::new(pool)),
        carts: Arc::new(InMemoryCartStore::with_limits(CartLimits {
            idle_ttl: config.cart_idle_ttl(),
            max_carts: config.cart_max(),
        })),
        blobs: Arc::new(blobs),
        clock: Arc::new(SystemClock),
        upload_max_bytes: config.upload_max_bytes(),
    }));

    if let Err(err) = services.catalog_feed.refresh().await {
        tracing::warn!(error = %err, "initial catalog load failed; storefront will retry on demand");
    }

    let hero = Arc::new(SlideRotationController::start(
        SlideDeck::storefront(),
        CarouselTiming {
            autoplay_interval: config.hero_autoplay(),
            transition: config.hero_transition(),
        },
    )?);

    if config.admin_api_token().is_none() {
        tracing::warn!("ADMIN_API_TOKEN is not set; admin routes are open");
    }
    if config.maintenance_mode() {
        tracing::warn!("maintenance mode is on; storefront routes answer 503");
    }

    let state = HttpState {
        services,
        hero: Arc::clone(&hero),
        settings: Arc::new(HttpSettings::from_config(&config)),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    hero.shutdown();
    Ok(())
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
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
