use games_service::server::{config::Config, error::AppError, router, startup, state::AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if config.is_development() {
        tracing::info!("Serving OpenAPI document at {}", router::OPENAPI_PATH);
    }
    let app = router::router(AppState::new(db), config.is_development());

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
