use clap::Parser;
use tracing::info;

use lumina_translate_web::config::ServerConfig;
use lumina_translate_web::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let config = ServerConfig::parse();
    let state = AppState::from_config(&config);

    info!("🌐 Starting LuminaTranslate web server");
    if let Some(translator) = &state.translator {
        info!("Translation provider: {}", translator.provider_name());
    }

    let app = router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("🚀 Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
