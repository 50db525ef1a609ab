mod config;
mod generator;
mod routes;
mod state;

use config::ProviderKind;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Provider init is non-fatal: a broken Anthropic setup degrades to the
    // mock provider so the app stays usable.
    let generator = match config.provider {
        ProviderKind::Mock => generator::Generator::mock(),
        ProviderKind::Anthropic => {
            let api_key = config.api_key.clone().unwrap_or_default();
            match generator::Generator::anthropic(api_key, config.model.clone()) {
                Ok(g) => {
                    tracing::info!(model = %config.model, "anthropic provider initialized");
                    g
                }
                Err(e) => {
                    tracing::warn!(error = %e, "anthropic provider unavailable, using mock");
                    generator::Generator::mock()
                }
            }
        }
    };
    tracing::info!(provider = generator.provider_name(), "content generator ready");

    let state = state::AppState::new(generator);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "content-studio listening");
    axum::serve(listener, app).await.expect("server failed");
}
