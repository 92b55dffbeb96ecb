use std::sync::Arc;

use anyhow::Context;

use gatehouse_api::{app, config::Settings, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("invalid configuration")?;
    gatehouse_observability::init(settings.log_format);

    let store = match &settings.users_file {
        Some(path) => seed::load_users_file(path)?,
        None => {
            tracing::warn!("USERS_FILE not set; seeding demo user 'johndoe'");
            seed::demo_store()?
        }
    };
    tracing::info!(
        users = store.len(),
        algorithm = %settings.auth.algorithm,
        ttl_minutes = settings.auth.access_token_ttl.num_minutes(),
        "credential store seeded"
    );

    let app = app::build_app(&settings, Arc::new(store)).context("failed to build app")?;

    let listener = tokio::net::TcpListener::bind(settings.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr()))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
