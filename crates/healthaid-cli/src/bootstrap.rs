use anyhow::Context;
use healthaid_config::HealthaidConfig;

/// Load `.env`, then every configuration layer.
pub fn load_config() -> anyhow::Result<HealthaidConfig> {
    let config =
        HealthaidConfig::load_with_dotenv().context("failed to load healthaid configuration")?;
    tracing::debug!(
        identity = %config.session.identity(),
        viewport_width = config.shell.viewport_width,
        "configuration loaded"
    );
    Ok(config)
}
