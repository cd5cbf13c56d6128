//! Environment-shaped inputs: real variables, `.env` files and explicit overrides.

use figment::Jail;
use healthaid_config::{ConfigError, HealthaidConfig};
use healthaid_core::{Identity, OrgRole};
use pretty_assertions::assert_eq;

#[test]
fn numeric_env_values_are_parsed() {
    Jail::expect_with(|jail| {
        jail.set_env("HEALTHAID_SHELL__VIEWPORT_WIDTH", "390");

        let config = HealthaidConfig::load().expect("config loads");
        assert_eq!(config.shell.viewport_width, 390);
        assert!(!config.shell.sidebar_starts_expanded());
        Ok(())
    });
}

#[test]
fn boolean_env_values_are_parsed() {
    Jail::expect_with(|jail| {
        jail.set_env("HEALTHAID_SHELL__SIDEBAR_COLLAPSED", "true");

        let config = HealthaidConfig::load().expect("config loads");
        assert!(config.shell.sidebar_collapsed);
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_the_config_without_exporting() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "HEALTHAID_GENERAL__DEFAULT_FORMAT=raw\n")?;

        let config = HealthaidConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.general.default_format, "raw");
        assert!(std::env::var_os("HEALTHAID_GENERAL__DEFAULT_FORMAT").is_none());
        Ok(())
    });
}

#[test]
fn real_environment_beats_dotenv() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".env",
            "HEALTHAID_SESSION__USER_TYPE=admin\nHEALTHAID_SHELL__VIEWPORT_WIDTH=500\n",
        )?;
        jail.set_env("HEALTHAID_SESSION__USER_TYPE", "organization");

        let config = HealthaidConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.session.identity(), Identity::organization(None));
        assert_eq!(config.shell.viewport_width, 500);
        Ok(())
    });
}

#[test]
fn dotenv_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".healthaid").map_err(|e| e.to_string())?;
        jail.create_file(".healthaid/config.toml", "[general]\ndefault_format = \"table\"\n")?;
        jail.create_file(".env", "HEALTHAID_GENERAL__DEFAULT_FORMAT=raw\n")?;

        let config = HealthaidConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.general.default_format, "raw");
        Ok(())
    });
}

#[test]
fn none_in_the_environment_clears_the_role() {
    Jail::expect_with(|jail| {
        jail.set_env("HEALTHAID_SESSION__USER_TYPE", "organization");
        jail.set_env("HEALTHAID_SESSION__ORG_ROLE", "none");

        let config = HealthaidConfig::load().expect("config loads");
        assert_eq!(config.session.org_role, None);
        assert_eq!(config.session.identity(), Identity::organization(None));
        Ok(())
    });
}

#[test]
fn explicit_overrides_beat_the_environment() {
    Jail::expect_with(|jail| {
        jail.set_env("HEALTHAID_SESSION__USER_TYPE", "admin");

        let overrides = vec![
            ("HEALTHAID_SESSION__USER_TYPE".to_string(), "organization".to_string()),
            ("HEALTHAID_SESSION__ORG_ROLE".to_string(), "doctor".to_string()),
            ("HEALTHAID_SHELL__VIEWPORT_WIDTH".to_string(), "500".to_string()),
            ("UNRELATED_KEY".to_string(), "ignored".to_string()),
        ];
        let config = HealthaidConfig::load_with_env_overrides(&overrides).expect("config loads");

        assert_eq!(
            config.session.identity(),
            Identity::organization(Some(OrgRole::Doctor))
        );
        assert_eq!(config.shell.viewport_width, 500);
        Ok(())
    });
}

#[test]
fn overrides_are_validated() {
    Jail::expect_with(|_jail| {
        let overrides = vec![(
            "HEALTHAID_SHELL__DESKTOP_BREAKPOINT".to_string(),
            "0".to_string(),
        )];
        let result = HealthaidConfig::load_with_env_overrides(&overrides);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
