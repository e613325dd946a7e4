use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::error::DashboardError;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DatasetSettings {
    pub rows: usize,
    pub start_date: NaiveDate,
    pub base_sales: i64,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            rows: 1000,
            start_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default(),
            base_sales: 150,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub title: String,
}

/// Load settings from defaults, then `config/dashboard.*` if present, then
/// `DASHBOARD__*` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    build_config(
        config::File::with_name("config/dashboard").required(false),
        config::Environment::with_prefix("DASHBOARD")
            .separator("__")
            .try_parsing(true),
    )
}

fn build_config<F, E>(file: F, env: E) -> anyhow::Result<DashboardConfig>
where
    F: config::Source + Send + Sync + 'static,
    E: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8050)?
        .set_default("dataset.rows", 1000)?
        .set_default("dataset.start_date", "2021-01-01")?
        .set_default("dataset.base_sales", 150)?
        .set_default("dashboard.title", "Advanced Sales Dashboard")?
        .add_source(file)
        .add_source(env)
        .build()?;

    let config: DashboardConfig = settings.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &DashboardConfig) -> Result<(), DashboardError> {
    if config.dataset.rows == 0 {
        return Err(DashboardError::InvalidConfig(
            "dataset.rows must be at least 1".to_string(),
        ));
    }
    if config.server.host.trim().is_empty() {
        return Err(DashboardError::InvalidConfig(
            "server.host must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Environment, File, FileFormat};

    fn no_env() -> Environment {
        Environment::with_prefix("DASHBOARD_TEST_UNSET").separator("__")
    }

    #[test]
    fn test_defaults() {
        let config = build_config(File::from_str("", FileFormat::Toml), no_env()).unwrap();

        assert_eq!(config.server.address(), "127.0.0.1:8050");
        assert_eq!(config.dataset, DatasetSettings::default());
        assert_eq!(config.dashboard.title, "Advanced Sales Dashboard");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = File::from_str(
            r#"
            [server]
            port = 9000

            [dataset]
            rows = 8
            start_date = "2022-03-01"
            "#,
            FileFormat::Toml,
        );
        let config = build_config(file, no_env()).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.dataset.rows, 8);
        assert_eq!(config.dataset.start_date, NaiveDate::from_ymd_opt(2022, 3, 1).unwrap());
        assert_eq!(config.dataset.base_sales, 150);
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut vars = config::Map::new();
        vars.insert("DASHBOARD__SERVER__PORT".to_string(), "9100".to_string());
        let env = Environment::with_prefix("DASHBOARD")
            .separator("__")
            .try_parsing(true)
            .source(Some(vars));
        let file = File::from_str("[server]\nport = 9000\n", FileFormat::Toml);

        let config = build_config(file, env).unwrap();
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn test_rejects_zero_rows() {
        let file = File::from_str("[dataset]\nrows = 0\n", FileFormat::Toml);
        assert!(build_config(file, no_env()).is_err());
    }

    #[test]
    fn test_rejects_bad_start_date() {
        let file = File::from_str("[dataset]\nstart_date = \"01/01/2021\"\n", FileFormat::Toml);
        assert!(build_config(file, no_env()).is_err());
    }
}
