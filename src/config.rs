use crate::error::{BadEnvVarSnafu, ParsePortSnafu, RosterResult};
use dotenvy::var;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use std::{env::VarError, sync::Arc};

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
            server_ip: env_or("ROSTER_SERVER_IP", "127.0.0.1:8080")?,
        })
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug)]
pub struct DbConfig {
    user: String,
    password: SecretString,
    path: String,
    port: u16,
    database: String,
}

impl DbConfig {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            user: env_or("DB_USER", "root")?,
            password: SecretString::from(env_or("DB_PASSWORD", "passroot")?),
            path: env_or("DB_PATH", "127.0.0.1")?,
            port: env_or("DB_PORT", "5432")?.parse().context(ParsePortSnafu)?,
            database: env_or("DB_NAME", "student_management")?,
        })
    }

    pub fn get_db_path(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user,
            self.password.expose_secret(),
            self.path,
            self.port,
            self.database
        )
    }
}

/// Reads `name` from the environment (or `.env`), falling back to `default` only when it is unset.
fn env_or(name: &'static str, default: &str) -> RosterResult<String> {
    match var(name) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(default.to_string()),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}
