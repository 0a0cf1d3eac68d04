use crate::error::{BadEnvVarSnafu, ParseEnvVarSnafu, TrackerResult};
use dotenvy::var;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use std::{env::VarError, sync::Arc};

const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 15;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_ip: Arc<str>,
}

impl RuntimeConfiguration {
    pub fn new() -> TrackerResult<Self> {
        Self::from_lookup(var)
    }

    fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, dotenvy::Error>,
    ) -> TrackerResult<Self> {
        let server_ip = optional_var(&lookup, "STUDENT_TRACKER_SERVER_IP")?
            .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string());

        Ok(Self {
            db_config: Arc::new(DbConfig::from_lookup(&lookup)?),
            server_ip: server_ip.into(),
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
    max_connections: u32,
}

impl DbConfig {
    fn from_lookup(
        lookup: &impl Fn(&'static str) -> Result<String, dotenvy::Error>,
    ) -> TrackerResult<Self> {
        let get_env_var = |name| lookup(name).context(BadEnvVarSnafu { name });

        let max_connections = match optional_var(lookup, "DB_MAX_CONNECTIONS")? {
            Some(max) => max.parse().context(ParseEnvVarSnafu {
                name: "DB_MAX_CONNECTIONS",
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            user: get_env_var("DB_USER")?,
            password: SecretString::from(get_env_var("DB_PASSWORD")?),
            path: get_env_var("DB_PATH")?,
            port: get_env_var("DB_PORT")?
                .parse()
                .context(ParseEnvVarSnafu { name: "DB_PORT" })?,
            database: get_env_var("DB_NAME")?,
            max_connections,
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

    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

fn optional_var(
    lookup: &impl Fn(&'static str) -> Result<String, dotenvy::Error>,
    name: &'static str,
) -> TrackerResult<Option<String>> {
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}
