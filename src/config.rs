use sepep_core::LadderRules;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogFileConfig {
    pub path: String,
    pub archive_pattern: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite URL. Without one the hub keeps everything in memory.
    pub database_url: Option<String>,
    pub rules: LadderRules,
    pub log_file: Option<LogFileConfig>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = LadderRules::default();

        let log_file = var("LOG_FILE_PATH").map(|path| LogFileConfig {
            archive_pattern: var("LOG_ARCHIVE_PATTERN")
                .unwrap_or_else(|| format!("{}.{{}}.gz", path)),
            path,
        });

        Ok(ServerConfig {
            host: var("SEPEP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(var("SEPEP_HTTP_API_PORT"), "SEPEP_HTTP_API_PORT", "u16", DEFAULT_PORT)?,
            database_url: var("SEPEP_DATABASE_URL"),
            rules: LadderRules::new(
                parse_or(
                    var("SEPEP_POINTS_FOR_WIN"),
                    "SEPEP_POINTS_FOR_WIN",
                    "u32",
                    defaults.points_for_win,
                )?,
                parse_or(
                    var("SEPEP_POINTS_FOR_DRAW"),
                    "SEPEP_POINTS_FOR_DRAW",
                    "u32",
                    defaults.points_for_draw,
                )?,
            ),
            log_file,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber {
                var,
                expected,
                value,
            }),
    }
}
