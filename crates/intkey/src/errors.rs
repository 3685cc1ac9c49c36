#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FixtureError {
    #[error("A pre-generated key stream must hold at least one key")]
    EmptyStream,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Unknown key space {0:?}; expected 20, 250, small, or large")]
    UnknownKeySpace(String),

    #[error("Unknown key mode {0:?}; expected stream or inline")]
    UnknownKeyMode(String),

    #[error("Unknown strategy {0:?}")]
    UnknownStrategy(String),

    #[error("repeats must be at least 1")]
    ZeroRepeats,

    #[error("stream_len must be at least 1")]
    ZeroStreamLen,

    #[error("Could not parse {var}={value:?} as an iteration count")]
    BadEnvOverride { var: &'static str, value: String },

    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Fixture error: {}", _0)]
    Fixture(#[from] FixtureError),

    #[error("Config error: {}", _0)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
