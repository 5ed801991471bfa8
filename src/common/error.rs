#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Cli(#[from] clap::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),
}
