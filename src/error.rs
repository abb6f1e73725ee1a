use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("provided logger doesn't implement any known logging interface")]
    Unrecognized,
    #[error("failed to install the global logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
