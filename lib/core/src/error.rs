use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Entry lookup failed: {0}")]
    Lookup(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
