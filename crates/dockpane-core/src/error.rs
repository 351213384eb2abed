use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse config: {0}")]
    ConfigParse(String),
    #[error("Invalid iframe URL: {0}")]
    InvalidUrl(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}
