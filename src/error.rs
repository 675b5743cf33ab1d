use std::error::Error as E;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: {0}")]
    Error(String),
    #[error("Expected at least 3 color channels, got {0}")]
    ChannelCount(usize),
    #[error("Shape error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn new(message: &str) -> Self {
        Error::Error(message.to_string())
    }
    pub fn from_error(error: &dyn E) -> Self {
        Error::Error(error.to_string())
    }
    pub fn from_string(error: String) -> Self {
        Error::Error(error)
    }
}
