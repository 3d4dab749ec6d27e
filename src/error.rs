use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Response(#[from] serde_json::Error),

    #[error("missing required environment variable {name}")]
    MissingEnv { name: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
