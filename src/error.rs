use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("${0} is not a Hong Kong banknote denomination")]
    UnknownDenomination(u32),

    #[error("embedded content could not be decoded: {0}")]
    ContentDecode(#[from] serde_json::Error),

    #[error("link `{name}` must use https, got {url}")]
    InsecureLink { name: String, url: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
