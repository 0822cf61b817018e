pub type Result<T> = std::result::Result<T, CacheError>;

#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("Error occurred while serializing json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The requested store is disabled")]
    StoreDisabled,
}

impl<T> From<CacheError> for Result<T> {
    fn from(e: CacheError) -> Self {
        Err(e)
    }
}

impl From<CacheError> for model::Error {
    fn from(e: CacheError) -> Self {
        match e {
            CacheError::Json(e) => model::Error::Json(e),
            other => model::Error::Cache(Box::new(other)),
        }
    }
}
