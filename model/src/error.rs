use crate::http::HttpError;
use crate::Snowflake;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error occurred while parsing payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload for {entity} is missing field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Neither `User` or `Member` have attribute {0}")]
    AttributeNotFound(String),

    #[error("Cannot delete emoji, no guild_id set")]
    EmojiWithoutGuild,

    #[error("No DM channel is known for user {0}")]
    DmChannelNotFound(Snowflake),

    #[error("Error occurred during HTTP request: {0}")]
    Http(#[from] HttpError),

    #[error("Error occurred while operating on cache: {0}")]
    Cache(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn missing_field(entity: &'static str, field: &'static str) -> Error {
        Error::MissingField { entity, field }
    }
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}
