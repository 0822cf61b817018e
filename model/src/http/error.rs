#[derive(thiserror::Error, Debug)]
pub enum HttpError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Discord returned {status}: {message}")]
    Api { status: u16, message: String },
}
