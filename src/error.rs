use thiserror::Error;

/// Failures surfaced to callers by the HTTP client wrapper.
///
/// Expected business failures (validation errors, rule rejections) are not
/// errors here: they arrive as an [`crate::envelope::ApiResponse`] with
/// `status == false`. This enum covers the cases where no envelope was
/// obtained at all, so callers can distinguish "the server said no" from
/// "the server could not be reached".
#[derive(Debug, Error)]
pub enum Error {
    /// The request never completed: connection, DNS, TLS or timeout failure.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server was reached but the body was not a response envelope.
    #[error("unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
