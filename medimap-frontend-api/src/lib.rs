use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod hospital;
mod util;

pub use self::hospital::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] medimap_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

/// Unwraps the `data` field of a successful response.
pub async fn into_data<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        let text = response.text().await?;
        util::decode_data(&text)
    } else {
        let status = response.status();
        let text = response.text().await?;
        Err(util::decode_error(status, &text).into())
    }
}
