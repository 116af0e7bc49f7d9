#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Invalid search phrase: {0}")]
    InvalidPhrase(String),

    #[error("Network error: {0}")]
    Network(String),
}
