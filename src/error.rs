use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Config(#[from] config::ConfigError),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
  #[error(transparent)]
  Json5(#[from] json5::Error),
  #[error("expected an array of user records")]
  UsersNotArray,
}
