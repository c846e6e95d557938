use thiserror::Error;

pub type Result<T> = std::result::Result<T, HintError>;

#[derive(Debug, Error)]
pub enum HintError {
    #[error("Actor {0} has no backing window")]
    UnresolvedActor(String),
    #[error("Window {0} is not managed")]
    NotManaged(String),
}
