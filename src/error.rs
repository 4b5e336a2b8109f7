use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicflowError {
    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),
}

pub type Result<T> = std::result::Result<T, TicflowError>;
