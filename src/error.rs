//! Error types for the character store and bulletin.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Character not found: {0}")]
    CharacterNotFound(String),

    #[error("News not found: {0}")]
    NewsNotFound(String),

    #[error("Interview not found: {0}")]
    InterviewNotFound(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Interview {id} is {from}, cannot become {to}")]
    InvalidTransition {
        id: String,
        from: &'static str,
        to: &'static str,
    },

    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
