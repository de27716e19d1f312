#![forbid(unsafe_code)]

pub mod bank;
pub mod repository;

pub use bank::{
    BUNDLED_BANK, QuestionSource, bundled_question_bank, load_question_bank, parse_question_bank,
};
pub use repository::{InMemorySessionStore, SessionStore, Storage, StorageError};
