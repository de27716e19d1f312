mod bank;
mod params;
mod question;
mod settings;

pub use bank::QuestionBank;
pub use params::{CATEGORY_PARAM, DIFFICULTY_PARAM, ParamsError, QuizParams};
pub use question::{Question, QuestionError};
pub use settings::{QuizSettings, SettingsError};
