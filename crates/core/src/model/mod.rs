mod catalog;
mod exam;
mod question;

pub use catalog::{CatalogError, ExamCatalog};
pub use exam::{ExamConfig, ExamConfigError};
pub use question::{
    AnswerOption, ParseAnswerOptionError, ParseQuestionNoError, QuestionNo, QuestionStatus,
};
