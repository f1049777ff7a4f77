//! Quiz-driven dosha constitution scoring.

mod classifier;
pub mod domain;
mod questions;
mod session;

pub use classifier::{classify, ClassifierError, ConstitutionClassifier};
pub use domain::{
    ConstitutionProfile, ConstitutionScore, Dosha, ImbalanceLevel, ParseDoshaError,
};
pub use questions::{AnswerOption, QuestionBank, QuestionBankError, QuizQuestion};
pub use session::QuizSession;
