use super::domain::{ConstitutionProfile, ConstitutionScore};
use super::questions::{QuestionBank, QuizQuestion};
use tracing::debug;

/// Invalid answer sequences handed to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    #[error("expected {expected} answers, received {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },
    #[error("answer {answer} is out of range for question {question} ({available} options)")]
    AnswerOutOfRange {
        question: usize,
        answer: usize,
        available: usize,
    },
}

/// Stateless classifier over a fixed question bank.
#[derive(Debug, Clone)]
pub struct ConstitutionClassifier {
    bank: QuestionBank,
}

impl ConstitutionClassifier {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    pub fn standard() -> Self {
        Self::new(QuestionBank::standard())
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn classify(&self, answers: &[usize]) -> Result<ConstitutionProfile, ClassifierError> {
        let profile = classify(answers, self.bank.questions())?;
        debug!(
            primary = %profile.primary,
            imbalance = %profile.imbalance_level,
            "constitution classified"
        );
        Ok(profile)
    }
}

/// Sum each chosen option's points into its dosha, then rank.
pub fn classify(
    answers: &[usize],
    questions: &[QuizQuestion],
) -> Result<ConstitutionProfile, ClassifierError> {
    if answers.len() != questions.len() {
        return Err(ClassifierError::AnswerCountMismatch {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let mut scores = ConstitutionScore::default();
    let mut max_score = 0;

    for (position, (question, &answer)) in questions.iter().zip(answers).enumerate() {
        let option = question
            .answers
            .get(answer)
            .ok_or(ClassifierError::AnswerOutOfRange {
                question: position,
                answer,
                available: question.answers.len(),
            })?;
        scores.add(option.dosha, option.points);
        max_score += question
            .answers
            .iter()
            .map(|candidate| candidate.points)
            .max()
            .unwrap_or(0);
    }

    Ok(ConstitutionProfile::from_scores(scores, max_score))
}
