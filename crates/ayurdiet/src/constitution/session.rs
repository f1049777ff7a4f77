use super::classifier::{classify, ClassifierError};
use super::domain::ConstitutionProfile;
use super::questions::{QuestionBank, QuizQuestion};

/// Answers captured one question at a time.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    bank: &'a QuestionBank,
    answers: Vec<usize>,
}

impl<'a> QuizSession<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            answers: Vec::with_capacity(bank.len()),
        }
    }

    /// The question awaiting an answer, or `None` once every question is answered.
    pub fn current_question(&self) -> Option<&'a QuizQuestion> {
        self.bank.get(self.answers.len())
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn answer(&mut self, index: usize) -> Result<(), ClassifierError> {
        let position = self.answers.len();
        let question = self
            .current_question()
            .ok_or(ClassifierError::AnswerCountMismatch {
                expected: self.bank.len(),
                actual: position + 1,
            })?;

        if index >= question.answers.len() {
            return Err(ClassifierError::AnswerOutOfRange {
                question: position,
                answer: index,
                available: question.answers.len(),
            });
        }

        self.answers.push(index);
        Ok(())
    }

    /// Undo the most recent answer.
    pub fn back(&mut self) -> Option<usize> {
        self.answers.pop()
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.bank.len()
    }

    pub fn progress_percent(&self) -> u8 {
        if self.bank.is_empty() {
            return 100;
        }
        ((self.answers.len() * 100) / self.bank.len()) as u8
    }

    pub fn finish(&self) -> Result<ConstitutionProfile, ClassifierError> {
        classify(&self.answers, self.bank.questions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constitution::domain::Dosha;

    #[test]
    fn session_walks_the_bank_in_order() {
        let bank = QuestionBank::standard();
        let mut session = QuizSession::new(&bank);

        assert_eq!(
            session.current_question().map(|question| question.category),
            Some("Body Type")
        );
        session.answer(2).expect("valid answer");
        assert_eq!(
            session.current_question().map(|question| question.category),
            Some("Digestion")
        );
        assert_eq!(session.progress_percent(), 16);

        for _ in 0..5 {
            session.answer(2).expect("valid answer");
        }
        assert!(session.is_complete());
        assert!(session.current_question().is_none());

        let profile = session.finish().expect("complete session classifies");
        assert_eq!(profile.primary, Dosha::Kapha);
    }

    #[test]
    fn session_rejects_answers_past_the_end() {
        let bank = QuestionBank::standard();
        let mut session = QuizSession::new(&bank);
        for _ in 0..6 {
            session.answer(0).expect("valid answer");
        }

        assert!(matches!(
            session.answer(0),
            Err(ClassifierError::AnswerCountMismatch { .. })
        ));
    }

    #[test]
    fn back_and_reset_rewind_progress() {
        let bank = QuestionBank::standard();
        let mut session = QuizSession::new(&bank);
        session.answer(1).expect("valid answer");
        session.answer(0).expect("valid answer");

        assert_eq!(session.back(), Some(0));
        assert_eq!(session.answers(), &[1]);

        session.reset();
        assert!(session.answers().is_empty());
        assert!(matches!(
            session.finish(),
            Err(ClassifierError::AnswerCountMismatch { .. })
        ));
    }

    #[test]
    fn invalid_index_leaves_session_untouched() {
        let bank = QuestionBank::standard();
        let mut session = QuizSession::new(&bank);

        assert!(session.answer(7).is_err());
        assert!(session.answers().is_empty());
    }
}
