use super::domain::Dosha;
use serde::Serialize;

/// One selectable answer, tagged with the dosha it scores for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    pub dosha: Dosha,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub category: &'static str,
    pub prompt: &'static str,
    pub answers: Vec<AnswerOption>,
}

/// Ordered, validated set of quiz questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionBankError {
    #[error("question bank is empty")]
    Empty,
    #[error("question {question_id} must offer exactly one answer per dosha")]
    UnbalancedAnswers { question_id: u32 },
    #[error("question {question_id} weights its answers unequally")]
    UnequalPoints { question_id: u32 },
}

impl QuestionBank {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        for question in &questions {
            let covers_each_dosha = question.answers.len() == Dosha::ordered().len()
                && Dosha::ordered().iter().all(|dosha| {
                    question
                        .answers
                        .iter()
                        .filter(|answer| answer.dosha == *dosha)
                        .count()
                        == 1
                });
            if !covers_each_dosha {
                return Err(QuestionBankError::UnbalancedAnswers {
                    question_id: question.id,
                });
            }

            let first_points = question.answers[0].points;
            if question
                .answers
                .iter()
                .any(|answer| answer.points != first_points)
            {
                return Err(QuestionBankError::UnequalPoints {
                    question_id: question.id,
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    /// Highest score a single dosha can reach.
    pub fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .map(|question| {
                question
                    .answers
                    .iter()
                    .map(|answer| answer.points)
                    .max()
                    .unwrap_or(0)
            })
            .sum()
    }
}

fn option(text: &'static str, dosha: Dosha) -> AnswerOption {
    AnswerOption {
        text,
        dosha,
        points: 3,
    }
}

fn standard_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: 1,
            category: "Body Type",
            prompt: "What best describes your body type?",
            answers: vec![
                option("Thin, lean, or light-boned", Dosha::Vata),
                option("Moderate, muscular, well-proportioned", Dosha::Pitta),
                option("Sturdy, broad, gains weight easily", Dosha::Kapha),
            ],
        },
        QuizQuestion {
            id: 2,
            category: "Digestion",
            prompt: "How is your digestion typically?",
            answers: vec![
                option("Variable, often irregular", Dosha::Vata),
                option("Strong, fast digestion", Dosha::Pitta),
                option("Slow, heavy digestion", Dosha::Kapha),
            ],
        },
        QuizQuestion {
            id: 3,
            category: "Sleep",
            prompt: "How is your sleep pattern?",
            answers: vec![
                option("Light sleep, easily disturbed", Dosha::Vata),
                option("Moderate sleep, heat sensitive", Dosha::Pitta),
                option("Deep sleep, sleep a lot", Dosha::Kapha),
            ],
        },
        QuizQuestion {
            id: 4,
            category: "Mood",
            prompt: "What is your dominant mood/personality?",
            answers: vec![
                option("Creative, anxious, quick-changing", Dosha::Vata),
                option("Focused, ambitious, competitive", Dosha::Pitta),
                option("Calm, stable, laid-back", Dosha::Kapha),
            ],
        },
        QuizQuestion {
            id: 5,
            category: "Appetite",
            prompt: "What is your appetite level?",
            answers: vec![
                option("Variable, skips meals", Dosha::Vata),
                option("Strong, gets angry if hungry", Dosha::Pitta),
                option("Moderate, steady", Dosha::Kapha),
            ],
        },
        QuizQuestion {
            id: 6,
            category: "Temperature Preference",
            prompt: "What weather do you prefer?",
            answers: vec![
                option("Warm, avoid cold and wind", Dosha::Vata),
                option("Cool, avoid heat", Dosha::Pitta),
                option("Warm and dry, avoid damp", Dosha::Kapha),
            ],
        },
    ]
}
