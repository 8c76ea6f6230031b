use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Embedded practice-question dataset, loaded wholesale at startup.
const QUESTION_DATA: &str = include_str!("../data/question_bank.json");

/// One practice question record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub topic: String,
    pub score: i32,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl Question {
    /// Tags joined for list display.
    pub fn tag_line(&self) -> String {
        self.tags.join(", ")
    }

    pub fn formatted_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Conjunctive filter criteria for the question list
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    /// Case-insensitive substring match on the title
    pub search: Option<String>,
    /// Exact match
    pub difficulty: Option<String>,
    /// Exact match
    pub topic: Option<String>,
}

impl QuestionFilter {
    fn matches(&self, question: &Question) -> bool {
        if let Some(search) = &self.search {
            if !question
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(difficulty) = &self.difficulty {
            if &question.difficulty != difficulty {
                return false;
            }
        }
        if let Some(topic) = &self.topic {
            if &question.topic != topic {
                return false;
            }
        }
        true
    }
}

/// Read-only bank of practice questions
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load the embedded dataset.
    pub fn load() -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_str(QUESTION_DATA)?;
        tracing::debug!(count = questions.len(), "question bank loaded");
        Ok(Self { questions })
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions matching the filter, sorted by score descending.
    pub fn filter(&self, filter: &QuestionFilter) -> Vec<&Question> {
        let mut matched: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| filter.matches(q))
            .collect();
        matched.sort_by(|a, b| b.score.cmp(&a.score));
        matched
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("malformed question bank: {0}")]
    Malformed(#[from] serde_json::Error),
}
