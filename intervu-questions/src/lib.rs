pub mod bank;
pub mod tracking;

pub use bank::{BankError, Question, QuestionBank, QuestionFilter};
pub use tracking::{LoggingTracker, TrackingError, TrackingSink};
