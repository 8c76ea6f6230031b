use serde::{Deserialize, Serialize};

/// Interview format the customer is booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InterviewType {
    Technical,
    Behavioral,
    #[serde(rename = "System Design")]
    SystemDesign,
    Mixed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Junior,
    Mid,
    Senior,
    Lead,
}

/// Session length. Serialized as the minute count (15/30/45/60) so cached
/// payloads stay compatible with the original data shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub enum Duration {
    Min15,
    Min30,
    Min45,
    Min60,
}

impl Duration {
    pub const ALL: [Duration; 4] = [
        Duration::Min15,
        Duration::Min30,
        Duration::Min45,
        Duration::Min60,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            Duration::Min15 => 15,
            Duration::Min30 => 30,
            Duration::Min45 => 45,
            Duration::Min60 => 60,
        }
    }
}

impl TryFrom<u32> for Duration {
    type Error = ConfigError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            15 => Ok(Duration::Min15),
            30 => Ok(Duration::Min30),
            45 => Ok(Duration::Min45),
            60 => Ok(Duration::Min60),
            other => Err(ConfigError::InvalidDuration(other)),
        }
    }
}

impl From<Duration> for u32 {
    fn from(duration: Duration) -> u32 {
        duration.minutes()
    }
}

/// Optional paid features attached to a booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AddOn {
    AiFollowUp,
    PerformanceReport,
    VideoRecording,
    ExpertReview,
}

impl AddOn {
    pub const ALL: [AddOn; 4] = [
        AddOn::AiFollowUp,
        AddOn::PerformanceReport,
        AddOn::VideoRecording,
        AddOn::ExpertReview,
    ];
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddOns {
    pub ai_follow_up: bool,
    pub performance_report: bool,
    pub video_recording: bool,
    pub expert_review: bool,
}

impl AddOns {
    pub fn is_enabled(&self, add_on: AddOn) -> bool {
        match add_on {
            AddOn::AiFollowUp => self.ai_follow_up,
            AddOn::PerformanceReport => self.performance_report,
            AddOn::VideoRecording => self.video_recording,
            AddOn::ExpertReview => self.expert_review,
        }
    }

    pub fn set(&mut self, add_on: AddOn, enabled: bool) {
        match add_on {
            AddOn::AiFollowUp => self.ai_follow_up = enabled,
            AddOn::PerformanceReport => self.performance_report = enabled,
            AddOn::VideoRecording => self.video_recording = enabled,
            AddOn::ExpertReview => self.expert_review = enabled,
        }
    }
}

/// Maximum number of topics per booking
pub const MAX_TOPICS: usize = 5;

/// The customer's in-progress booking parameters. Created all-unset,
/// mutated field by field, and normalized after every change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterviewConfig {
    pub interview_type: Option<InterviewType>,
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub duration: Option<Duration>,
    #[serde(default)]
    pub add_ons: AddOns,
}

impl InterviewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a topic, preserving insertion order. Blank entries, duplicates,
    /// and additions beyond the topic limit are rejected.
    pub fn add_topic(&mut self, topic: &str) -> Result<(), ConfigError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ConfigError::EmptyTopic);
        }
        if self.topics.iter().any(|t| t == topic) {
            return Err(ConfigError::DuplicateTopic(topic.to_string()));
        }
        if self.topics.len() >= MAX_TOPICS {
            return Err(ConfigError::TopicLimitReached);
        }
        self.topics.push(topic.to_string());
        Ok(())
    }

    /// Remove a topic by exact value. Returns whether anything was removed.
    pub fn remove_topic(&mut self, topic: &str) -> bool {
        let before = self.topics.len();
        self.topics.retain(|t| t != topic);
        self.topics.len() != before
    }

    /// Both fields the pricing calculator requires are present.
    pub fn is_priceable(&self) -> bool {
        self.duration.is_some() && self.difficulty.is_some()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported duration: {0} minutes")]
    InvalidDuration(u32),

    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Topic already added: {0}")]
    DuplicateTopic(String),

    #[error("A maximum of {MAX_TOPICS} topics is allowed")]
    TopicLimitReached,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_reject_duplicates_and_overflow() {
        let mut config = InterviewConfig::new();
        for topic in ["arrays", "graphs", "dp", "sql", "trees"] {
            config.add_topic(topic).unwrap();
        }
        assert_eq!(
            config.add_topic("arrays"),
            Err(ConfigError::DuplicateTopic("arrays".to_string()))
        );
        assert_eq!(config.add_topic("heaps"), Err(ConfigError::TopicLimitReached));
        assert_eq!(config.topics.len(), MAX_TOPICS);
    }

    #[test]
    fn topics_reject_blank_input() {
        let mut config = InterviewConfig::new();
        assert_eq!(config.add_topic("   "), Err(ConfigError::EmptyTopic));
        assert!(config.topics.is_empty());
    }

    #[test]
    fn remove_topic_by_value() {
        let mut config = InterviewConfig::new();
        config.add_topic("arrays").unwrap();
        assert!(config.remove_topic("arrays"));
        assert!(!config.remove_topic("arrays"));
    }

    #[test]
    fn serializes_with_original_field_names() {
        let mut config = InterviewConfig::new();
        config.interview_type = Some(InterviewType::SystemDesign);
        config.duration = Some(Duration::Min45);
        config.add_ons.ai_follow_up = true;

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["interviewType"], "System Design");
        assert_eq!(json["duration"], 45);
        assert_eq!(json["addOns"]["aiFollowUp"], true);
    }

    #[test]
    fn duration_roundtrips_through_minutes() {
        for duration in Duration::ALL {
            assert_eq!(Duration::try_from(duration.minutes()).unwrap(), duration);
        }
        assert!(Duration::try_from(20).is_err());
    }
}
