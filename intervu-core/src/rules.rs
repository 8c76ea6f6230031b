use crate::config::{Difficulty, Duration, InterviewConfig, InterviewType};
use serde::Serialize;
use std::fmt;

/// One-line user-facing notice emitted when a dependency rule adjusts the
/// configuration.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Notice {
    SystemDesignRequiresSenior,
    MixedRequiresThirtyMinutes,
    ExpertReviewRequiresThirtyMinutes,
    ExpertReviewRequiresMidLevel,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::SystemDesignRequiresSenior => {
                "System Design is available for Senior and Lead only"
            }
            Notice::MixedRequiresThirtyMinutes => "Mixed interviews require at least 30 minutes",
            Notice::ExpertReviewRequiresThirtyMinutes => {
                "Expert Review requires at least 30 minutes"
            }
            Notice::ExpertReviewRequiresMidLevel => "Expert Review available for Mid level and above",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Apply the four dependency rules once, in fixed order, returning the
/// adjusted configuration and the notices for display.
///
/// Each rule is an independent predicate; a rule whose governing fields are
/// unset does not fire. A single pass reaches a fixed point (the only field
/// one rule writes and another reads is duration, which is only ever raised),
/// so re-running on the output performs no further mutation.
pub fn normalize(mut config: InterviewConfig) -> (InterviewConfig, Vec<Notice>) {
    let mut notices = Vec::new();

    // System Design is restricted to Senior and Lead.
    if config.interview_type == Some(InterviewType::SystemDesign)
        && matches!(config.difficulty, Some(Difficulty::Junior) | Some(Difficulty::Mid))
    {
        config.interview_type = None;
        notices.push(Notice::SystemDesignRequiresSenior);
    }

    // Mixed interviews need at least 30 minutes.
    if config.interview_type == Some(InterviewType::Mixed)
        && config.duration == Some(Duration::Min15)
    {
        config.duration = Some(Duration::Min30);
        notices.push(Notice::MixedRequiresThirtyMinutes);
    }

    // Expert Review needs at least 30 minutes.
    if config.add_ons.expert_review && config.duration == Some(Duration::Min15) {
        config.add_ons.expert_review = false;
        notices.push(Notice::ExpertReviewRequiresThirtyMinutes);
    }

    // Expert Review is not offered at Junior level.
    if config.add_ons.expert_review && config.difficulty == Some(Difficulty::Junior) {
        config.add_ons.expert_review = false;
        notices.push(Notice::ExpertReviewRequiresMidLevel);
    }

    for notice in &notices {
        tracing::debug!(%notice, "configuration adjusted");
    }

    (config, notices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> InterviewConfig {
        InterviewConfig::new()
    }

    #[test]
    fn system_design_cleared_for_junior() {
        let mut config = base_config();
        config.interview_type = Some(InterviewType::SystemDesign);
        config.difficulty = Some(Difficulty::Junior);

        let (config, notices) = normalize(config);
        assert_eq!(config.interview_type, None);
        assert_eq!(notices, vec![Notice::SystemDesignRequiresSenior]);
    }

    #[test]
    fn system_design_kept_for_senior() {
        let mut config = base_config();
        config.interview_type = Some(InterviewType::SystemDesign);
        config.difficulty = Some(Difficulty::Senior);

        let (config, notices) = normalize(config);
        assert_eq!(config.interview_type, Some(InterviewType::SystemDesign));
        assert!(notices.is_empty());
    }

    #[test]
    fn mixed_raises_duration_to_thirty() {
        let mut config = base_config();
        config.interview_type = Some(InterviewType::Mixed);
        config.duration = Some(Duration::Min15);

        let (config, notices) = normalize(config);
        assert_eq!(config.duration, Some(Duration::Min30));
        assert_eq!(notices, vec![Notice::MixedRequiresThirtyMinutes]);
    }

    #[test]
    fn expert_review_cleared_for_short_session() {
        let mut config = base_config();
        config.duration = Some(Duration::Min15);
        config.add_ons.expert_review = true;

        let (config, notices) = normalize(config);
        assert!(!config.add_ons.expert_review);
        assert_eq!(notices, vec![Notice::ExpertReviewRequiresThirtyMinutes]);
    }

    #[test]
    fn expert_review_cleared_for_junior() {
        let mut config = base_config();
        config.difficulty = Some(Difficulty::Junior);
        config.duration = Some(Duration::Min45);
        config.add_ons.expert_review = true;

        let (config, notices) = normalize(config);
        assert!(!config.add_ons.expert_review);
        assert_eq!(notices, vec![Notice::ExpertReviewRequiresMidLevel]);
    }

    #[test]
    fn expert_review_not_cleared_twice() {
        // Junior and 15 minutes both violate, but the flag can only be
        // cleared once so only the first rule's notice is emitted.
        let mut config = base_config();
        config.difficulty = Some(Difficulty::Junior);
        config.duration = Some(Duration::Min15);
        config.add_ons.expert_review = true;

        let (config, notices) = normalize(config);
        assert!(!config.add_ons.expert_review);
        assert_eq!(notices, vec![Notice::ExpertReviewRequiresThirtyMinutes]);
    }

    #[test]
    fn rules_fire_without_unrelated_fields_set() {
        // Only duration and the flag are set; the rule still applies.
        let mut config = base_config();
        config.duration = Some(Duration::Min15);
        config.add_ons.expert_review = true;

        let (config, _) = normalize(config);
        assert!(!config.add_ons.expert_review);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut config = base_config();
        config.interview_type = Some(InterviewType::Mixed);
        config.difficulty = Some(Difficulty::Junior);
        config.duration = Some(Duration::Min15);
        config.add_ons.expert_review = true;

        let (once, first_notices) = normalize(config);
        assert!(!first_notices.is_empty());

        let (twice, second_notices) = normalize(once.clone());
        assert_eq!(once, twice);
        assert!(second_notices.is_empty());
    }

    #[test]
    fn valid_configuration_is_untouched() {
        let mut config = base_config();
        config.interview_type = Some(InterviewType::Technical);
        config.difficulty = Some(Difficulty::Mid);
        config.duration = Some(Duration::Min45);
        config.add_ons.expert_review = true;

        let (normalized, notices) = normalize(config.clone());
        assert_eq!(normalized, config);
        assert!(notices.is_empty());
    }
}
