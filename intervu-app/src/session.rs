use intervu_catalog::calculate_total;
use intervu_core::{
    normalize, AddOn, ConfigError, Difficulty, Duration, InterviewConfig, InterviewType, Notice,
};
use intervu_order::CheckoutSession;
use intervu_questions::TrackingSink;
use intervu_store::{SessionStore, StoreError};
use std::sync::Arc;

/// Cache key for the in-progress configuration, kept identical to the
/// original client's storage key.
pub const CONFIG_KEY: &str = "interviewConfig";

/// One client session: owns the in-progress configuration, restores it from
/// the expiring cache at startup, and persists it after every mutation.
/// Every mutator runs the dependency rules and hands the resulting notices
/// back for display.
pub struct Session {
    config: InterviewConfig,
    store: SessionStore,
    selected_question: Option<String>,
}

impl Session {
    /// Start a session, restoring the cached configuration if it is still
    /// fresh. An unreadable cache entry is discarded rather than surfaced.
    pub fn new(mut store: SessionStore) -> Self {
        let config = match store.get::<InterviewConfig>(CONFIG_KEY) {
            Ok(Some(config)) => config,
            Ok(None) => InterviewConfig::new(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable cached configuration");
                store.remove(CONFIG_KEY);
                InterviewConfig::new()
            }
        };
        Self {
            config,
            store,
            selected_question: None,
        }
    }

    pub fn config(&self) -> &InterviewConfig {
        &self.config
    }

    pub fn selected_question(&self) -> Option<&str> {
        self.selected_question.as_deref()
    }

    /// Whether an interview type is currently selectable. System Design is
    /// greyed out while the difficulty sits at Junior or Mid.
    pub fn interview_type_allowed(&self, interview_type: InterviewType) -> bool {
        interview_type != InterviewType::SystemDesign
            || !matches!(
                self.config.difficulty,
                Some(Difficulty::Junior) | Some(Difficulty::Mid)
            )
    }

    /// Whether an add-on is currently selectable. Expert Review is greyed
    /// out for 15-minute sessions and at Junior level.
    pub fn add_on_allowed(&self, add_on: AddOn) -> bool {
        add_on != AddOn::ExpertReview
            || (self.config.duration != Some(Duration::Min15)
                && self.config.difficulty != Some(Difficulty::Junior))
    }

    pub fn set_interview_type(
        &mut self,
        interview_type: Option<InterviewType>,
    ) -> Result<Vec<Notice>, SessionError> {
        if let Some(chosen) = interview_type {
            if !self.interview_type_allowed(chosen) {
                return Err(SessionError::OptionUnavailable(
                    Notice::SystemDesignRequiresSenior,
                ));
            }
        }
        self.config.interview_type = interview_type;
        self.commit()
    }

    pub fn set_difficulty(
        &mut self,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<Notice>, SessionError> {
        self.config.difficulty = difficulty;
        self.commit()
    }

    pub fn set_duration(
        &mut self,
        duration: Option<Duration>,
    ) -> Result<Vec<Notice>, SessionError> {
        self.config.duration = duration;
        self.commit()
    }

    /// Flip an add-on. Enabling one that is currently unavailable is
    /// rejected at the selection surface rather than silently reverted.
    pub fn toggle_add_on(&mut self, add_on: AddOn) -> Result<Vec<Notice>, SessionError> {
        let enabling = !self.config.add_ons.is_enabled(add_on);
        if enabling && !self.add_on_allowed(add_on) {
            let notice = if self.config.duration == Some(Duration::Min15) {
                Notice::ExpertReviewRequiresThirtyMinutes
            } else {
                Notice::ExpertReviewRequiresMidLevel
            };
            return Err(SessionError::OptionUnavailable(notice));
        }
        self.config.add_ons.set(add_on, enabling);
        self.commit()
    }

    pub fn add_topic(&mut self, topic: &str) -> Result<(), SessionError> {
        self.config.add_topic(topic)?;
        self.persist()
    }

    pub fn remove_topic(&mut self, topic: &str) -> Result<bool, SessionError> {
        let removed = self.config.remove_topic(topic);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Discard the configuration and its cache entry.
    pub fn reset(&mut self) {
        self.config = InterviewConfig::new();
        self.store.remove(CONFIG_KEY);
    }

    /// Displayed price in cents; zero until both duration and difficulty
    /// are chosen.
    pub fn price_cents(&self) -> i32 {
        match (self.config.duration, self.config.difficulty) {
            (Some(duration), Some(difficulty)) => {
                calculate_total(duration, difficulty, &self.config.add_ons)
            }
            _ => 0,
        }
    }

    /// Freeze the configuration into a checkout. The checkout never writes
    /// back into the session.
    pub fn begin_checkout(&self) -> CheckoutSession {
        CheckoutSession::new(self.config.clone(), self.price_cents())
    }

    /// Record a question selection and fire the tracking call without
    /// waiting for it. A tracking failure is logged and never surfaces.
    pub fn select_question(&mut self, question_id: &str, tracker: &Arc<dyn TrackingSink>) {
        self.selected_question = Some(question_id.to_string());

        let tracker = Arc::clone(tracker);
        let question_id = question_id.to_string();
        tokio::spawn(async move {
            if let Err(err) = tracker.record_selection(&question_id).await {
                tracing::warn!(%question_id, error = %err, "selection tracking failed");
            }
        });
    }

    pub fn into_store(self) -> SessionStore {
        self.store
    }

    fn commit(&mut self) -> Result<Vec<Notice>, SessionError> {
        let (config, notices) = normalize(self.config.clone());
        self.config = config;
        self.persist()?;
        Ok(notices)
    }

    fn persist(&mut self) -> Result<(), SessionError> {
        self.store.put(CONFIG_KEY, &self.config)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The chosen option is disabled in the current configuration.
    #[error("{0}")]
    OptionUnavailable(Notice),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
