use super::domain::{AssessmentError, AssessmentSettings, Pillar, UserProfile, WeightingMode};
use super::questionnaire::{Question, QuestionKind, Questionnaire};
use super::report::{MaturityCatalog, MaturityReport};
use super::responses::ResponseStore;
use super::weights::WeightVector;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Where a respondent is in the linear questionnaire flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "pillar", rename_all = "snake_case")]
pub enum AssessmentStage {
    Intro,
    PrivacyAccepted,
    UserInfoCollected,
    WeightsSet,
    PillarComplete(Pillar),
    Finished,
}

impl AssessmentStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::PrivacyAccepted => "privacy_accepted",
            Self::UserInfoCollected => "user_info_collected",
            Self::WeightsSet => "weights_set",
            Self::PillarComplete(_) => "pillar_complete",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for AssessmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PillarComplete(pillar) => write!(f, "{} complete", pillar.label()),
            other => f.write_str(other.label()),
        }
    }
}

/// One respondent's assessment. Stages only move forward:
/// intro, privacy, profile, weights (dynamic weighting only), six pillars, finished.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSession {
    settings: AssessmentSettings,
    stage: AssessmentStage,
    profile: Option<UserProfile>,
    responses: ResponseStore,
    weights: Option<WeightVector>,
}

impl AssessmentSession {
    pub fn new(settings: AssessmentSettings) -> Self {
        Self {
            settings,
            stage: AssessmentStage::Intro,
            profile: None,
            responses: ResponseStore::new(),
            weights: None,
        }
    }

    pub fn settings(&self) -> AssessmentSettings {
        self.settings
    }

    pub fn stage(&self) -> AssessmentStage {
        self.stage
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    pub fn weights(&self) -> Option<&WeightVector> {
        self.weights.as_ref()
    }

    pub fn accept_privacy(&mut self) -> Result<(), AssessmentError> {
        self.require(AssessmentStage::Intro, "accept the privacy notice")?;
        self.advance(AssessmentStage::PrivacyAccepted);
        Ok(())
    }

    pub fn submit_profile(&mut self, profile: UserProfile) -> Result<(), AssessmentError> {
        self.require(AssessmentStage::PrivacyAccepted, "submit the user profile")?;
        if let Some(field) = profile.missing_field() {
            return Err(AssessmentError::MissingProfileField(field));
        }

        self.profile = Some(profile);
        self.advance(AssessmentStage::UserInfoCollected);
        Ok(())
    }

    /// Record the six importance answers and fix the weight vector for the
    /// rest of the session. Unanswered importance questions count as 1.
    pub fn set_weights<I, K, V>(&mut self, answers: I) -> Result<&WeightVector, AssessmentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        const ACTION: &str = "set importance weights";
        if self.settings.weighting != WeightingMode::Dynamic {
            return Err(self.out_of_order(ACTION));
        }
        self.require(AssessmentStage::UserInfoCollected, ACTION)?;

        let answers = validate_section(answers, "the importance questions", |question| {
            question.kind == QuestionKind::Importance
        })?;
        let mut responses = self.responses.clone();
        for (question, option) in answers {
            responses.record(question, option)?;
        }
        let weights = WeightVector::from_ratings(responses.importance_ratings())?;

        self.responses = responses;
        self.advance(AssessmentStage::WeightsSet);
        Ok(&*self.weights.insert(weights))
    }

    /// The pillar whose answers are expected next, if any.
    pub fn next_pillar(&self) -> Option<Pillar> {
        match self.stage {
            AssessmentStage::UserInfoCollected
                if self.settings.weighting == WeightingMode::Equal =>
            {
                Some(Pillar::Governance)
            }
            AssessmentStage::WeightsSet => Some(Pillar::Governance),
            AssessmentStage::PillarComplete(pillar) => pillar.next(),
            _ => None,
        }
    }

    /// Record a pillar's answers and mark it complete. Answers are validated as
    /// a batch; nothing is stored if any id falls outside the pillar or any
    /// answer is not one of its question's options.
    pub fn submit_pillar<I, K, V>(
        &mut self,
        pillar: Pillar,
        answers: I,
    ) -> Result<AssessmentStage, AssessmentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if self.next_pillar() != Some(pillar) {
            return Err(self.out_of_order("submit pillar answers"));
        }

        let answers = validate_section(answers, pillar.label(), |question| {
            question.pillar == pillar && question.kind == QuestionKind::Maturity
        })?;
        for (question, option) in answers {
            self.responses.record(question, option)?;
        }

        let stage = match pillar.next() {
            Some(_) => AssessmentStage::PillarComplete(pillar),
            None => AssessmentStage::Finished,
        };
        self.advance(stage);
        Ok(stage)
    }

    pub fn completed_pillars(&self) -> usize {
        match self.stage {
            AssessmentStage::PillarComplete(pillar) => pillar.index() + 1,
            AssessmentStage::Finished => Pillar::COUNT,
            _ => 0,
        }
    }

    /// Share of pillars completed, truncated to a whole percent.
    pub fn progress_percent(&self) -> u8 {
        (self.completed_pillars() * 100 / Pillar::COUNT) as u8
    }

    pub fn is_finished(&self) -> bool {
        self.stage == AssessmentStage::Finished
    }

    pub fn report(&self, catalog: &MaturityCatalog) -> Result<MaturityReport, AssessmentError> {
        if !self.is_finished() {
            return Err(AssessmentError::Incomplete {
                completed: self.completed_pillars(),
            });
        }

        Ok(MaturityReport::assemble(
            self.weights.as_ref(),
            &self.responses,
            catalog,
            self.settings.pillar_basis,
        ))
    }

    fn require(&self, expected: AssessmentStage, action: &'static str) -> Result<(), AssessmentError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(self.out_of_order(action))
        }
    }

    fn out_of_order(&self, action: &'static str) -> AssessmentError {
        AssessmentError::StageOutOfOrder {
            action,
            stage: self.stage.label(),
        }
    }

    fn advance(&mut self, next: AssessmentStage) {
        debug!(from = %self.stage, to = %next, "assessment stage advanced");
        self.stage = next;
    }
}

fn validate_section<I, K, V>(
    answers: I,
    expected: &'static str,
    belongs: impl Fn(&Question) -> bool,
) -> Result<Vec<(&'static Question, &'static str)>, AssessmentError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let questionnaire = Questionnaire::standard();
    answers
        .into_iter()
        .map(|(key, answer)| {
            let key = key.as_ref();
            let question = questionnaire
                .lookup(key)
                .ok_or_else(|| AssessmentError::UnknownQuestion(key.trim().to_string()))?;
            if !belongs(question) {
                return Err(AssessmentError::QuestionOutOfSection {
                    question: question.key.to_string(),
                    expected,
                });
            }
            let option = question.matching_option(answer.as_ref()).ok_or_else(|| {
                AssessmentError::InvalidAnswer {
                    question: question.key.to_string(),
                    answer: answer.as_ref().trim().to_string(),
                }
            })?;
            Ok((question, option))
        })
        .collect()
}
