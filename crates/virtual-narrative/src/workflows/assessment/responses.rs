use super::domain::{AssessmentError, Pillar, PillarRatingBasis};
use super::extract::extract_rating;
use super::questionnaire::{Question, Questionnaire, DEFAULT_ANSWER};
use serde::Serialize;
use std::collections::BTreeMap;

/// Selected option text per question id. Missing answers read as [`DEFAULT_ANSWER`].
///
/// Only a question's own option texts are stored, so every recorded rating
/// lies in 1..=5.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseStore {
    answers: BTreeMap<&'static str, &'static str>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(question id, answer)` pairs, rejecting unknown ids
    /// and answers that are not one of the question's options.
    pub fn from_answers<I, K, V>(answers: I) -> Result<Self, AssessmentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut store = Self::new();
        for (key, answer) in answers {
            store.record_by_key(key.as_ref(), answer)?;
        }
        Ok(store)
    }

    /// Store or overwrite the answer for `question`, returning the matched option.
    pub fn record(
        &mut self,
        question: &'static Question,
        answer: impl AsRef<str>,
    ) -> Result<&'static str, AssessmentError> {
        let answer = answer.as_ref();
        let option = question
            .matching_option(answer)
            .ok_or_else(|| AssessmentError::InvalidAnswer {
                question: question.key.to_string(),
                answer: answer.trim().to_string(),
            })?;
        self.answers.insert(question.key, option);
        Ok(option)
    }

    pub fn record_by_key(
        &mut self,
        key: &str,
        answer: impl AsRef<str>,
    ) -> Result<&'static Question, AssessmentError> {
        let question = Questionnaire::standard()
            .lookup(key)
            .ok_or_else(|| AssessmentError::UnknownQuestion(key.trim().to_string()))?;
        self.record(question, answer)?;
        Ok(question)
    }

    pub fn answer(&self, key: &str) -> &str {
        self.answers.get(key).copied().unwrap_or(DEFAULT_ANSWER)
    }

    pub fn rating(&self, key: &str) -> u8 {
        extract_rating(self.answer(key))
    }

    pub fn is_answered(&self, key: &str) -> bool {
        self.answers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.answers
            .iter()
            .map(|(key, answer)| (*key, *answer))
    }

    /// Ratings of the six importance questions, in pillar order.
    pub fn importance_ratings(&self) -> [u8; Pillar::COUNT] {
        let questionnaire = Questionnaire::standard();
        Pillar::ordered().map(|pillar| {
            questionnaire
                .importance_question(pillar)
                .map(|question| self.rating(question.key))
                .unwrap_or(super::extract::FALLBACK_RATING)
        })
    }

    /// Representative rating per pillar under `basis`, in pillar order.
    pub fn pillar_ratings(&self, basis: PillarRatingBasis) -> [f64; Pillar::COUNT] {
        let questionnaire = Questionnaire::standard();
        Pillar::ordered().map(|pillar| {
            let ratings: Vec<f64> = questionnaire
                .pillar_questions(pillar)
                .iter()
                .map(|question| f64::from(self.rating(question.key)))
                .collect();

            match basis {
                PillarRatingBasis::FirstQuestion => ratings
                    .first()
                    .copied()
                    .unwrap_or(f64::from(super::extract::FALLBACK_RATING)),
                PillarRatingBasis::QuestionAverage if ratings.is_empty() => {
                    f64::from(super::extract::FALLBACK_RATING)
                }
                PillarRatingBasis::QuestionAverage => {
                    ratings.iter().sum::<f64>() / ratings.len() as f64
                }
            }
        })
    }
}
