use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::super::domain::Polarity;
use super::model::ScoringModel;
use super::FactorResult;

/// Most influential contributors in each direction, strongest first. Lists are empty, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFactors {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

pub(crate) fn key_factors(factors: &[FactorResult], model: &ScoringModel) -> KeyFactors {
    KeyFactors {
        positive: top_headlines(factors, Polarity::Positive, model),
        negative: top_headlines(factors, Polarity::Negative, model),
    }
}

fn top_headlines(factors: &[FactorResult], polarity: Polarity, model: &ScoringModel) -> Vec<String> {
    let mut matching: Vec<&FactorResult> = factors
        .iter()
        .filter(|factor| factor.polarity == polarity)
        .collect();
    // Stable sort keeps evaluation order for equal magnitudes.
    matching.sort_by_key(|factor| Reverse(factor.delta.unsigned_abs()));

    matching
        .into_iter()
        .filter_map(|factor| model.headline(factor.factor, polarity))
        .take(model.max_key_factors)
        .map(str::to_string)
        .collect()
}
