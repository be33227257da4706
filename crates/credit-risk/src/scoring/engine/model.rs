use serde::{Deserialize, Serialize};

use super::super::domain::{FactorKind, Polarity};

/// Signed point contribution and polarity assigned when a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub delta: i16,
    pub polarity: Polarity,
}

impl Outcome {
    pub const fn positive(delta: i16) -> Self {
        Self {
            delta,
            polarity: Polarity::Positive,
        }
    }

    pub const fn neutral(delta: i16) -> Self {
        Self {
            delta,
            polarity: Polarity::Neutral,
        }
    }

    pub const fn negative(delta: i16) -> Self {
        Self {
            delta,
            polarity: Polarity::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandDirection {
    /// Bands are inclusive lower bounds, listed from highest to lowest.
    AtLeast,
    /// Bands are inclusive upper bounds, listed from lowest to highest.
    AtMost,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub threshold: f64,
    pub outcome: Outcome,
}

/// Ordered threshold bands for a numeric factor. The first matching band wins and
/// `otherwise` covers whatever the bands leave out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    pub direction: BandDirection,
    pub bands: Vec<Band>,
    pub otherwise: Outcome,
}

impl BandTable {
    pub fn at_least(bands: &[(f64, Outcome)], otherwise: Outcome) -> Self {
        Self::build(BandDirection::AtLeast, bands, otherwise)
    }

    pub fn at_most(bands: &[(f64, Outcome)], otherwise: Outcome) -> Self {
        Self::build(BandDirection::AtMost, bands, otherwise)
    }

    fn build(direction: BandDirection, bands: &[(f64, Outcome)], otherwise: Outcome) -> Self {
        Self {
            direction,
            bands: bands
                .iter()
                .map(|&(threshold, outcome)| Band { threshold, outcome })
                .collect(),
            otherwise,
        }
    }

    pub fn evaluate(&self, value: f64) -> Outcome {
        self.bands
            .iter()
            .find(|band| match self.direction {
                BandDirection::AtLeast => value >= band.threshold,
                BandDirection::AtMost => value <= band.threshold,
            })
            .map(|band| band.outcome)
            .unwrap_or(self.otherwise)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentWeights {
    pub employed: Outcome,
    pub self_employed: Outcome,
    pub retired: Outcome,
    pub unemployed: Outcome,
    pub unrecognized: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationWeights {
    pub graduate: Outcome,
    pub postgraduate: Outcome,
    pub undergraduate: Outcome,
    pub other: Outcome,
    pub unrecognized: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAreaWeights {
    pub urban: Outcome,
    pub semiurban: Outcome,
    pub rural: Outcome,
    pub unrecognized: Outcome,
}

/// Lower bounds of the approve and review bands; anything below review declines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBands {
    pub low_risk_floor: u8,
    pub medium_risk_floor: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceParams {
    pub base: f64,
    pub spread: f64,
    pub midpoint: f64,
    pub floor: f64,
    pub ceiling: f64,
}

/// Human-readable key factor strings for one factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorHeadline {
    pub factor: FactorKind,
    pub positive: Option<String>,
    pub negative: Option<String>,
}

/// Immutable rubric: weights, bands, and wording. Owned by the engine and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringModel {
    pub base_score: i16,
    pub score_floor: i16,
    pub score_ceiling: i16,
    pub income: BandTable,
    pub debt_to_income: BandTable,
    pub loan_to_income: BandTable,
    pub credit_history: BandTable,
    pub employment: EmploymentWeights,
    pub education: EducationWeights,
    pub property_area: PropertyAreaWeights,
    pub dependents: BandTable,
    pub loan_term: BandTable,
    pub risk_bands: RiskBands,
    pub confidence: ConfidenceParams,
    pub max_key_factors: usize,
    pub headlines: Vec<FactorHeadline>,
}

impl ScoringModel {
    pub fn standard() -> Self {
        Self {
            base_score: 50,
            score_floor: 0,
            score_ceiling: 100,
            income: BandTable::at_least(
                &[
                    (100_000.0, Outcome::positive(20)),
                    (75_000.0, Outcome::positive(15)),
                    (50_000.0, Outcome::positive(10)),
                    (30_000.0, Outcome::neutral(5)),
                ],
                Outcome::negative(-10),
            ),
            debt_to_income: BandTable::at_most(
                &[
                    (20.0, Outcome::positive(15)),
                    (36.0, Outcome::neutral(5)),
                    (43.0, Outcome::negative(-5)),
                ],
                Outcome::negative(-15),
            ),
            loan_to_income: BandTable::at_most(
                &[
                    (2.0, Outcome::positive(15)),
                    (3.5, Outcome::neutral(5)),
                    (5.0, Outcome::negative(-5)),
                ],
                Outcome::negative(-15),
            ),
            credit_history: BandTable::at_least(
                &[
                    (60.0, Outcome::positive(10)),
                    (36.0, Outcome::neutral(5)),
                    (12.0, Outcome::neutral(0)),
                ],
                Outcome::negative(-10),
            ),
            employment: EmploymentWeights {
                employed: Outcome::positive(10),
                self_employed: Outcome::positive(10),
                retired: Outcome::neutral(0),
                unemployed: Outcome::negative(-10),
                unrecognized: Outcome::neutral(0),
            },
            education: EducationWeights {
                graduate: Outcome::positive(5),
                postgraduate: Outcome::positive(5),
                undergraduate: Outcome::neutral(0),
                other: Outcome::neutral(0),
                unrecognized: Outcome::neutral(0),
            },
            property_area: PropertyAreaWeights {
                urban: Outcome::positive(5),
                semiurban: Outcome::neutral(0),
                rural: Outcome::negative(-5),
                unrecognized: Outcome::neutral(0),
            },
            dependents: BandTable::at_most(
                &[(1.0, Outcome::positive(5)), (3.0, Outcome::neutral(0))],
                Outcome::negative(-5),
            ),
            loan_term: BandTable::at_most(
                &[(180.0, Outcome::positive(5)), (360.0, Outcome::neutral(0))],
                Outcome::negative(-5),
            ),
            risk_bands: RiskBands {
                low_risk_floor: 70,
                medium_risk_floor: 50,
            },
            confidence: ConfidenceParams {
                base: 0.75,
                spread: 0.15,
                midpoint: 50.0,
                floor: 0.50,
                ceiling: 0.99,
            },
            max_key_factors: 3,
            headlines: standard_headlines(),
        }
    }

    pub fn headline(&self, factor: FactorKind, polarity: Polarity) -> Option<&str> {
        let entry = self.headlines.iter().find(|entry| entry.factor == factor)?;
        match polarity {
            Polarity::Positive => entry.positive.as_deref(),
            Polarity::Negative => entry.negative.as_deref(),
            Polarity::Neutral => None,
        }
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_headlines() -> Vec<FactorHeadline> {
    let entry = |factor, positive: &str, negative: Option<&str>| FactorHeadline {
        factor,
        positive: Some(positive.to_string()),
        negative: negative.map(str::to_string),
    };

    vec![
        entry(
            FactorKind::Income,
            "Strong income level",
            Some("Low income level"),
        ),
        entry(
            FactorKind::DebtToIncome,
            "Low debt-to-income ratio",
            Some("High debt-to-income ratio"),
        ),
        entry(
            FactorKind::LoanToIncome,
            "Reasonable loan amount",
            Some("Large loan relative to income"),
        ),
        entry(
            FactorKind::CreditHistory,
            "Established credit history",
            Some("Limited credit history"),
        ),
        entry(
            FactorKind::Employment,
            "Stable employment",
            Some("Unstable employment"),
        ),
        entry(FactorKind::Education, "Higher education", None),
        entry(
            FactorKind::PropertyArea,
            "Urban property location",
            Some("Rural property location"),
        ),
        entry(
            FactorKind::Dependents,
            "Few financial dependents",
            Some("Many financial dependents"),
        ),
        entry(
            FactorKind::LoanTerm,
            "Short loan term",
            Some("Extended loan term"),
        ),
    ]
}
