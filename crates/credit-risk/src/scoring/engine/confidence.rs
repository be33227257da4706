use super::model::ConfidenceParams;
use super::ratios::round_to;

/// Heuristic decisiveness: grows with the distance from the neutral midpoint.
pub(crate) fn estimate(score: u8, params: &ConfidenceParams) -> f64 {
    let distance = (f64::from(score) - params.midpoint).abs() / params.midpoint;
    let raw = params.base + params.spread * distance;
    round_to(raw.clamp(params.floor, params.ceiling), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::engine::ScoringModel;

    #[test]
    fn midpoint_is_least_confident() {
        let params = ScoringModel::standard().confidence;
        assert_eq!(estimate(50, &params), 0.75);
    }

    #[test]
    fn extremes_are_most_confident() {
        let params = ScoringModel::standard().confidence;
        assert_eq!(estimate(100, &params), 0.9);
        assert_eq!(estimate(0, &params), 0.9);
    }

    #[test]
    fn intermediate_scores_round_to_two_places() {
        let params = ScoringModel::standard().confidence;
        assert_eq!(estimate(70, &params), 0.81);
        assert_eq!(estimate(33, &params), 0.8);
        assert_eq!(estimate(61, &params), 0.78);
    }

    #[test]
    fn results_stay_within_bounds() {
        let params = ScoringModel::standard().confidence;
        for score in 0..=100u8 {
            let confidence = estimate(score, &params);
            assert!((0.5..=0.99).contains(&confidence), "{score} -> {confidence}");
        }
    }
}
