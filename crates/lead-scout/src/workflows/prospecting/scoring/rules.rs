use super::super::domain::EnrichedCandidate;
use super::weights::ScoringWeights;

pub(crate) const FIT_CAP: u8 = 40;
pub(crate) const SIGNAL_CAP: u8 = 40;
pub(crate) const REACHABILITY_CAP: u8 = 20;
pub(crate) const TOTAL_CAP: u8 = 100;

const LOW_RATING_CEILING: f64 = 4.0;

fn capped(points: u16, cap: u8) -> u8 {
    points.min(u16::from(cap)) as u8
}

fn award(condition: bool, points: u8) -> u16 {
    if condition {
        u16::from(points)
    } else {
        0
    }
}

/// Ideal-customer fit: a reachable business that is still trading.
pub(crate) fn fit_score(candidate: &EnrichedCandidate, weights: &ScoringWeights) -> u8 {
    let points = award(candidate.has_website(), weights.fit_has_website)
        + award(candidate.has_phone(), weights.fit_has_phone)
        + award(candidate.is_operational(), weights.fit_operational);
    capped(points, FIT_CAP)
}

/// Buying signals. Few reviews suggest no review automation; a low but
/// nonzero rating suggests service pain.
pub(crate) fn signal_score(candidate: &EnrichedCandidate, weights: &ScoringWeights) -> u8 {
    let review_points = match candidate.review_count {
        0..=19 => weights.signal_reviews_under_20,
        20..=49 => weights.signal_reviews_under_50,
        50..=99 => weights.signal_reviews_under_100,
        _ => 0,
    };

    let low_rating = candidate
        .rating
        .is_some_and(|rating| rating > 0.0 && rating < LOW_RATING_CEILING);

    let points = u16::from(review_points)
        + award(!candidate.has_website(), weights.signal_no_website)
        + award(low_rating, weights.signal_low_rating);
    capped(points, SIGNAL_CAP)
}

pub(crate) fn reachability_score(candidate: &EnrichedCandidate, weights: &ScoringWeights) -> u8 {
    let points = award(candidate.has_phone(), weights.reach_has_phone)
        + award(candidate.has_website(), weights.reach_has_website);
    capped(points, REACHABILITY_CAP)
}

pub(crate) fn total_score(fit: u8, signal: u8, reachability: u8) -> u8 {
    capped(
        u16::from(fit) + u16::from(signal) + u16::from(reachability),
        TOTAL_CAP,
    )
}
