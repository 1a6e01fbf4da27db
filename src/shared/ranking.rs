use crate::shared::types::CropRecommendation;

pub const TOP_RECOMMENDATIONS: usize = 3;
pub const MIN_CONFIDENCE: f64 = 0.1;

/// Orders recommendations for display: highest confidence first, entries at
/// or below `min_confidence` dropped, at most `limit` kept. Ties keep their
/// input order. NaN confidences never pass the threshold.
pub fn rank_recommendations(
    mut recs: Vec<CropRecommendation>,
    limit: usize,
    min_confidence: f64,
) -> Vec<CropRecommendation> {
    recs.retain(|r| r.confidence > min_confidence);
    recs.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    recs.truncate(limit);
    recs
}

pub fn top_recommendations(recs: Vec<CropRecommendation>) -> Vec<CropRecommendation> {
    rank_recommendations(recs, TOP_RECOMMENDATIONS, MIN_CONFIDENCE)
}
