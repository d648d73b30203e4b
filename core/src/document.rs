use serde::{Deserialize, Serialize};
use std::fmt;

pub type DocId = i32;

/// Two relevance values closer than this are considered equal.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Active,
    Irrelevant,
    Banned,
    Removed,
}

/// A ranked search hit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocId, relevance: f64, rating: i32) -> Self {
        Self { id, relevance, rating }
    }
}

/// Sort hits for output: higher relevance first, with relevances within
/// `RELEVANCE_EPSILON` of the first hit of their run ordered by rating, then id.
///
/// Both passes compare with a total order, so any input sorts without panicking.
pub fn sort_by_rank(docs: &mut [Document]) {
    docs.sort_by(|a, b| b.relevance.total_cmp(&a.relevance).then(a.id.cmp(&b.id)));
    let mut start = 0;
    while start < docs.len() {
        let anchor = docs[start].relevance;
        let len = docs[start..]
            .iter()
            .take_while(|doc| anchor - doc.relevance < RELEVANCE_EPSILON)
            .count();
        docs[start..start + len].sort_by(|a, b| b.rating.cmp(&a.rating).then(a.id.cmp(&b.id)));
        start += len;
    }
}

/// Relevance is compared within `RELEVANCE_EPSILON`.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.rating == other.rating
            && (self.relevance - other.relevance).abs() < RELEVANCE_EPSILON
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Mean rating, truncated toward zero; zero for no ratings.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_truncates_toward_zero() {
        assert_eq!(average_rating(&[]), 0);
        assert_eq!(average_rating(&[8, -3]), 2);
        assert_eq!(average_rating(&[7, 2, 7]), 5);
        assert_eq!(average_rating(&[5, -12, 2, 1]), -1);
        assert_eq!(average_rating(&[-1, 1, 3, 5]), 2);
    }

    fn ids(docs: &[Document]) -> Vec<DocId> {
        docs.iter().map(|d| d.id).collect()
    }

    #[test]
    fn rank_prefers_relevance_then_rating() {
        let mut docs = vec![
            Document::new(2, 0.2, 9),
            Document::new(1, 0.5, 1),
            Document::new(3, 0.5 + 1e-8, 7),
            Document::new(4, 0.5, 7),
        ];
        sort_by_rank(&mut docs);
        assert_eq!(ids(&docs), vec![3, 4, 1, 2]);
    }

    #[test]
    fn rank_survives_chains_of_near_ties() {
        // neighbours differ by less than the epsilon, the ends by far more
        let mut docs: Vec<Document> = (0..200)
            .map(|i| Document::new(i, 1.0 + f64::from(i) * 4e-7, (i * 7919) % 101))
            .collect();
        sort_by_rank(&mut docs);

        assert_eq!(docs.len(), 200);
        for pair in docs.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.relevance + RELEVANCE_EPSILON > b.relevance);
        }
        // highest relevance run leads; its best rating comes first
        assert!(docs[0].relevance > 1.0 + 190.0 * 4e-7);
        let mut again = docs.clone();
        again.reverse();
        sort_by_rank(&mut again);
        assert_eq!(ids(&again), ids(&docs));
    }

    #[test]
    fn equality_tolerates_float_noise() {
        assert_eq!(Document::new(1, 0.1 + 0.2, 3), Document::new(1, 0.3, 3));
        assert_ne!(Document::new(1, 0.3, 3), Document::new(1, 0.31, 3));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentStatus::Banned).unwrap();
        assert_eq!(json, "\"banned\"");
    }
}
