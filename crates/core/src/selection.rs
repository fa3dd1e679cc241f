//! Weak-topic ranking over aggregated accuracy stats.

use crate::model::{TopicName, TopicStats};

/// Returns the `k` weakest topics, weakest first.
///
/// Topics are ordered ascending by accuracy; ties go to the topic with
/// fewer attempts (less data is treated as weaker, to encourage more
/// coverage), then to the lexically smaller topic name. Zero-attempt
/// stats rank as maximally weak. If fewer than `k` topics exist, all of
/// them are returned.
///
/// Deterministic given identical input: an empty mapping yields an empty
/// list, which callers treat as "no ranking signal yet".
#[must_use]
pub fn weakest_topics(stats: &TopicStats, k: usize) -> Vec<TopicName> {
    let mut ranked: Vec<_> = stats.iter().collect();
    ranked.sort_by(|a, b| {
        a.cmp_accuracy(b)
            .then_with(|| a.attempted().cmp(&b.attempted()))
            .then_with(|| a.topic().cmp(b.topic()))
    });

    ranked
        .into_iter()
        .take(k)
        .map(|stat| stat.topic().clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attempt, QuestionId, TopicStats};
    use crate::time::fixed_now;

    fn topic(name: &str) -> TopicName {
        TopicName::new(name).unwrap()
    }

    /// Builds stats where `name` has `correct` hits out of `attempted`.
    fn stats_for(records: &[(&str, u32, u32)]) -> TopicStats {
        let mut attempts = Vec::new();
        let mut id = 0;
        for &(name, correct, attempted) in records {
            for i in 0..attempted {
                id += 1;
                attempts.push(Attempt::new(
                    QuestionId::new(id),
                    topic(name),
                    i < correct,
                    fixed_now(),
                ));
            }
        }
        TopicStats::from_attempts(&attempts)
    }

    #[test]
    fn ranks_lowest_accuracy_first() {
        // A: 5/10, B: 9/10, C: 1/10 with k=2 must give [C, A].
        let stats = stats_for(&[("A", 5, 10), ("B", 9, 10), ("C", 1, 10)]);
        let weak = weakest_topics(&stats, 2);
        assert_eq!(weak, vec![topic("C"), topic("A")]);
    }

    #[test]
    fn output_size_is_min_of_k_and_topics() {
        let stats = stats_for(&[("A", 1, 2), ("B", 2, 2)]);
        assert_eq!(weakest_topics(&stats, 3).len(), 2);
        assert_eq!(weakest_topics(&stats, 1).len(), 1);
        assert_eq!(weakest_topics(&stats, 0).len(), 0);
    }

    #[test]
    fn accuracy_ties_go_to_fewer_attempts() {
        // Both at 50%, but B has less data behind it.
        let stats = stats_for(&[("A", 5, 10), ("B", 1, 2)]);
        let weak = weakest_topics(&stats, 2);
        assert_eq!(weak, vec![topic("B"), topic("A")]);
    }

    #[test]
    fn full_ties_fall_back_to_topic_name() {
        let stats = stats_for(&[("beta", 1, 2), ("alpha", 1, 2)]);
        let weak = weakest_topics(&stats, 2);
        assert_eq!(weak, vec![topic("alpha"), topic("beta")]);
    }

    #[test]
    fn empty_stats_yield_empty_ranking() {
        let stats = TopicStats::new();
        assert!(weakest_topics(&stats, 3).is_empty());
    }

    #[test]
    fn ranking_is_deterministic() {
        let stats = stats_for(&[("A", 3, 7), ("B", 2, 5), ("C", 4, 9), ("D", 0, 1)]);
        let first = weakest_topics(&stats, 3);
        let second = weakest_topics(&stats, 3);
        assert_eq!(first, second);
    }
}
