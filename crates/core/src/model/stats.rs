use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::model::attempt::Attempt;
use crate::model::topic::TopicName;

//
// ─── TOPIC STAT ────────────────────────────────────────────────────────────────
//

/// Per-topic tally of correct answers over attempts. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicStat {
    topic: TopicName,
    correct: u32,
    attempted: u32,
}

impl TopicStat {
    #[must_use]
    pub fn new(topic: TopicName) -> Self {
        Self {
            topic,
            correct: 0,
            attempted: 0,
        }
    }

    #[must_use]
    pub fn topic(&self) -> &TopicName {
        &self.topic
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    /// Fraction of correct answers, in [0, 1]. Zero attempts report 0.0.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.attempted)
    }

    /// Compares accuracies without going through floats.
    ///
    /// Uses cross-multiplication of the correct/attempted ratios, so the
    /// ordering is exact and total. Zero-attempt stats compare equal to
    /// everything here; callers break that tie on attempt counts.
    #[must_use]
    pub fn cmp_accuracy(&self, other: &Self) -> Ordering {
        let lhs = u64::from(self.correct) * u64::from(other.attempted);
        let rhs = u64::from(other.correct) * u64::from(self.attempted);
        lhs.cmp(&rhs)
    }

    fn record(&mut self, is_correct: bool) {
        self.attempted = self.attempted.saturating_add(1);
        if is_correct {
            self.correct = self.correct.saturating_add(1);
        }
    }
}

//
// ─── TOPIC STATS ───────────────────────────────────────────────────────────────
//

/// Mapping from topic to its accuracy tally.
///
/// Backed by a `BTreeMap` so iteration order (and therefore any tie-break
/// that falls through to topic names) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicStats {
    by_topic: BTreeMap<TopicName, TopicStat>,
}

impl TopicStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate attempts into per-topic stats.
    ///
    /// Pure aggregation: an empty input yields an empty mapping, and
    /// aggregating the same attempt list twice yields identical results.
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        let mut stats = Self::new();
        for attempt in attempts {
            stats.record(attempt);
        }
        stats
    }

    /// Fold a single attempt into the tallies.
    pub fn record(&mut self, attempt: &Attempt) {
        self.by_topic
            .entry(attempt.topic.clone())
            .or_insert_with(|| TopicStat::new(attempt.topic.clone()))
            .record(attempt.is_correct);
    }

    #[must_use]
    pub fn get(&self, topic: &TopicName) -> Option<&TopicStat> {
        self.by_topic.get(topic)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_topic.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_topic.is_empty()
    }

    /// Iterate stats in topic order.
    pub fn iter(&self) -> impl Iterator<Item = &TopicStat> {
        self.by_topic.values()
    }

    #[must_use]
    pub fn total_attempts(&self) -> u64 {
        self.by_topic
            .values()
            .map(|s| u64::from(s.attempted))
            .sum()
    }

    #[must_use]
    pub fn total_correct(&self) -> u64 {
        self.by_topic.values().map(|s| u64::from(s.correct)).sum()
    }

    /// Accuracy across all topics, 0.0 when nothing was attempted.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn overall_accuracy(&self) -> f64 {
        let attempted = self.total_attempts();
        if attempted == 0 {
            return 0.0;
        }
        self.total_correct() as f64 / attempted as f64
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
