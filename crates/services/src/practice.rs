//! Practice session composition.
//!
//! Builds a personalized question mix: roughly 70% from the caller's weak
//! topics and 30% from the rest of the bank, shuffled, with shortfalls in
//! either pool filled from the other so the session size is preserved
//! whenever the bank is large enough.

use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use trainer_core::model::{Question, TopicName};

use crate::bank::QuestionBank;

/// Share of a practice session drawn from weak topics.
pub const WEAK_SHARE: f64 = 0.70;

/// Selection result for a practice session build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticePlan {
    pub questions: Vec<Question>,
    pub weak_selected: usize,
    pub other_selected: usize,
}

impl PracticePlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when no questions were selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    fn empty() -> Self {
        Self {
            questions: Vec::new(),
            weak_selected: 0,
            other_selected: 0,
        }
    }
}

/// Builds practice sessions weighted toward weak topics.
pub struct PracticeComposer<'a> {
    bank: &'a QuestionBank,
}

impl<'a> PracticeComposer<'a> {
    #[must_use]
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Compose a practice session of up to `n` questions.
    ///
    /// - The weak pool gets `round(0.70 * n)` slots (at least one when the
    ///   pool is non-empty), the complement pool the rest.
    /// - A pool smaller than its quota hands the shortfall to the other
    ///   pool, so the total stays at `n` whenever the bank allows it.
    /// - An empty weak set degrades to a uniform mix over the whole bank.
    /// - `n` larger than the bank returns the whole bank. An empty bank
    ///   returns an empty plan.
    ///
    /// Questions are sampled without replacement; the final order is
    /// shuffled.
    #[must_use]
    pub fn compose(&self, weak: &[TopicName], n: usize) -> PracticePlan {
        self.compose_with_rng(weak, n, &mut rng())
    }

    /// Same as `compose`, with an explicit RNG for deterministic tests.
    #[must_use]
    pub fn compose_with_rng<R: Rng + ?Sized>(
        &self,
        weak: &[TopicName],
        n: usize,
        rng: &mut R,
    ) -> PracticePlan {
        let n = n.min(self.bank.len());
        if n == 0 {
            return PracticePlan::empty();
        }

        let weak_set: HashSet<&TopicName> = weak.iter().collect();
        let (mut weak_pool, mut other_pool): (Vec<Question>, Vec<Question>) = self
            .bank
            .questions()
            .iter()
            .cloned()
            .partition(|q| weak_set.contains(q.topic()));

        weak_pool.shuffle(rng);
        other_pool.shuffle(rng);

        let quota = if weak_pool.is_empty() {
            0
        } else {
            weak_quota(n)
        };

        let mut selected = Vec::with_capacity(n);

        let take_weak = quota.min(weak_pool.len());
        selected.extend(weak_pool.drain(..take_weak));
        let mut weak_selected = take_weak;

        let take_other = (n - selected.len()).min(other_pool.len());
        selected.extend(other_pool.drain(..take_other));
        let other_selected = take_other;

        // Other pool exhausted: top up from the weak remainder.
        if selected.len() < n {
            let top_up = (n - selected.len()).min(weak_pool.len());
            selected.extend(weak_pool.drain(..top_up));
            weak_selected += top_up;
        }

        selected.shuffle(rng);

        PracticePlan {
            questions: selected,
            weak_selected,
            other_selected,
        }
    }
}

/// Weak-topic slot count for a session of size `n`: `round(0.70 * n)`,
/// clamped to `[1, n]` so a non-empty weak pool always contributes.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn weak_quota(n: usize) -> usize {
    let scaled = (WEAK_SHARE * n as f64).round();
    (scaled as usize).clamp(1, n)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
