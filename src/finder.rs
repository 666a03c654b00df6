//! Combo Search
//!
//! Bounded depth-first enumeration of chord-shape combinations that
//! exactly reproduce a target pitch-class set.
//!
//! A combo is recorded when it is *sufficient* (its pooled coverage
//! equals the whole target set) and *necessary* (every member owns at
//! least one pitch class no other member covers). The search grows a
//! partial combo only while it is still insufficient: a sufficient combo
//! is a leaf of the search tree whether or not it turns out to be
//! necessary, and combos above the size cap are never constructed. Each
//! extension appends candidates at strictly increasing positions in the
//! match list, so every unordered subset is visited exactly once.

use crate::matcher::{matches_in, ChordMatch};
use crate::pitch::{PitchClassSet, SEMITONES};
use crate::vocabulary::Vocabulary;
use log::debug;
use smallvec::SmallVec;

/// Default cap on the number of chord shapes in one combo.
pub const DEFAULT_MAX_CHORDS: usize = 3;

/// An ordered selection of chord matches proposed as one way to produce
/// a target set. Never longer than the finder's cap.
pub type Combo<'v> = SmallVec<[ChordMatch<'v>; DEFAULT_MAX_CHORDS]>;

/// Per-pitch-class hit counts for a partial combo.
type CoverageTally = [u8; SEMITONES];

/// Builder for [`ComboFinder`] to customize the combo size cap.
pub struct ComboFinderBuilder {
    max_chords: usize,
}

impl ComboFinderBuilder {
    /// Create a new builder with the default cap of 3.
    pub fn new() -> Self {
        ComboFinderBuilder { max_chords: DEFAULT_MAX_CHORDS }
    }

    /// Set the maximum number of chord shapes per combo.
    pub fn max_chords(mut self, cap: usize) -> Self {
        self.max_chords = cap;
        self
    }

    /// Build the [`ComboFinder`].
    pub fn build(self) -> ComboFinder {
        ComboFinder { max_chords: self.max_chords }
    }
}

impl Default for ComboFinderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The combo search engine.
///
/// Stateless between calls: each search is an independent, deterministic
/// computation over the target set and the vocabulary it is given.
pub struct ComboFinder {
    max_chords: usize,
}

impl ComboFinder {
    /// Return a builder to customize the combo size cap.
    pub fn builder() -> ComboFinderBuilder {
        ComboFinderBuilder::new()
    }

    /// Create a finder with the default cap of 3.
    pub fn new() -> Self {
        ComboFinderBuilder::new().build()
    }

    /// The configured combo size cap.
    pub fn max_chords(&self) -> usize {
        self.max_chords
    }

    /// Find every valid combo covering `target`, sorted by ascending
    /// combo size; combos of equal size keep discovery order (templates
    /// in registration order, roots ascending, shorter prefixes first).
    ///
    /// An empty target, an empty vocabulary, or a target no combination
    /// of templates reproduces all yield an empty list. An empty result
    /// is a normal outcome, not an error.
    pub fn find_combos<'v>(
        &self,
        target: PitchClassSet,
        vocabulary: &'v Vocabulary,
    ) -> Vec<Combo<'v>> {
        let candidates = matches_in(target, vocabulary);
        debug!(
            "matched {} candidate chord shapes against {} target pitch classes",
            candidates.len(),
            target.len()
        );

        let mut results = Vec::new();
        if candidates.is_empty() {
            return results;
        }

        let mut combo = Combo::new();
        let mut tally = [0u8; SEMITONES];
        self.extend(&candidates, 0, target.len(), &mut combo, &mut tally, &mut results);

        // Stable: equal-size combos retain discovery order.
        results.sort_by_key(|combo| combo.len());

        debug!("found {} valid combos", results.len());
        results
    }

    /// Grow `combo` with candidates at positions `next..`, recording it
    /// first if it is sufficient and necessary.
    fn extend<'v>(
        &self,
        candidates: &[ChordMatch<'v>],
        next: usize,
        target_len: usize,
        combo: &mut Combo<'v>,
        tally: &mut CoverageTally,
        results: &mut Vec<Combo<'v>>,
    ) {
        let distinct = tally.iter().filter(|&&hits| hits > 0).count();

        if distinct == target_len {
            // Sufficient combos are leaves, valid or not.
            if !combo.is_empty() && is_necessary(combo, tally) {
                results.push(combo.clone());
            }
            return;
        }

        if combo.len() == self.max_chords {
            return;
        }

        for i in next..candidates.len() {
            let candidate = candidates[i];

            combo.push(candidate);
            for pc in candidate.pitch_classes().iter() {
                tally[pc as usize] += 1;
            }

            self.extend(candidates, i + 1, target_len, combo, tally, results);

            for pc in candidate.pitch_classes().iter() {
                tally[pc as usize] -= 1;
            }
            combo.pop();
        }
    }
}

impl Default for ComboFinder {
    fn default() -> Self {
        ComboFinder::new()
    }
}

/// Whether every match in `combo` covers at least one pitch class hit
/// exactly once across the whole combo. The inner scan stops at the
/// first uniquely-owned pitch class per match.
fn is_necessary(combo: &[ChordMatch<'_>], tally: &CoverageTally) -> bool {
    combo
        .iter()
        .all(|m| m.pitch_classes().iter().any(|pc| tally[pc as usize] == 1))
}

/// Find every valid combo covering `target` with a default-configured
/// [`ComboFinder`].
pub fn find_combos(target: PitchClassSet, vocabulary: &Vocabulary) -> Vec<Combo<'_>> {
    ComboFinder::new().find_combos(target, vocabulary)
}
