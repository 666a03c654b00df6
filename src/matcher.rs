//! Chord Matcher
//!
//! Enumerates every (template, root) pair whose full pitch-class
//! coverage lies inside a target set. Matches are ephemeral: produced
//! fresh for each search call and discarded with it.

use crate::pitch::{NoteName, PitchClass, PitchClassSet, SEMITONES};
use crate::vocabulary::{ChordTemplate, Vocabulary};
use std::fmt::Display;

/// A chord template anchored at a root, known to lie inside the target
/// set it was matched against.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChordMatch<'v> {
    template: &'v ChordTemplate,
    root: PitchClass,
    notes: PitchClassSet,
}

impl<'v> ChordMatch<'v> {
    /// The matched template.
    pub fn template(&self) -> &'v ChordTemplate {
        self.template
    }

    /// The root pitch class the template is anchored to.
    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// The pitch classes this match sounds, precomputed at match time.
    pub fn pitch_classes(&self) -> PitchClassSet {
        self.notes
    }
}

impl Display for ChordMatch<'_> {
    /// Root spelling (sharp-based) followed by the template's symbol,
    /// e.g. `"Cm"`, `"F♯7"`, `"B°"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            NoteName::from_pitch_class(self.root).label(),
            self.template.symbol()
        )
    }
}

/// Enumerate every match of `vocabulary` against `target`: templates in
/// registration order, roots ascending from 0 to 11.
///
/// A pair matches when every `normalize(root + offset)` over the
/// template's intervals is a member of `target`; a bare-note template
/// therefore matches exactly the roots present in `target`. An empty
/// target or empty vocabulary yields no matches.
pub fn matches_in(target: PitchClassSet, vocabulary: &Vocabulary) -> Vec<ChordMatch<'_>> {
    let mut matches = Vec::new();

    for template in vocabulary.templates() {
        for root in 0..SEMITONES as PitchClass {
            let notes = template.pitch_classes(root);
            if notes.is_subset_of(target) {
                matches.push(ChordMatch { template, root, notes });
            }
        }
    }

    matches
}
