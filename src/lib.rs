//! # chord_finder
//!
//! Combinatorial search for chord-shape combinations ("voicings") that
//! exactly reproduce a target set of pitch classes.
//!
//! Given an immutable [`Vocabulary`] of chord templates and a target
//! [`PitchClassSet`], the engine enumerates every combination of rooted
//! chord shapes whose pooled coverage equals the target exactly, with
//! every member contributing a pitch class nothing else in the
//! combination covers. Results are sorted with the fewest chord shapes
//! first. The engine is pure and synchronous: no I/O and no shared
//! mutable state, with identical output for identical input.
//!
//! ## Example
//! ```rust
//! use chord_finder::{find_combos, PitchClassSet, Vocabulary};
//!
//! let vocabulary = Vocabulary::standard();
//!
//! // C major triad: C, E, G
//! let target: PitchClassSet = [0, 4, 7].into_iter().collect();
//! let combos = find_combos(target, &vocabulary);
//!
//! // The simplest voicing is a single major chord rooted at C.
//! assert_eq!(combos[0].len(), 1);
//! assert_eq!(combos[0][0].template().id(), "maj");
//! assert_eq!(combos[0][0].root(), 0);
//! ```
//!
//! Which of the returned voicings are actually playable on a given
//! instrument is the caller's concern: filter the list against the
//! controls the instrument offers, and treat an empty list as "no known
//! combination of chord shapes reproduces this set" rather than an
//! error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Combo search engine API.
pub use finder::{find_combos, Combo, ComboFinder, ComboFinderBuilder, DEFAULT_MAX_CHORDS};

/// Template-against-target matching.
pub use matcher::{matches_in, ChordMatch};

/// Pitch-class arithmetic primitives.
pub use pitch::{normalize, NoteName, PitchClass, PitchClassSet, SEMITONES};

/// Chord template registry.
pub use vocabulary::{ChordTemplate, TemplateKind, Vocabulary, VocabularyBuilder, VocabularyError};

/// Combo search module.
pub mod finder;

/// Chord matching module.
pub mod matcher;

/// Pitch-class arithmetic module.
pub mod pitch;

/// Chord vocabulary module.
pub mod vocabulary;
