//! Chord Vocabulary
//!
//! An immutable registry of chord templates: named interval patterns a
//! chord shape sounds when anchored at a root. Constructed once through
//! [`VocabularyBuilder`], then passed by reference into every search,
//! never looked up from shared global state.

use crate::pitch::{normalize, PitchClass, PitchClassSet};
use thiserror::Error;

/// Distinguishes full chord shapes from single-note pseudo-templates,
/// so consumers never have to compare display names.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TemplateKind {
    /// A chord quality spanning two or more pitch classes.
    Chord,
    /// A bare single note: the root alone.
    BareNote,
}

/// A named pattern of interval offsets from a root, defining a chord
/// quality (major, minor, dominant seventh, ...) or a bare note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordTemplate {
    id: String,
    name: String,
    symbol: String,
    intervals: Vec<PitchClass>,
    kind: TemplateKind,
}

impl ChordTemplate {
    /// Offsets are normalized mod 12 and deduplicated; the implicit root
    /// offset 0 is always present.
    fn new(id: &str, name: &str, symbol: &str, offsets: &[i32], kind: TemplateKind) -> Self {
        let mut offset_set: PitchClassSet = offsets.iter().copied().collect();
        offset_set.insert(0);

        ChordTemplate {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            intervals: offset_set.iter().collect(),
            kind,
        }
    }

    /// Stable registry identifier, e.g. `"maj"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name, e.g. `"Major chord"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short suffix used when labeling a rooted chord, e.g. `"m"`.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Interval offsets from the root: sorted, unique mod 12, and always
    /// starting with 0.
    pub fn intervals(&self) -> &[PitchClass] {
        &self.intervals
    }

    /// Whether this template is a full chord or a bare note.
    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// The pitch classes this template sounds when anchored at `root`.
    pub fn pitch_classes(&self, root: PitchClass) -> PitchClassSet {
        let mut notes = PitchClassSet::empty();
        for &offset in &self.intervals {
            notes.insert(normalize(root as i32 + offset as i32));
        }
        notes
    }
}

/// Errors when constructing a [`Vocabulary`].
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// Two templates were registered under the same identifier.
    #[error("template id `{0}` is already registered")]
    DuplicateId(String),
}

/// Builder for a [`Vocabulary`].
pub struct VocabularyBuilder {
    templates: Vec<ChordTemplate>,
}

impl VocabularyBuilder {
    /// Start with an empty registry.
    pub fn new() -> Self {
        VocabularyBuilder { templates: Vec::new() }
    }

    /// Register a chord template. `offsets` lists the non-root intervals;
    /// the root offset 0 is implied. Offsets that collapse onto 0 after
    /// normalization leave a template that behaves as a bare note when
    /// matched, which is well-formed.
    pub fn chord(mut self, id: &str, name: &str, symbol: &str, offsets: &[i32]) -> Self {
        self.templates
            .push(ChordTemplate::new(id, name, symbol, offsets, TemplateKind::Chord));
        self
    }

    /// Register a single-note pseudo-template covering only its root.
    pub fn bare_note(mut self, id: &str, name: &str) -> Self {
        self.templates
            .push(ChordTemplate::new(id, name, "", &[], TemplateKind::BareNote));
        self
    }

    /// Finalize the registry.
    ///
    /// Returns `Err(VocabularyError::DuplicateId)` if two templates share
    /// an id. An empty vocabulary is valid and simply never matches.
    pub fn build(self) -> Result<Vocabulary, VocabularyError> {
        for (i, template) in self.templates.iter().enumerate() {
            if self.templates[..i].iter().any(|t| t.id == template.id) {
                return Err(VocabularyError::DuplicateId(template.id.clone()));
            }
        }
        Ok(Vocabulary { templates: self.templates })
    }
}

impl Default for VocabularyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable chord-template registry, iterated in registration order.
///
/// Read-only after construction; share it freely (by reference) across
/// concurrent searches.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    templates: Vec<ChordTemplate>,
}

impl Vocabulary {
    /// Start customizing with a builder.
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::new()
    }

    /// The standard vocabulary: a bare note plus the four chord shapes
    /// found on a Stradella bass board.
    pub fn standard() -> Vocabulary {
        Vocabulary {
            templates: vec![
                ChordTemplate::new("note", "Note", "", &[], TemplateKind::BareNote),
                ChordTemplate::new("maj", "Major chord", "", &[4, 7], TemplateKind::Chord),
                ChordTemplate::new("min", "Minor chord", "m", &[3, 7], TemplateKind::Chord),
                ChordTemplate::new("7th", "Dominant 7th chord", "7", &[4, 10], TemplateKind::Chord),
                ChordTemplate::new("dim", "Diminished chord", "°", &[3, 6], TemplateKind::Chord),
            ],
        }
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&ChordTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Iterate templates in registration order.
    pub fn templates(&self) -> impl Iterator<Item = &ChordTemplate> {
        self.templates.iter()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
