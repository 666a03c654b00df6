//! Tests for pitch-class arithmetic, vocabulary construction, and match
//! labeling.

use chord_finder::{
    matches_in, normalize, NoteName, PitchClassSet, TemplateKind, Vocabulary, VocabularyError,
};

fn set(semitones: &[i32]) -> PitchClassSet {
    semitones.iter().copied().collect()
}

#[test]
fn normalize_is_total_and_periodic() {
    for semitone in -1000..1000 {
        assert!(normalize(semitone) < 12);
        assert_eq!(normalize(semitone), normalize(semitone + 12));
    }
}

#[test]
fn normalize_maps_known_values() {
    assert_eq!(normalize(0), 0);
    assert_eq!(normalize(12), 0);
    assert_eq!(normalize(-12), 0);
    assert_eq!(normalize(-1), 11);
    assert_eq!(normalize(13), 1);
}

#[test]
fn pitch_class_set_operations() {
    let mut a = PitchClassSet::empty();
    assert!(a.is_empty());

    a.insert(0);
    a.insert(7);
    a.insert(19); // wraps onto 7
    assert_eq!(a.len(), 2);
    assert!(a.contains(7));
    assert!(!a.contains(4));

    let b = set(&[0, 4, 7]);
    assert!(a.is_subset_of(b));
    assert!(!b.is_subset_of(a));
    assert!(PitchClassSet::empty().is_subset_of(a));

    assert_eq!(a.union(b), b);
    assert_eq!(b.iter().collect::<Vec<_>>(), vec![0, 4, 7]);

    // FromIterator normalizes out-of-range semitones.
    assert_eq!(set(&[-1, 23]), set(&[11]));
}

#[test]
fn duplicate_template_id_is_rejected() {
    let err = Vocabulary::builder()
        .chord("maj", "Major chord", "", &[4, 7])
        .chord("maj", "Another major", "", &[4, 7])
        .build()
        .unwrap_err();

    assert!(matches!(err, VocabularyError::DuplicateId(id) if id == "maj"));
}

#[test]
fn intervals_are_canonicalized() {
    let vocabulary = Vocabulary::builder()
        .chord("x", "X", "", &[16, 7, 4, -8])
        .build()
        .unwrap();

    // 16 and -8 both land on 4; the implicit root offset is prepended.
    let template = vocabulary.get("x").unwrap();
    assert_eq!(template.intervals(), &[0, 4, 7]);
}

#[test]
fn degenerate_chord_template_behaves_as_a_single_note() {
    let vocabulary = Vocabulary::builder()
        .chord("z", "Z", "", &[12, -12, 0])
        .build()
        .unwrap();

    let template = vocabulary.get("z").unwrap();
    assert_eq!(template.intervals(), &[0]);
    assert_eq!(template.kind(), TemplateKind::Chord);

    // It matches exactly the roots present in the target.
    let matches = matches_in(set(&[5]), &vocabulary);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].root(), 5);
}

#[test]
fn standard_vocabulary_contents() {
    let vocabulary = Vocabulary::standard();
    assert_eq!(vocabulary.len(), 5);

    let ids: Vec<_> = vocabulary.templates().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["note", "maj", "min", "7th", "dim"]);

    let note = vocabulary.get("note").unwrap();
    assert_eq!(note.kind(), TemplateKind::BareNote);
    assert_eq!(note.intervals(), &[0]);

    assert_eq!(vocabulary.get("maj").unwrap().intervals(), &[0, 4, 7]);
    assert_eq!(vocabulary.get("min").unwrap().intervals(), &[0, 3, 7]);
    assert_eq!(vocabulary.get("7th").unwrap().intervals(), &[0, 4, 10]);
    assert_eq!(vocabulary.get("dim").unwrap().intervals(), &[0, 3, 6]);

    assert_eq!(vocabulary.get("min").unwrap().symbol(), "m");
    assert!(vocabulary.get("maj").unwrap().symbol().is_empty());
}

#[test]
fn note_name_spellings() {
    assert_eq!(NoteName::from_pitch_class(0), NoteName::C);
    assert_eq!(NoteName::from_pitch_class(1).label(), "C♯");
    assert_eq!(NoteName::from_pitch_class(1).flat_label(), "D♭");
    assert_eq!(NoteName::from_pitch_class(5).flat_label(), "F");
    assert_eq!(NoteName::from_pitch_class(10).to_string(), "A♯");
}

#[test]
fn match_labels_combine_root_spelling_and_symbol() {
    let vocabulary = Vocabulary::standard();

    let matches = matches_in(set(&[0, 3, 7]), &vocabulary);
    let minor = matches
        .iter()
        .find(|m| m.template().id() == "min")
        .unwrap();
    assert_eq!(minor.to_string(), "Cm");

    let matches = matches_in(set(&[6, 10, 1]), &vocabulary);
    let major = matches
        .iter()
        .find(|m| m.template().id() == "maj")
        .unwrap();
    assert_eq!(major.to_string(), "F♯");
    assert_eq!(major.root(), 6);
}
