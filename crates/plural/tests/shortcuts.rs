//! Tests for the shortcut catalog.

use plural::{Category, WordForms, shortcut, shortcut_listing, shortcuts};

#[test]
fn catalog_has_base_and_uppercase_entries() {
    assert_eq!(shortcuts().len(), 20);
    let names: Vec<&str> = shortcuts().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "s", "S", "es", "ES", "y", "Y", "ies", "IES", "this", "THIS", "these", "THESE",
            "that", "THAT", "those", "THOSE", "is", "IS", "are", "ARE",
        ]
    );
}

#[test]
fn uppercase_entries_are_derived_from_base() {
    let y = shortcut("y").unwrap();
    let upper = shortcut("Y").unwrap();
    assert_eq!(y.forms, WordForms::new("ies", "y", "ies"));
    assert_eq!(upper.forms, WordForms::new("IES", "Y", "IES"));
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(shortcut("is").unwrap().select(Category::Plural), "are");
    assert_eq!(shortcut("IS").unwrap().select(Category::Singular), "IS");
    assert!(shortcut("Is").is_none());
    assert!(shortcut("ves").is_none());
}

#[test]
fn iterator_restarts() {
    let first: Vec<_> = shortcuts().collect();
    let second: Vec<_> = shortcuts().collect();
    assert_eq!(first, second);
}

#[test]
fn entry_display() {
    assert_eq!(shortcut("s").unwrap().to_string(), "[s: s, , s]");
    assert_eq!(
        shortcut("THOSE").unwrap().to_string(),
        "[THOSE: THOSE, THAT, THOSE]"
    );
}

#[test]
fn listing() {
    insta::assert_snapshot!(shortcut_listing(), @r"
    Available shortcuts: [shortcut: null, singular, plural]
    [s: s, , s]
    [S: S, , S]
    [es: es, , es]
    [ES: ES, , ES]
    [y: ies, y, ies]
    [Y: IES, Y, IES]
    [ies: ies, y, ies]
    [IES: IES, Y, IES]
    [this: these, this, these]
    [THIS: THESE, THIS, THESE]
    [these: these, this, these]
    [THESE: THESE, THIS, THESE]
    [that: those, that, those]
    [THAT: THOSE, THAT, THOSE]
    [those: those, that, those]
    [THOSE: THOSE, THAT, THOSE]
    [is: are, is, are]
    [IS: ARE, IS, ARE]
    [are: are, is, are]
    [ARE: ARE, IS, ARE]
    ");
}
