use quicknotes_core::{
    open_store_in_memory, JsonNoteRepository, Note, NoteRepository, RepoError,
};

#[test]
fn add_then_search_by_title_finds_the_note() {
    let mut store = open_store_in_memory();
    let mut repo = JsonNoteRepository::new(&mut store);

    repo.add_note("Groceries", "milk, eggs").unwrap();

    let matches = repo.search_notes(Some("grocer"), None).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "milk, eggs");
    assert!(matches[0].title.to_lowercase().contains("grocer"));
}

#[test]
fn search_by_full_uid_returns_the_note() {
    let mut store = open_store_in_memory();
    let mut repo = JsonNoteRepository::new(&mut store);

    let created = repo.add_note("Target", "body").unwrap();

    let matches = repo.search_notes(None, Some(&created.uid)).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0], created);
}

#[test]
fn uid_wins_over_title_when_both_are_given() {
    let mut store = open_store_in_memory();
    let mut repo = JsonNoteRepository::new(&mut store);

    let created = repo.add_note("Alpha", "a").unwrap();
    repo.add_note("Beta", "b").unwrap();

    let matches = repo
        .search_notes(Some("Beta"), Some(&created.uid))
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Alpha");
}

#[test]
fn blank_uid_falls_back_to_title_search() {
    let mut store = open_store_in_memory();
    let mut repo = JsonNoteRepository::new(&mut store);

    repo.add_note("Fallback", "body").unwrap();

    let matches = repo.search_notes(Some("fall"), Some("  ")).unwrap();
    assert_eq!(matches.len(), 1);
}

#[test]
fn search_without_any_selector_is_an_error() {
    let mut store = open_store_in_memory();
    let mut repo = JsonNoteRepository::new(&mut store);
    repo.add_note("Anything", "body").unwrap();

    let err = repo.search_notes(None, None).unwrap_err();
    assert!(matches!(err, RepoError::MissingQuery));

    let err = repo.search_notes(Some("   "), Some("")).unwrap_err();
    assert!(matches!(err, RepoError::MissingQuery));
}

#[test]
fn search_with_unknown_title_returns_empty() {
    let mut store = open_store_in_memory();
    let mut repo = JsonNoteRepository::new(&mut store);
    repo.add_note("Groceries", "milk, eggs").unwrap();

    let matches = repo.search_notes(Some("zzz-nonexistent"), None).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn uid_prefix_collision_returns_both_notes() {
    let mut store = open_store_in_memory();
    store
        .insert(Note::with_uid("abcdef0111111111", "One", "first"))
        .unwrap();
    store
        .insert(Note::with_uid("abcdef0222222222", "Two", "second"))
        .unwrap();

    let repo = JsonNoteRepository::new(&mut store);
    let matches = repo.search_notes(None, Some("abcdef0")).unwrap();
    assert_eq!(matches.len(), 2);
}

#[test]
fn uid_prefix_collision_edits_both_notes() {
    let mut store = open_store_in_memory();
    store
        .insert(Note::with_uid("abcdef0111111111", "One", "first"))
        .unwrap();
    store
        .insert(Note::with_uid("abcdef0222222222", "Two", "second"))
        .unwrap();

    let mut repo = JsonNoteRepository::new(&mut store);
    let changed = repo.edit_note("abcdef0", "shared body").unwrap();
    assert_eq!(changed, 2);

    for note in repo.all_notes().unwrap() {
        assert_eq!(note.text, "shared body");
        assert!(note.updated.is_some());
    }
}

#[test]
fn edit_updates_text_and_stamps_updated_only() {
    let mut store = open_store_in_memory();
    let mut repo = JsonNoteRepository::new(&mut store);

    let created = repo.add_note("Stable", "before").unwrap();
    let changed = repo.edit_note(&created.uid, "after").unwrap();
    assert_eq!(changed, 1);

    let found = repo.search_notes(None, Some(&created.uid)).unwrap();
    let edited = &found[0];
    assert_eq!(edited.text, "after");
    assert_eq!(edited.uid, created.uid);
    assert_eq!(edited.title, created.title);
    assert_eq!(edited.created, created.created);
    assert!(edited.updated.as_deref().is_some_and(|s| !s.is_empty()));
}

#[test]
fn edit_with_unknown_uid_leaves_store_unchanged() {
    let mut store = open_store_in_memory();
    let mut repo = JsonNoteRepository::new(&mut store);

    let created = repo.add_note("Untouched", "body").unwrap();
    let changed = repo.edit_note("ffffffff", "never applied").unwrap();
    assert_eq!(changed, 0);

    let all = repo.all_notes().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);
}

#[test]
fn all_notes_returns_everything_in_insertion_order() {
    let mut store = open_store_in_memory();
    let mut repo = JsonNoteRepository::new(&mut store);

    repo.add_note("First", "1").unwrap();
    repo.add_note("Second", "2").unwrap();
    repo.add_note("Third", "3").unwrap();

    let all = repo.all_notes().unwrap();
    let titles: Vec<_> = all.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}
