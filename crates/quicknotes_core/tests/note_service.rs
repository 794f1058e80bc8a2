use quicknotes_core::{
    open_store_in_memory, EditorError, JsonNoteRepository, NoteEditor, NoteRepository,
    NoteService, NoteServiceError,
};

/// Scripted stand-in for the interactive terminal editor: records the seed it
/// was given and returns a canned result.
struct ScriptedEditor {
    result: String,
    seen_seed: Option<String>,
}

impl ScriptedEditor {
    fn returning(result: &str) -> Self {
        Self {
            result: result.to_string(),
            seen_seed: None,
        }
    }
}

impl NoteEditor for ScriptedEditor {
    fn edit(&mut self, seed_text: &str) -> Result<String, EditorError> {
        self.seen_seed = Some(seed_text.to_string());
        Ok(self.result.clone())
    }
}

#[test]
fn compose_seeds_empty_and_saves_trimmed_text() {
    let mut store = open_store_in_memory();
    let repo = JsonNoteRepository::new(&mut store);
    let mut service = NoteService::new(repo, ScriptedEditor::returning("line one\nline two\n  \n"));

    let note = service.compose("Journal").unwrap();
    assert_eq!(note.title, "Journal");
    assert_eq!(note.text, "line one\nline two");

    let repo = JsonNoteRepository::new(&mut store);
    let found = repo.search_notes(Some("journal"), None).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "line one\nline two");
}

#[test]
fn compose_keeps_leading_whitespace() {
    let mut store = open_store_in_memory();
    let repo = JsonNoteRepository::new(&mut store);
    let mut service = NoteService::new(repo, ScriptedEditor::returning("  indented\n"));

    let note = service.compose("Indent").unwrap();
    assert_eq!(note.text, "  indented");
}

#[test]
fn compose_saves_empty_body_without_complaint() {
    let mut store = open_store_in_memory();
    let repo = JsonNoteRepository::new(&mut store);
    let mut service = NoteService::new(repo, ScriptedEditor::returning("   \n\n"));

    let note = service.compose("Blank").unwrap();
    assert_eq!(note.text, "");
}

#[test]
fn revise_seeds_editor_with_existing_body_and_persists_result() {
    let mut store = open_store_in_memory();
    let uid = {
        let mut repo = JsonNoteRepository::new(&mut store);
        repo.add_note("Draft", "original body").unwrap().uid
    };

    let repo = JsonNoteRepository::new(&mut store);
    let mut service = NoteService::new(repo, ScriptedEditor::returning("revised body\n"));
    let changed = service.revise(&uid).unwrap();
    assert_eq!(changed, 1);

    let repo = JsonNoteRepository::new(&mut store);
    let found = repo.search_notes(None, Some(&uid)).unwrap();
    assert_eq!(found[0].text, "revised body");
    assert!(found[0].updated.is_some());
}

#[test]
fn revise_accepts_abbreviated_uid() {
    let mut store = open_store_in_memory();
    let uid = {
        let mut repo = JsonNoteRepository::new(&mut store);
        repo.add_note("Short", "body").unwrap().uid
    };
    let short = &uid[..7];

    let repo = JsonNoteRepository::new(&mut store);
    let mut service = NoteService::new(repo, ScriptedEditor::returning("edited"));
    assert_eq!(service.revise(short).unwrap(), 1);
}

#[test]
fn revise_unknown_uid_is_not_found_and_leaves_store_untouched() {
    let mut store = open_store_in_memory();
    {
        let mut repo = JsonNoteRepository::new(&mut store);
        repo.add_note("Keep", "body").unwrap();
    }

    let repo = JsonNoteRepository::new(&mut store);
    let mut service = NoteService::new(repo, ScriptedEditor::returning("never used"));
    let err = service.revise("ffffff0").unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(_)));

    let repo = JsonNoteRepository::new(&mut store);
    let all = repo.all_notes().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].text, "body");
    assert!(all[0].updated.is_none());
}
