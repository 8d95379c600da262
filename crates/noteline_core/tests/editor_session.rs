use noteline_core::{
    handle_key, Bullet, EditorConfig, EditorKey, EditorSession, IndentEngine, Selection,
};

#[test]
fn tab_and_shift_tab_move_caret_with_indent() {
    let mut session = EditorSession::new("a\n b");
    session.set_selection(4, 4).unwrap();

    assert!(session.press(EditorKey::Tab).unwrap());
    assert_eq!(session.content(), "a\n  b");
    assert_eq!(session.selection(), Selection::caret(5));

    assert!(session.press(EditorKey::ShiftTab).unwrap());
    assert_eq!(session.content(), "a\nb");
    assert_eq!(session.selection(), Selection::caret(3));
}

#[test]
fn shift_tab_inside_indent_keeps_caret_on_its_line() {
    let mut session = EditorSession::new("a\n  b");
    session.set_selection(3, 3).unwrap();

    assert!(session.press(EditorKey::ShiftTab).unwrap());
    assert_eq!(session.content(), "a\nb");
    assert_eq!(session.selection(), Selection::caret(2));
}

#[test]
fn backspace_inside_indent_outdents() {
    let mut session = EditorSession::new("    x");
    session.set_selection(4, 4).unwrap();

    assert!(session.press(EditorKey::Backspace).unwrap());
    assert_eq!(session.content(), "  x");
    assert_eq!(session.selection(), Selection::caret(2));
}

#[test]
fn enter_sequence_builds_and_closes_a_list() {
    let mut session = EditorSession::new("  * one");

    assert!(session.press(EditorKey::Enter).unwrap());
    assert_eq!(session.content(), "  * one\n  * ");
    assert_eq!(session.current_line().unwrap().bullet, Bullet::Asterisk);

    // Enter on the empty bullet drops it, then outdents the bare indent.
    assert!(session.press(EditorKey::Enter).unwrap());
    assert_eq!(session.content(), "  * one\n  ");
    assert!(session.press(EditorKey::Enter).unwrap());
    assert_eq!(session.content(), "  * one\n");
    assert_eq!(session.selection(), Selection::caret(8));
}

#[test]
fn tab_over_selection_indents_every_line() {
    let mut session = EditorSession::new("one\ntwo\nthree");
    session.set_selection(1, 10).unwrap();

    assert!(session.press(EditorKey::Tab).unwrap());
    assert_eq!(session.content(), "  one\n  two\n  three");
    assert_eq!(session.selection(), Selection::new(3, 16));

    assert!(session.press(EditorKey::ShiftTab).unwrap());
    assert_eq!(session.content(), "one\ntwo\nthree");
    assert_eq!(session.selection(), Selection::new(1, 10));
}

#[test]
fn replace_content_normalizes_full_width_space() {
    let mut session = EditorSession::new("");
    session
        .replace_content("\u{3000}* x", Selection::caret(4))
        .unwrap();
    assert_eq!(session.content(), "  * x");
    assert_eq!(session.selection(), Selection::caret(5));
    assert_eq!(session.current_line().unwrap().indent_width, 2);
}

#[test]
fn replace_content_shifts_selection_ends_independently() {
    let mut session = EditorSession::new("");
    // One full-width space before the start, one between start and end,
    // one after the end.
    session
        .replace_content("\u{3000}ab\u{3000}cd\u{3000}", Selection::new(1, 5))
        .unwrap();
    assert_eq!(session.content(), "  ab  cd  ");
    assert_eq!(session.selection(), Selection::new(2, 7));
}

#[test]
fn configured_tab_width_drives_session_edits() {
    let config = EditorConfig { tab_width: 4 };
    let mut session = EditorSession::with_config("x", &config).unwrap();
    session.set_selection(0, 0).unwrap();
    assert!(session.press(EditorKey::Tab).unwrap());
    assert_eq!(session.content(), "    x");
}

#[test]
fn tags_follow_current_content() {
    let mut session = EditorSession::new("#work\nbody");
    assert_eq!(session.tags(), vec!["work".to_string()]);
    session
        .replace_content("#home\n#work\n", Selection::caret(0))
        .unwrap();
    assert_eq!(session.tags(), vec!["home".to_string(), "work".to_string()]);
}

#[test]
fn handle_key_is_pure_over_its_input() {
    let buffer = String::from("  * a");
    let edit = handle_key(
        &IndentEngine::default(),
        &buffer,
        Selection::caret(5),
        EditorKey::Enter,
    )
    .unwrap()
    .expect("enter at a caret is handled");
    assert_eq!(buffer, "  * a");
    assert_eq!(edit.updated_buffer, "  * a\n  * ");
    assert_eq!(edit.selection, Selection::caret(10));
}
