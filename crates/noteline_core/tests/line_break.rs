use noteline_core::{on_line_break, IndentEngine, LineBreakAction};

fn line_break(buffer: &str, cursor: usize) -> (String, usize, LineBreakAction) {
    let edit = on_line_break(&IndentEngine::default(), buffer, cursor).unwrap();
    (edit.updated_buffer, edit.cursor, edit.action)
}

#[test]
fn bulleted_line_continues_indent_and_bullet() {
    // Caret right after "* ".
    assert_eq!(
        line_break("  * item", 4),
        (
            "  * \n  * item".to_string(),
            9,
            LineBreakAction::ContinueIndentAndBullet
        )
    );
    assert_eq!(
        line_break("  * item", 8),
        (
            "  * item\n  * ".to_string(),
            13,
            LineBreakAction::ContinueIndentAndBullet
        )
    );
}

#[test]
fn bare_indented_line_outdents_instead_of_breaking() {
    assert_eq!(
        line_break("a\n  ", 4),
        ("a\n".to_string(), 2, LineBreakAction::Outdent)
    );
    assert_eq!(
        line_break("   ", 3),
        ("  ".to_string(), 2, LineBreakAction::Outdent)
    );
}

#[test]
fn empty_bullet_line_drops_bullet_instead_of_breaking() {
    assert_eq!(
        line_break("  * ", 4),
        ("  ".to_string(), 2, LineBreakAction::StripBullet)
    );
    assert_eq!(
        line_break("x\n- \ny", 4),
        ("x\n\ny".to_string(), 2, LineBreakAction::StripBullet)
    );
}

#[test]
fn caret_before_bullet_carries_indent_only() {
    assert_eq!(
        line_break("  - task", 2),
        (
            "  \n  - task".to_string(),
            5,
            LineBreakAction::ContinueIndentOnly
        )
    );
}

#[test]
fn plain_line_carries_indent() {
    assert_eq!(
        line_break("    code", 8),
        (
            "    code\n    ".to_string(),
            13,
            LineBreakAction::ContinueIndentAndBullet
        )
    );
    assert_eq!(
        line_break("plain", 2),
        (
            "pl\nain".to_string(),
            3,
            LineBreakAction::ContinueIndentAndBullet
        )
    );
}

#[test]
fn cursor_offsets_count_chars_not_bytes() {
    assert_eq!(
        line_break("・メモ", 3),
        (
            "・メモ\n・".to_string(),
            5,
            LineBreakAction::ContinueIndentAndBullet
        )
    );
}

#[test]
fn out_of_range_cursor_is_rejected() {
    assert!(on_line_break(&IndentEngine::default(), "ab", 3).is_err());
}
