use super::*;
use pretty_assertions::assert_eq;

#[test]
fn line_comment_borrows() {
    let text = String::from("// trailing note");
    let comment = Comment::line(Position::new(4, 9), &text);
    assert!(matches!(comment.text, Cow::Borrowed(_)));
    assert_eq!(comment.as_str(), "// trailing note");
    assert_eq!(comment.kind, CommentKind::Line);
}

#[test]
fn block_comment_owns() {
    let comment = Comment::new(
        Position::new(1, 1),
        String::from("/* a\nb */"),
        CommentKind::Block,
    );
    assert!(matches!(comment.text, Cow::Owned(_)));
    assert!(comment.kind.is_block());
}

#[test]
fn unclosed_block_is_block() {
    assert!(CommentKind::UnclosedBlock.is_block());
    assert!(!CommentKind::Line.is_block());
}

#[test]
fn debug_shows_text_position_and_kind() {
    let comment = Comment::line(Position::new(2, 3), "// x");
    assert_eq!(format!("{comment:?}"), "\"// x\" @ 2:3 (Line)");
}
