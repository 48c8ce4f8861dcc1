use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn substitutes_positional_arguments() {
    let result = format_message("{0} must exceed {1}", &[&"count", &5]);
    assert_eq!(result, Ok("count must exceed 5".to_string()));
}

#[test]
fn arguments_may_repeat_and_reorder() {
    let result = format_message("{1}{0}{1}", &[&'a', &'b']);
    assert_eq!(result, Ok("bab".to_string()));
}

#[test]
fn template_without_placeholders_is_verbatim() {
    assert_eq!(format_message("plain text", &[]), Ok("plain text".to_string()));
    assert_eq!(
        format_message("plain text", &[&1, &2]),
        Ok("plain text".to_string())
    );
}

#[test]
fn doubled_braces_are_literal() {
    let result = format_message("{{{0}}}", &[&42]);
    assert_eq!(result, Ok("{42}".to_string()));
}

#[test]
fn positive_alignment_pads_on_the_left() {
    assert_eq!(format_message("[{0,5}]", &[&"ab"]), Ok("[   ab]".to_string()));
}

#[test]
fn negative_alignment_pads_on_the_right() {
    assert_eq!(format_message("[{0,-5}]", &[&"ab"]), Ok("[ab   ]".to_string()));
}

#[test]
fn alignment_narrower_than_text_does_not_truncate() {
    assert_eq!(format_message("{0,2}", &[&"abcdef"]), Ok("abcdef".to_string()));
}

#[test]
fn wide_integers_render_in_full() {
    let big: i64 = 0x1_0000_0000;
    assert_eq!(format_message("{0}", &[&big]), Ok("4294967296".to_string()));
}

#[test]
fn missing_argument_is_reported() {
    let result = format_message("a {1} b", &[&"only"]);
    assert_eq!(
        result,
        Err(FormatError::IndexOutOfRange {
            index: 1,
            count: 1,
            offset: 2
        })
    );
}

#[test]
fn unclosed_placeholder_is_reported() {
    assert_eq!(
        format_message("abc {0", &[&1]),
        Err(FormatError::UnclosedPlaceholder { offset: 4 })
    );
}

#[test]
fn lone_closing_brace_is_reported() {
    assert_eq!(
        format_message("abc } def", &[]),
        Err(FormatError::UnexpectedClosingBrace { offset: 4 })
    );
}

#[test]
fn non_numeric_placeholder_is_reported() {
    assert_eq!(
        format_message("{name}", &[&1]),
        Err(FormatError::InvalidPlaceholder { offset: 0 })
    );
    assert_eq!(
        format_message("{}", &[&1]),
        Err(FormatError::InvalidPlaceholder { offset: 0 })
    );
}

#[test]
fn oversized_width_is_rejected() {
    assert_eq!(
        format_message("id: {0,2147483647}", &[&7]),
        Err(FormatError::InvalidPlaceholder { offset: 4 })
    );
    assert_eq!(
        format_message("{0,-1000000}", &[&7]),
        Err(FormatError::InvalidPlaceholder { offset: 0 })
    );
    assert_eq!(format_message("{0,999999}", &[&7]).map(|s| s.len()), Ok(999_999));
}

#[test]
fn format_spec_is_reported() {
    assert_eq!(
        format_message("{0:x}", &[&255]),
        Err(FormatError::UnsupportedFormatSpec { offset: 0 })
    );
}

#[test]
fn format_error_display() {
    let err = FormatError::IndexOutOfRange {
        index: 3,
        count: 1,
        offset: 7,
    };
    assert_eq!(
        err.to_string(),
        "placeholder {3} at byte 7 has no argument (1 supplied)"
    );
    assert_eq!(
        FormatError::UnexpectedClosingBrace { offset: 2 }.to_string(),
        "unexpected '}' at byte 2"
    );
}

// Message

#[test]
fn default_message_renders_the_fallback() {
    assert_eq!(Message::Default.render("fallback"), Ok("fallback".to_string()));
}

#[test]
fn literal_message_keeps_braces() {
    let message = Message::from("use {0} literally");
    assert_eq!(message.render("x"), Ok("use {0} literally".to_string()));
}

#[test]
fn format_message_expands_arguments() {
    let message = Message::format("{0} must exceed five", &[&"count"]);
    assert_eq!(message.render("x"), Ok("count must exceed five".to_string()));
}

#[test]
fn optional_text_converts() {
    assert!(Message::from(None::<&str>).is_default());
    assert_eq!(Message::from(Some("hi")).raw(), Some("hi"));
    let owned = String::from("owned");
    assert_eq!(Message::from(&owned).raw(), Some("owned"));
}

#[test]
fn message_debug_does_not_render_arguments() {
    let message = Message::format("{0}", &[&1]);
    assert_eq!(format!("{message:?}"), "Message::Format(\"{0}\", 1 args)");
}

proptest! {
    #[test]
    fn brace_free_templates_are_returned_verbatim(template in "[^{}]{0,40}") {
        prop_assert_eq!(format_message(&template, &[&1, &"two"]), Ok(template.clone()));
    }

    #[test]
    fn formatting_is_deterministic(word in "[a-z]{0,12}", n in any::<i64>()) {
        let first = format_message("{0}:{1}", &[&word, &n]);
        let second = format_message("{0}:{1}", &[&word, &n]);
        prop_assert_eq!(first, second);
    }
}
