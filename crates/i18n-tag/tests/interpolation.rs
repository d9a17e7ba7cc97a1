//! Integration tests for placeholder parsing and substitution.

use i18n_tag::interpolation::{
    InterpolationError, Segment, parse_template, parse_template_lossy, render,
};
use i18n_tag::{Params, Value, params};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_pure_literal() {
    let t = parse_template("Hello, world!").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("Hello, world!".into())]);
    assert!(t.is_literal());
}

#[test]
fn test_empty_string() {
    let t = parse_template("").unwrap();
    assert_eq!(t.segments, vec![]);
}

#[test]
fn test_placeholder_between_literals() {
    let t = parse_template("Hello {{name}}!").unwrap();
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("Hello ".into()),
            Segment::Placeholder {
                path: "name".into(),
                raw: false,
            },
            Segment::Literal("!".into()),
        ]
    );
}

#[test]
fn test_placeholder_whitespace_is_ignored() {
    let t = parse_template("{{  name }}").unwrap();
    assert_eq!(
        t.segments,
        vec![Segment::Placeholder {
            path: "name".into(),
            raw: false,
        }]
    );
}

#[test]
fn test_raw_placeholder() {
    let t = parse_template("{{- html}}").unwrap();
    assert_eq!(
        t.segments,
        vec![Segment::Placeholder {
            path: "html".into(),
            raw: true,
        }]
    );
}

#[test]
fn test_placeholders_in_order() {
    let t = parse_template("{{a}} and {{b.c}}").unwrap();
    assert_eq!(t.placeholders().collect::<Vec<_>>(), vec!["a", "b.c"]);
}

#[test]
fn test_single_braces_are_literal() {
    let t = parse_template("{x} }").unwrap();
    assert_eq!(t.segments, vec![Segment::Literal("{x} }".into())]);
}

#[test]
fn test_unterminated_placeholder_is_error() {
    let err = parse_template("Hello {{name").unwrap_err();
    let InterpolationError::Syntax { line, .. } = err;
    assert_eq!(line, 1);
}

#[test]
fn test_empty_placeholder_is_error() {
    assert!(parse_template("{{ }}").is_err());
}

#[test]
fn test_placeholder_names_are_free_form() {
    let t = parse_template("{{user-name}} {{ count, number }} {{-$raw value}}").unwrap();
    assert_eq!(
        t.placeholders().collect::<Vec<_>>(),
        vec!["user-name", "count", "$raw value"]
    );
}

#[test]
fn test_lossy_parse_keeps_malformed_piece_literal() {
    let t = parse_template_lossy("{{a}} {{ }} {{b");
    assert_eq!(
        t.segments,
        vec![
            Segment::Placeholder {
                path: "a".into(),
                raw: false
            },
            Segment::Literal(" {{ }} {{b".into()),
        ]
    );
}

#[test]
fn test_error_reports_line() {
    let err = parse_template("first\nsecond {{oops").unwrap_err();
    let InterpolationError::Syntax { line, .. } = err;
    assert_eq!(line, 2);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_substitutes_every_placeholder() {
    let t = parse_template("{{greeting}}, {{name}}! {{name}}?").unwrap();
    let p = params! { "greeting" => "Hi", "name" => "Ada" };
    assert_eq!(render(&t, &p, true), "Hi, Ada! Ada?");
}

#[test]
fn test_numbers_render_as_text() {
    let t = parse_template("{{count}} items").unwrap();
    assert_eq!(render(&t, &params! { "count" => 3 }, true), "3 items");
}

#[test]
fn test_missing_parameter_renders_empty() {
    let t = parse_template("Hello {{name}}!").unwrap();
    assert_eq!(render(&t, &Params::new(), true), "Hello !");
}

#[test]
fn test_escaping_respects_raw_marker() {
    let t = parse_template("{{v}} {{- v}}").unwrap();
    let p = params! { "v" => "<b>" };
    assert_eq!(render(&t, &p, true), "&lt;b&gt; <b>");
    assert_eq!(render(&t, &p, false), "<b> <b>");
}

#[test]
fn test_json_parameters_resolve_nested_paths() {
    let json: serde_json::Value = serde_json::json!({ "user": { "name": "Ada" } });
    let p = Value::from(json).into_params();
    let t = parse_template("Hi {{user.name}}").unwrap();
    assert_eq!(render(&t, &p, true), "Hi Ada");
}
