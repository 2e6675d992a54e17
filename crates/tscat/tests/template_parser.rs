//! Integration tests for placeholder template parsing

use tscat::parser::{Segment, parse_template};

fn literal(text: &str) -> Segment {
    Segment::Literal(text.to_string())
}

#[test]
fn test_plain_text() {
    let template = parse_template("Reboot and Update");
    assert_eq!(template.segments, vec![literal("Reboot and Update")]);
    assert!(template.argument_indices().is_empty());
    assert!(!template.uses_quantity());
}

#[test]
fn test_empty_template() {
    assert!(parse_template("").segments.is_empty());
}

#[test]
fn test_positional_arguments() {
    let template = parse_template(" Your device is pointed %1° %2 and %3° %4.");
    assert_eq!(
        template.segments,
        vec![
            literal(" Your device is pointed "),
            Segment::Argument(1),
            literal("° "),
            Segment::Argument(2),
            literal(" and "),
            Segment::Argument(3),
            literal("° "),
            Segment::Argument(4),
            literal("."),
        ]
    );
    assert_eq!(template.argument_indices(), vec![1, 2, 3, 4]);
}

#[test]
fn test_quantity_placeholder() {
    let template = parse_template("<b>%n segment(s)</b>");
    assert_eq!(
        template.segments,
        vec![literal("<b>"), Segment::Quantity, literal(" segment(s)</b>")]
    );
    assert!(template.uses_quantity());
}

#[test]
fn test_ten_is_one_followed_by_zero() {
    let template = parse_template("%10");
    assert_eq!(template.segments, vec![Segment::Argument(1), literal("0")]);
}

#[test]
fn test_stray_percent_signs_are_literal() {
    for text in ["100%", "%0", "%%", "%x", "50% off", "%N"] {
        let template = parse_template(text);
        assert_eq!(template.segments, vec![literal(text)], "input {text:?}");
    }
}

#[test]
fn test_double_percent_before_placeholder() {
    let template = parse_template("%%1");
    assert_eq!(template.segments, vec![literal("%"), Segment::Argument(1)]);
}

#[test]
fn test_repeated_and_unordered_indices() {
    let template = parse_template("%2 then %1 then %2 again");
    assert_eq!(template.argument_indices(), vec![1, 2]);
}

#[test]
fn test_markup_passes_through() {
    let text = "<span stylesheet='font-size: 60px;'>INACTIVE</span>: connect";
    assert_eq!(parse_template(text).segments, vec![literal(text)]);
}
