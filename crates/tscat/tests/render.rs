//! Integration tests for placeholder substitution

use tscat::parser::parse_template;
use tscat::{RenderError, render, render_lenient};
use tscat::catalog::render_template;

const NO_ARGS: &[&str] = &[];

#[test]
fn test_quantity_substitution() {
    assert_eq!(
        render("<b>%n segment(s)</b> of your driving", Some(5), NO_ARGS).unwrap(),
        "<b>5 segment(s)</b> of your driving"
    );
}

#[test]
fn test_negative_and_zero_quantity() {
    assert_eq!(render("%n 分钟前", Some(0), NO_ARGS).unwrap(), "0 分钟前");
    assert_eq!(render("%n 分钟前", Some(-3), NO_ARGS).unwrap(), "-3 分钟前");
}

#[test]
fn test_quantity_without_value_stays_literal() {
    assert_eq!(render("%n hour(s) ago", None, NO_ARGS).unwrap(), "%n hour(s) ago");
}

#[test]
fn test_positional_arguments() {
    assert_eq!(
        render(
            " Your device is pointed %1° %2 and %3° %4.",
            None,
            &["2.5", "down", "1.0", "left"]
        )
        .unwrap(),
        " Your device is pointed 2.5° down and 1.0° left."
    );
}

#[test]
fn test_arguments_out_of_order_and_repeated() {
    assert_eq!(render("%2, %1, %2", None, &["a", "b"]).unwrap(), "b, a, b");
}

#[test]
fn test_extra_arguments_are_ignored() {
    assert_eq!(render("Uninstall %1", None, &["sunnypilot", "unused"]).unwrap(), "Uninstall sunnypilot");
}

#[test]
fn test_owned_string_arguments() {
    let args = vec!["sunnypilot".to_string()];
    assert_eq!(render("卸载 %1", None, &args).unwrap(), "卸载 sunnypilot");
}

#[test]
fn test_arguments_are_inserted_verbatim() {
    assert_eq!(render("%1", None, &["%2 <b>&amp;</b>"]).unwrap(), "%2 <b>&amp;</b>");
}

#[test]
fn test_missing_argument_is_error() {
    assert_eq!(
        render("%1 updates requires a reboot.<br>Reboot now?", None, NO_ARGS),
        Err(RenderError::MissingArgument {
            index: 1,
            supplied: 0
        })
    );
}

#[test]
fn test_missing_argument_reports_first_gap() {
    assert_eq!(
        render("%3 %1 %2", None, &["x"]),
        Err(RenderError::MissingArgument {
            index: 3,
            supplied: 1
        })
    );
}

#[test]
fn test_missing_argument_message() {
    let err = render("%2", None, &["x"]).unwrap_err();
    assert_eq!(err.to_string(), "placeholder %2 has no argument (1 supplied)");
}

#[test]
fn test_lenient_keeps_missing_tokens() {
    assert_eq!(render_lenient("%1 of %2", Some(4), &["3"]), "3 of %2");
    assert_eq!(render_lenient("%n of %9", Some(4), NO_ARGS), "4 of %9");
}

#[test]
fn test_literal_percent_signs() {
    assert_eq!(render("100% of %1", None, &["you"]).unwrap(), "100% of you");
    assert_eq!(render("%10", None, &["x"]).unwrap(), "x0");
}

#[test]
fn test_render_parsed_template() {
    let template = parse_template("%n × %1");
    assert_eq!(render_template(&template, Some(2), &["3"]).unwrap(), "2 × 3");
}
