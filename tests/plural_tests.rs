use humanize_format::types::{Substitution, TemplateValue};
use humanize_format::{HumanizeError, Template, pluralize, pluralize_template};

#[test]
fn test_plural_form_for_many() {
    let text = pluralize(
        &["", " ", ""],
        &[Substitution::from(3), Substitution::plural("item", "items")],
    )
    .unwrap();
    assert_eq!(text, "3 items");
}

#[test]
fn test_singular_form_for_exactly_one() {
    let text = pluralize(
        &["", " ", ""],
        &[Substitution::from(1), Substitution::plural("item", "items")],
    )
    .unwrap();
    assert_eq!(text, "1 item");
}

#[test]
fn test_zero_and_fractions_are_plural() {
    for count in [0.0, 0.5, 1.5, -1.0] {
        let text = pluralize(
            &["", " ", ""],
            &[Substitution::from(count), Substitution::plural("cup", "cups")],
        )
        .unwrap();
        assert!(text.ends_with("cups"), "{}", text);
    }
}

#[test]
fn test_independent_pairs() {
    let text = pluralize(
        &["", " ", " and ", " ", "."],
        &[
            Substitution::from(1),
            Substitution::plural("apple", "apples"),
            Substitution::from(4),
            Substitution::plural("pear", "pears"),
        ],
    )
    .unwrap();
    assert_eq!(text, "1 apple and 4 pears.");
}

#[test]
fn test_pair_skips_back_over_text() {
    let text = pluralize(
        &["", " new ", " ", ""],
        &[
            Substitution::from(5),
            Substitution::from("shiny"),
            Substitution::plural("coin", "coins"),
        ],
    )
    .unwrap();
    assert_eq!(text, "5 new shiny coins");
}

#[test]
fn test_two_pairs_share_one_count() {
    let text = pluralize(
        &["There ", " ", " ", ""],
        &[
            Substitution::plural("is", "are"),
            Substitution::from(1),
            Substitution::plural("goose", "geese"),
        ],
    )
    .unwrap();
    // The first pair has no count before it
    assert_eq!(text, "There is,are 1 goose");

    let text = pluralize(
        &["", " ", " ", " here"],
        &[
            Substitution::from(2),
            Substitution::plural("goose", "geese"),
            Substitution::plural("is", "are"),
        ],
    )
    .unwrap();
    assert_eq!(text, "2 geese are here");
}

#[test]
fn test_number_rendering() {
    let text = pluralize(
        &["", "|", "|", ""],
        &[
            Substitution::from(3.0),
            Substitution::from(2.5),
            Substitution::Literal(TemplateValue::Number(-0.25)),
        ],
    )
    .unwrap();
    assert_eq!(text, "3|2.5|-0.25");
}

#[test]
fn test_builder() {
    let render = |n: u32| {
        Template::new()
            .text("Deleted ")
            .count(n)
            .text(" ")
            .plural("row", "rows")
            .text(" from ")
            .value("users")
            .render()
    };
    assert_eq!(render(1), "Deleted 1 row from users");
    assert_eq!(render(12), "Deleted 12 rows from users");
}

#[test]
fn test_template_pattern() {
    let args = [TemplateValue::from(3), TemplateValue::from("Ada")];
    let text = pluralize_template("{} {message|messages} for {}", &args).unwrap();
    assert_eq!(text, "3 messages for Ada");

    let text = pluralize_template("{{{}}} {entry|entries}", &[TemplateValue::from(1)]).unwrap();
    assert_eq!(text, "{1} entry");
}

#[test]
fn test_template_pattern_arity() {
    let err = pluralize_template("{} and {}", &[TemplateValue::from(1)]).unwrap_err();
    assert_eq!(
        err,
        HumanizeError::TemplateArity {
            expected: 2,
            found: 1
        }
    );
}
