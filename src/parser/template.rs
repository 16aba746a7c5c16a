use winnow::combinator::{alt, delimited, repeat, separated_pair};
use winnow::token::{literal, take_till};
use winnow::{ModalResult, Parser};

use crate::error::{HumanizeError, Result};
use crate::types::{Slot, TemplatePattern};

/// Characters that end a plural form inside `{...}`
const PAIR_DELIMITERS: [char; 3] = ['{', '}', '|'];

/// A run of the pattern before literal text is merged
#[derive(Debug, Clone, PartialEq)]
enum Piece<'s> {
    Text(&'s str),
    Slot(Slot),
}

/// Parse a template pattern into literal segments and slots
///
/// `{}` is an argument slot, `{singular|plural}` a plural pair and `{{`/`}}`
/// are escaped braces. The returned pattern always has one more literal than
/// slots.
///
/// # Examples
/// ```
/// use humanize_format::parser::parse_template;
/// use humanize_format::types::Slot;
///
/// let pattern = parse_template("{} {file|files}").unwrap();
/// assert_eq!(pattern.literals, vec!["", " ", ""]);
/// assert_eq!(pattern.slots[0], Slot::Argument);
/// ```
pub fn parse_template(input: &str) -> Result<TemplatePattern> {
    let pieces: Vec<Piece<'_>> = repeat(0.., parse_piece)
        .parse(input)
        .map_err(|e| HumanizeError::TemplateSyntax(format!("{} in pattern '{}'", e, input)))?;

    let mut literals = vec![String::new()];
    let mut slots = Vec::new();

    for piece in pieces {
        match piece {
            Piece::Text(text) => {
                if let Some(current) = literals.last_mut() {
                    current.push_str(text);
                }
            }
            Piece::Slot(slot) => {
                slots.push(slot);
                literals.push(String::new());
            }
        }
    }

    Ok(TemplatePattern { literals, slots })
}

fn parse_piece<'s>(input: &mut &'s str) -> ModalResult<Piece<'s>> {
    alt((parse_escaped_brace, parse_argument, parse_plural_pair, parse_text)).parse_next(input)
}

fn parse_escaped_brace<'s>(input: &mut &'s str) -> ModalResult<Piece<'s>> {
    alt((
        literal("{{").value(Piece::Text("{")),
        literal("}}").value(Piece::Text("}")),
    ))
    .parse_next(input)
}

fn parse_argument<'s>(input: &mut &'s str) -> ModalResult<Piece<'s>> {
    literal("{}")
        .value(Piece::Slot(Slot::Argument))
        .parse_next(input)
}

fn parse_plural_pair<'s>(input: &mut &'s str) -> ModalResult<Piece<'s>> {
    delimited(
        '{',
        separated_pair(
            take_till(0.., PAIR_DELIMITERS),
            '|',
            take_till(0.., PAIR_DELIMITERS),
        ),
        '}',
    )
    .map(|(singular, plural): (&str, &str)| {
        Piece::Slot(Slot::Plural(singular.to_string(), plural.to_string()))
    })
    .parse_next(input)
}

fn parse_text<'s>(input: &mut &'s str) -> ModalResult<Piece<'s>> {
    take_till(1.., ['{', '}'])
        .map(Piece::Text)
        .parse_next(input)
}
