//! Template pluralization
//!
//! A template is a list of literal segments interleaved with substitutions.
//! Each plural pair picks its singular or plural text from the nearest
//! numeric substitution before it.

use crate::error::{HumanizeError, Result};
use crate::parser::parse_template;
use crate::types::{Slot, Substitution, TemplateValue};

/// Concatenate `literals` and resolved `substitutions` in order
///
/// A plural pair with no numeric substitution before it is left unresolved
/// and renders as `"singular,plural"`.
///
/// # Arguments
/// * `literals` - Literal segments, one more than there are substitutions
/// * `substitutions` - Values and plural pairs placed between the literals
///
/// # Errors
/// * `HumanizeError::TemplateArity` - `literals.len() != substitutions.len() + 1`
///
/// # Examples
/// ```
/// use humanize_format::formatter::pluralize;
/// use humanize_format::types::Substitution;
///
/// let text = pluralize(
///     &["You have ", " ", "."],
///     &[Substitution::from(3), Substitution::plural("item", "items")],
/// )
/// .unwrap();
/// assert_eq!(text, "You have 3 items.");
/// ```
pub fn pluralize<S: AsRef<str>>(literals: &[S], substitutions: &[Substitution]) -> Result<String> {
    if literals.len() != substitutions.len() + 1 {
        return Err(HumanizeError::TemplateArity {
            expected: literals.len().saturating_sub(1),
            found: substitutions.len(),
        });
    }

    let mut result = String::new();
    let mut last_count: Option<f64> = None;

    for (literal, substitution) in literals.iter().zip(substitutions) {
        result.push_str(literal.as_ref());
        if let Some(count) = substitution.count() {
            last_count = Some(count);
        }

        match substitution {
            Substitution::Literal(value) => result.push_str(&value.to_string()),
            Substitution::PluralPair { singular, plural } => match last_count {
                Some(count) if count == 1.0 => result.push_str(singular),
                Some(_) => result.push_str(plural),
                None => result.push_str(&format!("{},{}", singular, plural)),
            },
        }
    }

    if let Some(last) = literals.last() {
        result.push_str(last.as_ref());
    }

    Ok(result)
}

/// Incremental builder for pluralized templates
///
/// Adjacent text is merged, so the literal/substitution alternation is always
/// well formed.
///
/// # Examples
/// ```
/// use humanize_format::formatter::Template;
///
/// let text = Template::new()
///     .count(1)
///     .text(" ")
///     .plural("file", "files")
///     .text(" changed")
///     .render();
/// assert_eq!(text, "1 file changed");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    literals: Vec<String>,
    substitutions: Vec<Substitution>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    /// Create an empty template
    pub fn new() -> Self {
        Self {
            literals: vec![String::new()],
            substitutions: Vec::new(),
        }
    }

    /// Append literal text
    pub fn text(mut self, text: &str) -> Self {
        if let Some(current) = self.literals.last_mut() {
            current.push_str(text);
        }
        self
    }

    /// Append a numeric value that later plural pairs resolve against
    pub fn count(self, count: impl Into<f64>) -> Self {
        self.substitute(Substitution::Literal(TemplateValue::Number(count.into())))
    }

    /// Append a plain value
    pub fn value(self, value: impl Into<TemplateValue>) -> Self {
        self.substitute(Substitution::Literal(value.into()))
    }

    /// Append a singular/plural pair
    pub fn plural(self, singular: &str, plural: &str) -> Self {
        self.substitute(Substitution::plural(singular, plural))
    }

    /// Append an arbitrary substitution
    pub fn substitute(mut self, substitution: Substitution) -> Self {
        self.substitutions.push(substitution);
        self.literals.push(String::new());
        self
    }

    /// Render the template
    pub fn render(&self) -> String {
        // The builder keeps one more literal than substitutions
        pluralize(&self.literals, &self.substitutions).unwrap_or_default()
    }
}

/// Render a template pattern with `{}` arguments and `{singular|plural}` pairs
///
/// `{{` and `}}` produce literal braces.
///
/// # Errors
/// * `HumanizeError::TemplateSyntax` - The pattern does not parse
/// * `HumanizeError::TemplateArity` - `args` does not match the number of `{}` slots
///
/// # Examples
/// ```
/// use humanize_format::formatter::pluralize_template;
/// use humanize_format::types::TemplateValue;
///
/// let args = [TemplateValue::Number(2.0), TemplateValue::Number(1.0)];
/// let text = pluralize_template("{} {child|children} and {} {dog|dogs}", &args);
/// assert_eq!(text.unwrap(), "2 children and 1 dog");
/// ```
pub fn pluralize_template(pattern: &str, args: &[TemplateValue]) -> Result<String> {
    let template = parse_template(pattern)?;

    let expected = template.argument_count();
    if expected != args.len() {
        return Err(HumanizeError::TemplateArity {
            expected,
            found: args.len(),
        });
    }

    let mut args = args.iter();
    let substitutions: Vec<Substitution> = template
        .slots
        .into_iter()
        .filter_map(|slot| match slot {
            Slot::Argument => args.next().cloned().map(Substitution::Literal),
            Slot::Plural(singular, plural) => Some(Substitution::PluralPair { singular, plural }),
        })
        .collect();

    pluralize(&template.literals, &substitutions)
}
