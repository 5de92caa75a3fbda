//! Name predicate construction.

use crate::sources::schema::{FIRST_NAME, LAST_NAME, NICKNAME, ORGANIZATION};

/// Which filter a predicate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateShape {
    /// No terms: any record with a first name, last name or organization.
    AnyNamed,
    /// First name and last name must both partially match.
    FirstAndLast,
    /// The single term may match first name, last name, organization or nickname.
    AnyField,
}

/// A filter expression over the record table plus its positional parameters.
///
/// Immutable once built. Query code embeds the expression once per union
/// arm and pulls parameters through [`SearchPredicate::bind_twice`], so the
/// two can't drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPredicate {
    shape: PredicateShape,
    expression: String,
    parameters: Vec<String>,
}

impl SearchPredicate {
    /// Build the predicate for a first-name term and an optional last-name term.
    ///
    /// Terms are trimmed; a blank last name counts as absent.
    pub fn build(first_name: &str, last_name: Option<&str>) -> Self {
        let first = first_name.trim();
        let last = last_name.map(str::trim).filter(|s| !s.is_empty());
        let named = any_named();

        match last {
            Some(last) => Self {
                shape: PredicateShape::FirstAndLast,
                expression: format!(
                    "{} AND {} AND {}",
                    like(FIRST_NAME),
                    like(LAST_NAME),
                    named
                ),
                parameters: vec![like_pattern(first), like_pattern(last)],
            },
            None if first.is_empty() => Self {
                shape: PredicateShape::AnyNamed,
                expression: named,
                parameters: Vec::new(),
            },
            None => {
                let fields = [FIRST_NAME, LAST_NAME, ORGANIZATION, NICKNAME];
                let any_field = fields.iter().map(|f| like(f)).collect::<Vec<_>>().join(" OR ");
                let pattern = like_pattern(first);

                Self {
                    shape: PredicateShape::AnyField,
                    expression: format!("({}) AND {}", any_field, named),
                    parameters: vec![pattern; fields.len()],
                }
            }
        }
    }

    pub fn shape(&self) -> PredicateShape {
        self.shape
    }

    /// Filter expression with `?` placeholders.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Parameters for a single occurrence of the expression.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Parameters for a query that embeds the expression in two union arms.
    pub fn bind_twice(&self) -> impl Iterator<Item = &str> + '_ {
        self.parameters
            .iter()
            .chain(self.parameters.iter())
            .map(String::as_str)
    }
}

fn any_named() -> String {
    format!(
        "({} IS NOT NULL OR {} IS NOT NULL OR {} IS NOT NULL)",
        FIRST_NAME, LAST_NAME, ORGANIZATION
    )
}

fn like(column: &str) -> String {
    format!("{} LIKE ? ESCAPE '\\'", column)
}

/// Wrap a term as a substring pattern, escaping LIKE wildcards in it.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
