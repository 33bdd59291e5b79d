//! Declarative validation rules for the user details form
//!
//! Each field owns an ordered list of rules. Rules are checked in order and
//! the first failing rule's message is the field's error.

use super::field::{Field, FormValues};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
        .unwrap_or_else(|err| panic!("invalid email pattern: {err}"))
});

/// A single predicate over a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty
    Required,
    /// Value must look like an email address
    Email,
    /// Value must consist of ASCII digits only
    Numeric,
    /// Value must be exactly this many characters
    Length(usize),
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Email => EMAIL_PATTERN.is_match(value),
            Rule::Numeric => !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()),
            Rule::Length(n) => value.chars().count() == *n,
        }
    }
}

/// A rule paired with the message reported when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldRule {
    const fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }
}

/// Outcome of validating one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(&'static str),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(msg) => Some(msg),
        }
    }
}

/// Per-field error messages, ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }

    /// Record a verdict: invalid sets the message, valid clears it
    pub fn apply(&mut self, field: Field, verdict: Verdict) {
        match verdict {
            Verdict::Valid => {
                self.0.remove(&field);
            }
            Verdict::Invalid(msg) => {
                self.0.insert(field, msg);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Result of validating a subset of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report(BTreeMap<Field, Verdict>);

impl Report {
    pub fn verdict(&self, field: Field) -> Option<Verdict> {
        self.0.get(&field).copied()
    }

    pub fn is_valid(&self) -> bool {
        self.0.values().all(Verdict::is_valid)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, Verdict)> + '_ {
        self.0.iter().map(|(f, v)| (*f, *v))
    }

    /// Only the failing fields
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for (field, verdict) in self.iter() {
            if !verdict.is_valid() {
                errors.apply(field, verdict);
            }
        }
        errors
    }
}

/// Ordered rule table keyed by field
#[derive(Debug, Clone)]
pub struct Schema {
    rules: BTreeMap<Field, Vec<FieldRule>>,
}

impl Schema {
    /// The rule set of the user details form
    pub fn user_details() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            Field::Name,
            vec![FieldRule::new(Rule::Required, "Name is required")],
        );
        rules.insert(
            Field::Email,
            vec![
                FieldRule::new(Rule::Required, "Email is required"),
                FieldRule::new(Rule::Email, "Invalid input"),
            ],
        );
        rules.insert(
            Field::Phone,
            vec![
                FieldRule::new(Rule::Required, "Phone no. is required"),
                FieldRule::new(Rule::Numeric, "Phone no. must contain only numbers"),
                FieldRule::new(Rule::Length(10), "Mobile number must be exactly 10 digits"),
            ],
        );
        rules.insert(
            Field::AddressLine1,
            vec![FieldRule::new(Rule::Required, "Address is required")],
        );
        rules.insert(Field::AddressLine2, Vec::new());
        rules.insert(
            Field::City,
            vec![FieldRule::new(Rule::Required, "City is required")],
        );
        rules.insert(
            Field::State,
            vec![FieldRule::new(Rule::Required, "State is required")],
        );
        rules.insert(
            Field::ZipCode,
            vec![
                FieldRule::new(Rule::Required, "ZIP Code is required"),
                FieldRule::new(Rule::Numeric, "ZIP Code must contain only numbers"),
                FieldRule::new(Rule::Length(6), "ZIP Code must be exactly 6 digits"),
            ],
        );
        Self { rules }
    }

    pub fn rules_for(&self, field: Field) -> &[FieldRule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Validate a single value against its field's rules
    pub fn validate_field(&self, field: Field, value: &str) -> Verdict {
        self.rules_for(field)
            .iter()
            .find(|r| !r.rule.check(value))
            .map_or(Verdict::Valid, |r| Verdict::Invalid(r.message))
    }

    /// Validate the given fields, or every field when `subset` is `None`
    pub fn validate(&self, values: &FormValues, subset: Option<&[Field]>) -> Report {
        let fields = subset.unwrap_or(&Field::ALL);
        Report(
            fields
                .iter()
                .map(|f| (*f, self.validate_field(*f, values.get(*f))))
                .collect(),
        )
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::user_details()
    }
}
