//! Form field sanitization and validation chains
//!
//! A [`FieldChain`] applies its rules in order to one submitted value. Every
//! rule may rewrite the value, and a failing check is recorded without
//! stopping the rules that follow it.

use serde::Serialize;
use validator::ValidateLength;

pub const GENRE_NAME_MESSAGE: &str = "Genre name must contain at least 3 characters";

/// One failed check on a submitted field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    /// Value as it stood when the check failed
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Strip leading and trailing whitespace
    Trim,
    /// Require at least this many characters
    MinLength(u64),
    /// Replace markup-significant characters with entities
    Escape,
}

impl Rule {
    /// Apply the rule in place; `false` means the value failed the check
    fn apply(&self, value: &mut String) -> bool {
        match self {
            Rule::Trim => {
                let trimmed = value.trim();
                if trimmed.len() != value.len() {
                    *value = trimmed.to_string();
                }
                true
            }
            Rule::MinLength(min) => value.validate_length(Some(*min), None, None),
            Rule::Escape => {
                *value = escape(value);
                true
            }
        }
    }
}

/// Sanitized value plus the ordered failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked {
    pub value: String,
    pub errors: Vec<FieldError>,
}

impl Checked {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Ordered rules for a single named field
#[derive(Debug, Clone)]
pub struct FieldChain {
    field: &'static str,
    message: &'static str,
    rules: Vec<Rule>,
}

impl FieldChain {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self {
            field,
            message,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn run(&self, raw: &str) -> Checked {
        let mut value = raw.to_string();
        let mut errors = Vec::new();

        for rule in &self.rules {
            if !rule.apply(&mut value) {
                errors.push(FieldError {
                    field: self.field.to_string(),
                    message: self.message.to_string(),
                    value: value.clone(),
                });
            }
        }

        Checked { value, errors }
    }
}

/// Chain shared by the genre create and update forms
pub fn genre_name() -> FieldChain {
    FieldChain::new("name", GENRE_NAME_MESSAGE)
        .rule(Rule::Trim)
        .rule(Rule::MinLength(3))
        .rule(Rule::Escape)
}

/// HTML-escape a value the way form sanitization does
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_name_valid() {
        let checked = genre_name().run("  Science Fiction \n");
        assert!(checked.is_valid());
        assert_eq!(checked.value, "Science Fiction");
    }

    #[test]
    fn test_short_names_fail_after_trim() {
        for raw in ["", "ab", "   ab   ", "\t\t", "  x "] {
            let checked = genre_name().run(raw);
            assert_eq!(checked.errors.len(), 1, "input {:?}", raw);
            assert_eq!(checked.errors[0].field, "name");
            assert_eq!(checked.errors[0].message, GENRE_NAME_MESSAGE);
            assert_eq!(checked.errors[0].value, raw.trim());
        }
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(genre_name().run("émé").is_valid());
        assert!(!genre_name().run("日本").is_valid());
    }

    #[test]
    fn test_escape_runs_after_failed_check() {
        let checked = genre_name().run(" <b");
        assert!(!checked.is_valid());
        assert_eq!(checked.value, "&lt;b");
    }

    #[test]
    fn test_escape_happens_after_length_check() {
        // three characters before escaping, many after
        let checked = genre_name().run("a&b");
        assert!(checked.is_valid());
        assert_eq!(checked.value, "a&amp;b");
    }

    #[test]
    fn test_escape_entities() {
        assert_eq!(
            escape(r#"<a href="x">'Tom' & `Jerry`\</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;Tom&#x27; &amp; &#96;Jerry&#96;&#x5C;&lt;&#x2F;a&gt;"
        );
        assert_eq!(escape("Poetry"), "Poetry");
    }

    #[test]
    fn test_custom_chain_collects_every_failure() {
        let chain = FieldChain::new("code", "Too short")
            .rule(Rule::MinLength(6))
            .rule(Rule::Trim)
            .rule(Rule::MinLength(4));
        let checked = chain.run(" abc ");
        assert_eq!(checked.value, "abc");
        assert_eq!(checked.errors.len(), 2);
        assert_eq!(checked.errors[0].value, " abc ");
        assert_eq!(checked.errors[1].value, "abc");
    }
}
