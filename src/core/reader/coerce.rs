use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ClassifierPatterns;
use crate::core::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Null,
    True,
    False,
    Int,
    Float,
}

static INT_EXPR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+$").expect("Invalid integer pattern"));
static FLOAT_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?$").expect("Invalid float pattern")
});

/// Ordered classifier table for text tokens. Rules are evaluated top to
/// bottom and the first match wins; anything unmatched stays a string.
pub struct Coercer {
    rules: Vec<(Regex, Class)>,
}

impl Coercer {
    /// `None` when coercion is disabled entirely (`--all-string`).
    pub fn from_config(patterns: &ClassifierPatterns) -> Option<Self> {
        if patterns.all_string {
            return None;
        }

        let rules = vec![
            (patterns.null_expr.clone(), Class::Null),
            (patterns.true_expr.clone(), Class::True),
            (patterns.false_expr.clone(), Class::False),
            (INT_EXPR.clone(), Class::Int),
            (FLOAT_EXPR.clone(), Class::Float),
        ];

        Some(Self { rules })
    }

    pub fn coerce(&self, token: String) -> Value {
        for (expr, class) in &self.rules {
            if !expr.is_match(&token) {
                continue;
            }

            match class {
                Class::Null => return Value::Null,
                Class::True => return Value::Bool(true),
                Class::False => return Value::Bool(false),
                // A lexical match can still overflow; fall through to the
                // next rule when it does.
                Class::Int => match token.parse::<i64>() {
                    Ok(number) => return Value::Int(number),
                    Err(_) => continue,
                },
                Class::Float => match token.parse::<f64>() {
                    Ok(number) => return Value::Float(number),
                    Err(_) => continue,
                },
            }
        }

        Value::String(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReaderOptions;

    fn coercer_from(options: ReaderOptions) -> Option<Coercer> {
        let options = ReaderOptions {
            format: Some("csv".to_string()),
            columns: Some("a".to_string()),
            time_value: Some("0".to_string()),
            ..options
        };
        let config = options.build().unwrap();
        Coercer::from_config(&config.classifiers)
    }

    fn default_coercer() -> Coercer {
        coercer_from(ReaderOptions::default()).unwrap()
    }

    #[test]
    fn test_default_classification() {
        let coercer = default_coercer();

        assert_eq!(coercer.coerce("".to_string()), Value::Null);
        assert_eq!(coercer.coerce("true".to_string()), Value::Bool(true));
        assert_eq!(coercer.coerce("TRUE".to_string()), Value::Bool(true));
        assert_eq!(coercer.coerce("false".to_string()), Value::Bool(false));
        assert_eq!(coercer.coerce("12345".to_string()), Value::Int(12345));
        assert_eq!(coercer.coerce("-3".to_string()), Value::Int(-3));
        assert_eq!(coercer.coerce("+7".to_string()), Value::Int(7));
        assert_eq!(coercer.coerce("3.25".to_string()), Value::Float(3.25));
        assert_eq!(coercer.coerce("1e3".to_string()), Value::Float(1000.0));
        assert_eq!(
            coercer.coerce("abc".to_string()),
            Value::String("abc".to_string())
        );
    }

    #[test]
    fn test_first_match_wins() {
        // "true" would also be a plain string; the boolean rule is earlier.
        let coercer = default_coercer();
        assert_eq!(coercer.coerce("true".to_string()), Value::Bool(true));
    }

    #[test]
    fn test_integer_round_trip_is_idempotent() {
        let coercer = default_coercer();
        let first = coercer.coerce("12345".to_string());
        assert_eq!(first, Value::Int(12345));

        let second = coercer.coerce(first.to_string());
        assert_eq!(second, first);
    }

    #[test]
    fn test_numeric_looking_strings_stay_strings() {
        let coercer = default_coercer();
        assert_eq!(
            coercer.coerce("12abc".to_string()),
            Value::String("12abc".to_string())
        );
        assert_eq!(
            coercer.coerce("1.2.3".to_string()),
            Value::String("1.2.3".to_string())
        );
    }

    #[test]
    fn test_integer_overflow_falls_through() {
        let coercer = default_coercer();
        let token = "99999999999999999999".to_string();
        match coercer.coerce(token) {
            Value::Float(f) => assert_eq!(f, 1e20),
            other => panic!("Expected float fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_overridden_null_pattern() {
        let coercer = coercer_from(ReaderOptions {
            null_pattern: Some(r"(?i)^(?:null|\\N)$".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(coercer.coerce("NULL".to_string()), Value::Null);
        assert_eq!(coercer.coerce(r"\N".to_string()), Value::Null);
        // The default empty-string rule was replaced, and "" matches no
        // other rule.
        assert_eq!(coercer.coerce("".to_string()), Value::String(String::new()));
    }

    #[test]
    fn test_overridden_bool_patterns() {
        let coercer = coercer_from(ReaderOptions {
            true_pattern: Some("^yes$".to_string()),
            false_pattern: Some("^no$".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(coercer.coerce("yes".to_string()), Value::Bool(true));
        assert_eq!(coercer.coerce("no".to_string()), Value::Bool(false));
        assert_eq!(
            coercer.coerce("true".to_string()),
            Value::String("true".to_string())
        );
    }

    #[test]
    fn test_all_string_disables_coercion() {
        let coercer = coercer_from(ReaderOptions {
            all_string: true,
            ..Default::default()
        });
        assert!(coercer.is_none());
    }
}
