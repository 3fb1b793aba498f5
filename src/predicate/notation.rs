//! Lexical grammar predicates
//!
//! Anchored, whole-string membership tests for property names, numeric
//! literals, quoted text and property-access notation. Each grammar is a
//! regular language compiled once on first use.
//!
//! | Grammar | Accepts |
//! |---|---|
//! | [`Grammar::PropName`] | `[A-Za-z_$][A-Za-z0-9_$]*` |
//! | [`Grammar::Integer`] | one or more ASCII digits |
//! | [`Grammar::Number`] | an integer, optionally `.` and more digits |
//! | [`Grammar::Float`] | an integer, `.`, and more digits |
//! | [`Grammar::Text`] | `'...'` or `"..."` without the enclosing quote inside |
//! | [`Grammar::DotNotation`] | two or more property names joined by `.` |
//! | [`Grammar::BracketNotation`] | a property name then one or more `[index]` / `["key"]` |
//! | [`Grammar::Notation`] | a property name then any mix of bracket and `.name` segments |

use std::sync::LazyLock;

use regex::Regex;

use crate::value::Value;

const PROP: &str = r"[A-Za-z_$][A-Za-z0-9_$]*";
const BRACKET: &str = r#"\[(?:[0-9]+|'[^']*'|"[^"]*")\]"#;

fn anchored(body: &str) -> Regex {
    // Patterns are assembled from the constants above and always compile.
    Regex::new(&format!("^(?:{})$", body)).expect("notation pattern compiles")
}

static PROP_NAME: LazyLock<Regex> = LazyLock::new(|| anchored(PROP));
static INTEGER: LazyLock<Regex> = LazyLock::new(|| anchored(r"[0-9]+"));
static NUMBER: LazyLock<Regex> = LazyLock::new(|| anchored(r"[0-9]+(?:\.[0-9]+)?"));
static FLOAT: LazyLock<Regex> = LazyLock::new(|| anchored(r"[0-9]+\.[0-9]+"));
static TEXT: LazyLock<Regex> = LazyLock::new(|| anchored(r#"'[^']*'|"[^"]*""#));
static DOT_NOTATION: LazyLock<Regex> =
    LazyLock::new(|| anchored(&format!(r"{PROP}(?:\.{PROP})+")));
static BRACKET_NOTATION: LazyLock<Regex> =
    LazyLock::new(|| anchored(&format!("{PROP}(?:{BRACKET})+")));
static NOTATION: LazyLock<Regex> =
    LazyLock::new(|| anchored(&format!(r"{PROP}(?:{BRACKET}|\.{PROP})*")));

/// The recognised lexical grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// An identifier usable as a property name.
    PropName,
    /// An integer or decimal literal.
    Number,
    /// An integer literal.
    Integer,
    /// A decimal literal with a fractional part.
    Float,
    /// A single- or double-quoted text literal.
    Text,
    /// `a.b.c`
    DotNotation,
    /// `a[0]["key"]`
    BracketNotation,
    /// `a[0].b["key"]`, or a bare `a`
    Notation,
}

impl Grammar {
    fn regex(self) -> &'static Regex {
        match self {
            Grammar::PropName => &PROP_NAME,
            Grammar::Number => &NUMBER,
            Grammar::Integer => &INTEGER,
            Grammar::Float => &FLOAT,
            Grammar::Text => &TEXT,
            Grammar::DotNotation => &DOT_NOTATION,
            Grammar::BracketNotation => &BRACKET_NOTATION,
            Grammar::Notation => &NOTATION,
        }
    }

    /// True if the whole of `text` belongs to this grammar.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valcheck::predicate::Grammar;
    ///
    /// assert!(Grammar::DotNotation.matches("a.b.c"));
    /// assert!(!Grammar::DotNotation.matches("a..b"));
    /// assert!(Grammar::BracketNotation.matches(r#"a["k"][0]"#));
    /// assert!(!Grammar::BracketNotation.matches("a[]"));
    /// ```
    pub fn matches(self, text: &str) -> bool {
        self.regex().is_match(text)
    }

    /// True if `value` is text belonging to this grammar.
    pub fn accepts(self, value: &Value) -> bool {
        value.as_str().is_some_and(|text| self.matches(text))
    }
}

/// True if `value` is text forming a property name.
pub fn is_prop_name(value: &Value) -> bool {
    Grammar::PropName.accepts(value)
}

/// True if `value` is text forming an integer or decimal literal.
pub fn is_number_literal(value: &Value) -> bool {
    Grammar::Number.accepts(value)
}

/// True if `value` is text forming an integer literal.
pub fn is_integer_literal(value: &Value) -> bool {
    Grammar::Integer.accepts(value)
}

/// True if `value` is text forming a decimal literal with a fractional part.
pub fn is_float_literal(value: &Value) -> bool {
    Grammar::Float.accepts(value)
}

/// True if `value` is text forming a quoted text literal.
pub fn is_text_literal(value: &Value) -> bool {
    Grammar::Text.accepts(value)
}

/// True if `value` is text in dot notation.
pub fn is_dot_notation(value: &Value) -> bool {
    Grammar::DotNotation.accepts(value)
}

/// True if `value` is text in bracket notation.
pub fn is_bracket_notation(value: &Value) -> bool {
    Grammar::BracketNotation.accepts(value)
}

/// True if `value` is text in general property-access notation.
pub fn is_notation(value: &Value) -> bool {
    Grammar::Notation.accepts(value)
}
