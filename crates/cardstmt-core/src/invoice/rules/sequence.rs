//! Contiguous token-sequence matching.
//!
//! A [`Pattern`] is an ordered list of [`Matcher`]s. [`find_sequence`] returns
//! the index of the first token of the leftmost run of tokens that satisfies
//! the pattern position by position.
//!
//! The scan keeps a single position counter and resets it to zero on a
//! mismatch without re-testing the failing token against the first element.
//! A run that starts inside a failed partial match is therefore missed, e.g.
//! `["a", "b"]` is not found in `["a", "a", "b"]`. Anchor phrases must not
//! start with a repeated prefix.

use std::fmt;

use regex::Regex;

/// A single element of a [`Pattern`].
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Token must equal the literal exactly.
    Literal(String),
    /// Any single token.
    Wildcard,
    /// Token must contain a match of the expression (unanchored).
    Regex(Regex),
}

impl Matcher {
    pub fn literal(text: impl Into<String>) -> Self {
        Matcher::Literal(text.into())
    }

    /// Test a token against this element.
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Matcher::Literal(literal) => literal == token,
            Matcher::Wildcard => true,
            Matcher::Regex(re) => re.is_match(token),
        }
    }
}

impl From<&str> for Matcher {
    fn from(text: &str) -> Self {
        Matcher::literal(text)
    }
}

impl From<Regex> for Matcher {
    fn from(re: Regex) -> Self {
        Matcher::Regex(re)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Literal(literal) => write!(f, "{:?}", literal),
            Matcher::Wildcard => f.write_str("*"),
            Matcher::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// An ordered anchor phrase.
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    elements: Vec<Matcher>,
}

impl Pattern {
    pub fn new(elements: Vec<Matcher>) -> Self {
        Self { elements }
    }

    /// Single-token literal pattern.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(vec![Matcher::literal(text)])
    }

    /// Build a pattern from literal tokens, treating `"*"` as a wildcard.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        Self::new(
            tokens
                .iter()
                .map(|t| match t.as_ref() {
                    "*" => Matcher::Wildcard,
                    other => Matcher::literal(other),
                })
                .collect(),
        )
    }

    pub fn elements(&self) -> &[Matcher] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the first token of the leftmost match in `tokens`.
    pub fn find<S: AsRef<str>>(&self, tokens: &[S]) -> Option<usize> {
        find_sequence(&self.elements, tokens)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}

/// Find the first contiguous run of `tokens` matching `pattern`.
///
/// An empty pattern only matches an empty token list (at index 0).
pub fn find_sequence<S: AsRef<str>>(pattern: &[Matcher], tokens: &[S]) -> Option<usize> {
    if pattern.is_empty() {
        return tokens.is_empty().then_some(0);
    }

    let mut matched = 0;

    for (i, token) in tokens.iter().enumerate() {
        if pattern[matched].matches(token.as_ref()) {
            matched += 1;
            if matched == pattern.len() {
                return Some(i + 1 - pattern.len());
            }
        } else {
            matched = 0;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(tokens: &[&str]) -> Vec<Matcher> {
        Pattern::from_tokens(tokens).elements().to_vec()
    }

    const FRUIT: [&str; 4] = ["apple", "cat", "dog", "banana"];

    #[test]
    fn test_finds_first_occurrence() {
        assert_eq!(find_sequence(&pattern(&["cat", "dog"]), &FRUIT), Some(1));
    }

    #[test]
    fn test_missing_sequence() {
        assert_eq!(find_sequence(&pattern(&["dog", "fish"]), &FRUIT), None);
    }

    #[test]
    fn test_pattern_longer_than_tokens() {
        let p = pattern(&["cat", "dog", "mouse", "elephant"]);
        assert_eq!(find_sequence(&p, &["cat", "dog"]), None);
    }

    #[test]
    fn test_empty_pattern() {
        let empty: [&str; 0] = [];
        assert_eq!(find_sequence(&[], &empty), Some(0));
        assert_eq!(find_sequence(&[], &FRUIT), None);
    }

    #[test]
    fn test_wildcard() {
        let p = pattern(&["cat", "*", "banana"]);
        assert_eq!(find_sequence(&p, &FRUIT), Some(1));
    }

    #[test]
    fn test_regex() {
        let p = vec![Matcher::Regex(Regex::new(r"apple\d+").unwrap())];
        assert_eq!(find_sequence(&p, &["apple", "apple1234"]), Some(1));
    }

    #[test]
    fn test_regex_is_unanchored() {
        let p = vec![Matcher::Regex(Regex::new(r"Page \d+ /\d+").unwrap())];
        assert_eq!(find_sequence(&p, &["x", "Statement Page 2 /4 end"]), Some(1));
    }

    #[test]
    fn test_leftmost_of_several() {
        let tokens = ["a", "b", "x", "a", "b"];
        assert_eq!(find_sequence(&pattern(&["a", "b"]), &tokens), Some(0));
    }

    #[test]
    fn test_reset_does_not_retest_failing_token() {
        assert_eq!(find_sequence(&pattern(&["a", "b"]), &["a", "a", "b"]), None);
        assert_eq!(find_sequence(&pattern(&["a", "b"]), &["a", "x", "a", "b"]), Some(2));
    }

    #[test]
    fn test_literal_star_is_not_wildcard() {
        let p = vec![Matcher::literal("*")];
        assert_eq!(find_sequence(&p, &["cat", "*"]), Some(1));
    }

    #[test]
    fn test_display() {
        let mut p = pattern(&["Payment", "*"]);
        p.push(Matcher::Regex(Regex::new(r"\d{4}").unwrap()));
        assert_eq!(Pattern::new(p).to_string(), r#"["Payment", *, /\d{4}/]"#);
    }
}
