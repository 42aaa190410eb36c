//! Orthographic rewrite rules.
//!
//! The canonical spelling of the target language comes out of an ordered
//! rule table. Order matters: silent-letter drops run after consonant
//! simplification and may only become applicable because of it, so the
//! table is an explicit list, never a keyed map.
//!
//! Public API:
//! - `Rule` / `Scope` - one literal rewrite with a position constraint
//! - `RuleTable` - ordered rule application, whole or filtered
//! - `ORTHOGRAPHIC_RULES` - the shared table, parsed once from specs

use once_cell::sync::Lazy;
use serde::Serialize;

/// Where in the word a rule's pattern is allowed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Replace every occurrence.
    Anywhere,
    /// Replace only a match at the start of the word.
    Start,
    /// Replace only a match at the end of the word.
    End,
}

/// A single literal rewrite rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
    pub scope: Scope,
}

impl Rule {
    pub fn new<P: Into<String>, R: Into<String>>(pattern: P, replacement: R, scope: Scope) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            scope,
        }
    }

    /// Parse a rule spec of the form "pattern=replacement".
    ///
    /// A leading `^` on the pattern pins the match to the word start, a
    /// trailing `$` to the word end. Returns None for specs without a `=`
    /// or with an empty pattern.
    pub fn parse(spec: &str) -> Option<Rule> {
        let (raw_pattern, replacement) = spec.split_once('=')?;
        let raw_pattern = raw_pattern.trim();
        let replacement = replacement.trim();
        let (pattern, scope) = if let Some(rest) = raw_pattern.strip_prefix('^') {
            (rest, Scope::Start)
        } else if let Some(rest) = raw_pattern.strip_suffix('$') {
            (rest, Scope::End)
        } else {
            (raw_pattern, Scope::Anywhere)
        };
        if pattern.is_empty() {
            return None;
        }
        Some(Rule::new(pattern, replacement, scope))
    }

    /// Apply this rule to `word`, returning the rewritten string.
    pub fn apply(&self, word: &str) -> String {
        match self.scope {
            Scope::Anywhere => word.replace(&self.pattern, &self.replacement),
            Scope::Start => match word.strip_prefix(&self.pattern) {
                Some(rest) => format!("{}{}", self.replacement, rest),
                None => word.to_string(),
            },
            Scope::End => match word.strip_suffix(&self.pattern) {
                Some(stem) => format!("{}{}", stem, self.replacement),
                None => word.to_string(),
            },
        }
    }
}

/// An ordered rewrite table.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from textual rule specs, keeping their order.
    /// Malformed specs are skipped.
    pub fn from_specs(specs: &[&str]) -> Self {
        let mut table = RuleTable::new();
        for spec in specs {
            if let Some(rule) = Rule::parse(spec) {
                table.push(rule);
            }
        }
        table
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in table order.
    pub fn apply(&self, word: &str) -> String {
        self.rules.iter().fold(word.to_string(), |w, rule| rule.apply(&w))
    }

    /// Apply only the rules whose pattern is listed, preserving table order.
    pub fn apply_only(&self, word: &str, patterns: &[&str]) -> String {
        self.rules
            .iter()
            .filter(|rule| patterns.contains(&rule.pattern.as_str()))
            .fold(word.to_string(), |w, rule| rule.apply(&w))
    }

    /// Apply every rule except those whose pattern is listed.
    pub fn apply_excluding(&self, word: &str, patterns: &[&str]) -> String {
        self.rules
            .iter()
            .filter(|rule| !patterns.contains(&rule.pattern.as_str()))
            .fold(word.to_string(), |w, rule| rule.apply(&w))
    }
}

/// Rule specs for the target orthography, in application order.
///
/// Vowel folding first, then the sound-pattern digraphs, then consonant
/// simplification, and last the silent-letter drops.
pub const STANDARD_RULE_SPECS: [&str; 10] = [
    "ä=æ",
    "ö=ø",
    "ej=ei",
    "øj=øy",
    "aj=ai",
    "ck=k",
    "ph=f",
    "dt$=t",
    "ld$=l",
    "^hv=v",
];

/// The sound-pattern digraphs, applied on their own by the transformation
/// pipeline before the residual rules run.
pub const SOUND_PATTERN_PATTERNS: [&str; 3] = ["ej", "øj", "aj"];

/// The shared rule table, parsed once.
pub static ORTHOGRAPHIC_RULES: Lazy<RuleTable> =
    Lazy::new(|| RuleTable::from_specs(&STANDARD_RULE_SPECS));
