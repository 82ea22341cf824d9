//! Full-text index emulation over a resource's `name`, `description` and `tags`.
//!
//! A search string is split into terms the way a document store text index
//! does it: case-insensitive alphanumeric tokens, `-term` to exclude records
//! containing a token, and `"quoted phrases"` that must appear verbatim. A
//! record matches when it contains at least one positive term, every phrase
//! and none of the negated terms.

use crate::model::Resource;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("token pattern is valid"));

static PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("phrase pattern is valid"));

/// Lowercased alphanumeric tokens of `text`, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A parsed text search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextQuery {
    pub terms: Vec<String>,
    pub negated: Vec<String>,
    pub phrases: Vec<String>,
}

impl TextQuery {
    pub fn parse(search: &str) -> Self {
        let mut query = TextQuery::default();

        for cap in PHRASE.captures_iter(search) {
            let phrase = tokenize(&cap[1]);
            if phrase.is_empty() {
                continue;
            }
            query.terms.extend(phrase.iter().cloned());
            query.phrases.push(phrase.join(" "));
        }

        let rest = PHRASE.replace_all(search, " ");
        for word in rest.split_whitespace() {
            match word.strip_prefix('-') {
                Some(negated) => query.negated.extend(tokenize(negated)),
                None => query.terms.extend(tokenize(word)),
            }
        }

        query.terms.sort();
        query.terms.dedup();
        query
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        let tokens = indexed_tokens(resource);
        if self.negated.iter().any(|n| tokens.contains(n)) {
            return false;
        }
        if !self.phrases.is_empty() {
            let fields: Vec<String> = indexed_fields(resource)
                .map(|field| format!(" {} ", tokenize(field).join(" ")))
                .collect();
            let contains = |phrase: &String| {
                let needle = format!(" {phrase} ");
                fields.iter().any(|field| field.contains(&needle))
            };
            if !self.phrases.iter().all(contains) {
                return false;
            }
        }
        self.terms.iter().any(|t| tokens.contains(t))
    }

    /// Relevance: how many indexed tokens equal one of the positive terms.
    pub fn score(&self, resource: &Resource) -> f64 {
        indexed_tokens(resource)
            .iter()
            .filter(|token| self.terms.contains(token))
            .count() as f64
    }
}

/// Name, description and each tag. A phrase never spans two of them.
fn indexed_fields(resource: &Resource) -> impl Iterator<Item = &str> {
    [resource.name.as_str(), resource.description.as_str()]
        .into_iter()
        .chain(resource.tags.iter().map(String::as_str))
}

fn indexed_tokens(resource: &Resource) -> Vec<String> {
    indexed_fields(resource).flat_map(tokenize).collect()
}
