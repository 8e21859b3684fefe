//! Token extraction for the classifier

use crate::compose::ServiceDefinition;

/// Ordered, de-duplicated token list
///
/// Tokens keep the order in which they were first extracted, which makes the
/// first hint match reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower-case `text`, split it on any of `separators`, and add each piece
    pub fn extend_split(&mut self, text: &str, separators: &[char]) {
        for piece in text.to_lowercase().split(separators) {
            self.push(piece);
        }
    }

    fn push(&mut self, token: &str) {
        if token.is_empty() || self.contains(token) {
            return;
        }
        self.tokens.push(token.to_string());
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Collect classifier tokens from a service
///
/// Sources, in order: the service name split on `-`/`_`; the image reference
/// split on `/`/`-` along with its repository part; label keys and values
/// split on `.`; environment keys and values split on `_`.
pub fn extract_tokens(name: &str, definition: &ServiceDefinition) -> TokenSet {
    let mut tokens = TokenSet::new();

    tokens.extend_split(name, &['-', '_']);

    if let Some(image) = definition.image.as_deref().filter(|i| !i.is_empty()) {
        tokens.extend_split(image, &['/', '-']);
        let repository = image.split(':').next().unwrap_or_default();
        tokens.extend_split(repository, &['/', '-']);
    }

    for (key, value) in &definition.labels {
        tokens.extend_split(key, &['.']);
        tokens.extend_split(value, &['.']);
    }

    for (key, value) in &definition.environment {
        tokens.extend_split(key, &['_']);
        if let Some(value) = value {
            tokens.extend_split(value, &['_']);
        }
    }

    tokens
}
