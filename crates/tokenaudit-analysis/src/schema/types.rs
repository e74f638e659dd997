//! Token document model.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// The three token tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenTier {
    Primitive,
    Semantic,
    Component,
}

impl TokenTier {
    pub const ALL: [TokenTier; 3] = [TokenTier::Primitive, TokenTier::Semantic, TokenTier::Component];

    /// The required top-level key holding the token tree.
    pub fn wrapper_key(&self) -> &'static str {
        match self {
            TokenTier::Primitive => "tokens",
            TokenTier::Semantic => "themes",
            TokenTier::Component => "components",
        }
    }

    /// File-name fragment that selects this tier.
    pub fn file_marker(&self) -> &'static str {
        match self {
            TokenTier::Primitive => "primitives",
            TokenTier::Semantic => "semantic",
            TokenTier::Component => "component",
        }
    }

    /// Tier of a token file, by substring of its name. Markers are tried in
    /// the order primitives, semantic, component.
    pub fn from_file_name(file_name: &str) -> Option<TokenTier> {
        Self::ALL
            .into_iter()
            .find(|tier| file_name.contains(tier.file_marker()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenTier::Primitive => "primitive",
            TokenTier::Semantic => "semantic",
            TokenTier::Component => "component",
        }
    }
}

impl fmt::Display for TokenTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified leaf. The first matching form wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TokenValue {
    /// `#0f62fe`
    Hex(String),
    /// `1.5rem`, `16px`, `50%`
    Unit(String),
    /// `{blue.60}`; syntax only, never resolved.
    Reference(String),
    /// `linear-gradient(...)`
    Function(String),
    /// Any other non-empty string.
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenNode {
    Leaf(TokenValue),
    Group(BTreeMap<String, TokenNode>),
}

/// Leaf counts per value form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenStats {
    pub hex: usize,
    pub unit: usize,
    pub reference: usize,
    pub function: usize,
    pub literal: usize,
}

impl TokenStats {
    pub fn total(&self) -> usize {
        self.hex + self.unit + self.reference + self.function + self.literal
    }

    fn add(&mut self, value: &TokenValue) {
        match value {
            TokenValue::Hex(_) => self.hex += 1,
            TokenValue::Unit(_) => self.unit += 1,
            TokenValue::Reference(_) => self.reference += 1,
            TokenValue::Function(_) => self.function += 1,
            TokenValue::Literal(_) => self.literal += 1,
        }
    }
}

/// A validated token file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenDocument {
    pub tier: TokenTier,
    pub schema: Option<String>,
    pub description: Option<String>,
    pub root: BTreeMap<String, TokenNode>,
}

impl TokenDocument {
    pub fn stats(&self) -> TokenStats {
        let mut stats = TokenStats::default();
        let mut stack: Vec<&TokenNode> = self.root.values().collect();
        while let Some(node) = stack.pop() {
            match node {
                TokenNode::Leaf(value) => stats.add(value),
                TokenNode::Group(children) => stack.extend(children.values()),
            }
        }
        stats
    }

    /// Depth of the deepest leaf below the wrapper key (1 = direct child).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&TokenNode, usize)> = self.root.values().map(|n| (n, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let TokenNode::Group(children) = node {
                stack.extend(children.values().map(|n| (n, depth + 1)));
            }
        }
        deepest
    }
}

/// One structural failure, located by dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaIssue {
    pub path: String,
    pub message: String,
}

impl SchemaIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}
