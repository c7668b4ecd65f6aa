//! Feature usage across compiled snippets.
//!
//! A bundler uses the report to decide which runtime pieces to ship: the
//! commands that occur, the block forms, and positional expressions.

use std::collections::{BTreeMap, BTreeSet};

use hyperfixi_compiler::AstNode;
use hyperfixi_compiler::visitor::{AstVisitor, walk_ast};
use serde::{Deserialize, Serialize};

const SUSPENDING: &[&str] = &["wait", "fetch", "call"];

/// Features one snippet (or a group of snippets) uses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    /// Canonical command names.
    pub commands: BTreeSet<String>,
    /// `if`, `repeat`, `for`, `while`, `fetch`, `async`.
    pub blocks: BTreeSet<String>,
    /// Positional keywords.
    pub positional: BTreeSet<String>,
}

impl Usage {
    /// Collects usage from an AST. Call it before optimization so unrolled
    /// loops still count as `repeat`.
    #[must_use]
    pub fn from_ast(ast: &AstNode) -> Self {
        let mut usage = Self::default();
        walk_ast(&mut usage, ast);
        usage
    }

    /// Adds everything in `other`.
    pub fn merge(&mut self, other: &Self) {
        self.commands.extend(other.commands.iter().cloned());
        self.blocks.extend(other.blocks.iter().cloned());
        self.positional.extend(other.positional.iter().cloned());
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.blocks.is_empty() && self.positional.is_empty()
    }
}

impl AstVisitor for Usage {
    fn enter_node(&mut self, node: &AstNode, _depth: usize) {
        let block = match node {
            AstNode::Command { name, .. } => {
                self.commands.insert(name.clone());
                if name == "fetch" {
                    self.blocks.insert("fetch".to_string());
                }
                if SUSPENDING.contains(&name.as_str()) {
                    self.blocks.insert("async".to_string());
                }
                return;
            }
            AstNode::Positional { position, .. } => {
                self.positional.insert(position.clone());
                return;
            }
            AstNode::If { .. } => "if",
            AstNode::Repeat { .. } => "repeat",
            AstNode::Foreach { .. } => "for",
            AstNode::While { .. } => "while",
            _ => return,
        };
        self.blocks.insert(block.to_string());
    }
}

/// Usage merged per file and across a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    /// Per source file.
    pub files: BTreeMap<String, Usage>,
    /// Everything.
    pub total: Usage,
    /// Snippets recorded.
    pub snippets: usize,
}

impl UsageReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one snippet's usage under `file`.
    pub fn record(&mut self, file: &str, usage: &Usage) {
        self.files.entry(file.to_string()).or_default().merge(usage);
        self.total.merge(usage);
        self.snippets += 1;
    }

    /// Folds another report into this one.
    pub fn merge(&mut self, other: &Self) {
        for (file, usage) in &other.files {
            self.files.entry(file.clone()).or_default().merge(usage);
        }
        self.total.merge(&other.total);
        self.snippets += other.snippets;
    }
}
