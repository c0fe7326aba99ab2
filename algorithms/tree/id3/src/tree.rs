use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use arbor_helpers::Value;

/// A learned decision tree.
///
/// A tree is either a leaf holding a class label or an internal node that
/// tests one named feature and owns one subtree per observed value. Trees
/// are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionTree {
    Leaf(Value),
    Node(Node),
}

/// An internal node: the tested feature and one child per observed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    feature: String,
    children: BTreeMap<Value, DecisionTree>,
}

impl Node {
    pub fn new(feature: impl Into<String>, children: BTreeMap<Value, DecisionTree>) -> Self {
        Self {
            feature: feature.into(),
            children,
        }
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn children(&self) -> &BTreeMap<Value, DecisionTree> {
        &self.children
    }

    pub fn child(&self, value: &Value) -> Option<&DecisionTree> {
        self.children.get(value)
    }
}

impl DecisionTree {
    pub fn leaf(label: impl Into<Value>) -> Self {
        DecisionTree::Leaf(label.into())
    }

    /// An internal node built from `(value, subtree)` branches. A repeated
    /// value keeps the last subtree given for it.
    pub fn node<I, V>(feature: impl Into<String>, branches: I) -> Self
    where
        I: IntoIterator<Item = (V, DecisionTree)>,
        V: Into<Value>,
    {
        DecisionTree::Node(Node::new(
            feature,
            branches.into_iter().map(|(v, t)| (v.into(), t)).collect(),
        ))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, DecisionTree::Leaf(_))
    }

    /// The label of a leaf.
    pub fn label(&self) -> Option<&Value> {
        match self {
            DecisionTree::Leaf(label) => Some(label),
            DecisionTree::Node(_) => None,
        }
    }

    /// The feature tested by an internal node.
    pub fn feature(&self) -> Option<&str> {
        match self {
            DecisionTree::Leaf(_) => None,
            DecisionTree::Node(node) => Some(node.feature()),
        }
    }

    pub fn children(&self) -> Option<&BTreeMap<Value, DecisionTree>> {
        match self {
            DecisionTree::Leaf(_) => None,
            DecisionTree::Node(node) => Some(node.children()),
        }
    }

    /// Number of decision levels below the root.
    ///
    /// A node whose children are all leaves has height 1; a bare leaf has height 0.
    pub fn height(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 0,
            DecisionTree::Node(node) => node
                .children
                .values()
                .map(|child| 1 + child.height())
                .max()
                .unwrap_or(0),
        }
    }

    /// Number of leaves. A bare leaf counts as one.
    pub fn leaf_count(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 1,
            DecisionTree::Node(node) => node.children.values().map(DecisionTree::leaf_count).sum(),
        }
    }

    /// The distinct feature names tested anywhere in the tree, depth first.
    pub fn features(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_features(&mut out);
        out
    }

    fn collect_features<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let DecisionTree::Node(node) = self {
            if !out.contains(&node.feature()) {
                out.push(node.feature());
            }
            for child in node.children.values() {
                child.collect_features(out);
            }
        }
    }

    fn render(&self, f: &mut Formatter<'_>, prefix: &str) -> std::fmt::Result {
        match self {
            DecisionTree::Leaf(label) => writeln!(f, "{}", label),
            DecisionTree::Node(node) => {
                writeln!(f, "{}", node.feature)?;
                let last = node.children.len().saturating_sub(1);
                for (i, (value, child)) in node.children.iter().enumerate() {
                    let (branch, indent) = if i == last {
                        ("└── ", "    ")
                    } else {
                        ("├── ", "│   ")
                    };
                    write!(f, "{}{}{} => ", prefix, branch, value)?;
                    child.render(f, &format!("{}{}", prefix, indent))?;
                }
                Ok(())
            }
        }
    }
}

impl Display for DecisionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.render(f, "")
    }
}
