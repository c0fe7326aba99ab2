//! Saving and loading trees as self-describing JSON.
//!
//! A saved tree is wrapped in an envelope naming the format and its version.
//! Nodes are stored as a flat table in pre-order; the root is entry 0 and
//! each branch points at its subtree by index, so the JSON nesting depth
//! does not grow with the depth of the tree:
//!
//! ```json
//! {"format":"arbor-id3","version":2,"nodes":[
//!   {"kind":"node","feature":"flippers","branches":[{"value":0,"child":1},{"value":1,"child":2}]},
//!   {"kind":"leaf","label":"no"},
//!   {"kind":"leaf","label":"yes"}]}
//! ```
//!
//! A valid table references every entry except the root exactly once, and
//! always from an earlier entry.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use arbor_helpers::Value;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Id3Error;
use crate::tree::{DecisionTree, Node};

pub const FORMAT_NAME: &str = "arbor-id3";
pub const FORMAT_VERSION: u32 = 2;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    format: String,
    version: u32,
    nodes: Vec<NodeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum NodeRecord {
    Leaf {
        label: Value,
    },
    Node {
        feature: String,
        branches: Vec<BranchRecord>,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BranchRecord {
    value: Value,
    child: usize,
}

/// Appends `tree` to `nodes` in pre-order and returns the index of its root.
fn flatten(tree: &DecisionTree, nodes: &mut Vec<NodeRecord>) -> usize {
    let index = nodes.len();
    match tree {
        DecisionTree::Leaf(label) => nodes.push(NodeRecord::Leaf {
            label: label.clone(),
        }),
        DecisionTree::Node(node) => {
            nodes.push(NodeRecord::Node {
                feature: node.feature().to_owned(),
                branches: Vec::with_capacity(node.children().len()),
            });
            for (value, subtree) in node.children() {
                let child = flatten(subtree, nodes);
                if let NodeRecord::Node { branches, .. } = &mut nodes[index] {
                    branches.push(BranchRecord {
                        value: value.clone(),
                        child,
                    });
                }
            }
        }
    }
    index
}

/// Rebuilds a tree from its node table, last entry first, so every child
/// exists before the node that owns it.
fn unflatten(nodes: Vec<NodeRecord>) -> Result<DecisionTree, Id3Error> {
    let corrupt = |msg: String| Id3Error::CorruptTreeData(msg);
    let count = nodes.len();
    let mut built: Vec<Option<DecisionTree>> = (0..count).map(|_| None).collect();

    for (index, record) in nodes.into_iter().enumerate().rev() {
        let tree = match record {
            NodeRecord::Leaf { label } => DecisionTree::Leaf(label),
            NodeRecord::Node { feature, branches } => {
                if branches.is_empty() {
                    return Err(corrupt(format!("node {:?} has no branches", feature)));
                }
                let mut children = BTreeMap::new();
                for BranchRecord { value, child } in branches {
                    if child <= index || child >= count {
                        return Err(corrupt(format!(
                            "node {:?} points at entry {} from entry {}",
                            feature, child, index
                        )));
                    }
                    let subtree = built[child].take().ok_or_else(|| {
                        corrupt(format!("entry {} is referenced more than once", child))
                    })?;
                    if children.contains_key(&value) {
                        return Err(corrupt(format!(
                            "node {:?} has two branches for value {}",
                            feature, value
                        )));
                    }
                    children.insert(value, subtree);
                }
                DecisionTree::Node(Node::new(feature, children))
            }
        };
        built[index] = Some(tree);
    }

    let mut entries = built.into_iter();
    let root = entries
        .next()
        .flatten()
        .ok_or_else(|| corrupt("no nodes".to_owned()))?;
    if entries.any(|entry| entry.is_some()) {
        return Err(corrupt("unreferenced nodes".to_owned()));
    }
    Ok(root)
}

fn envelope(tree: &DecisionTree) -> Envelope {
    let mut nodes = Vec::new();
    flatten(tree, &mut nodes);
    Envelope {
        format: FORMAT_NAME.to_owned(),
        version: FORMAT_VERSION,
        nodes,
    }
}

fn corrupt(err: serde_json::Error) -> Id3Error {
    Id3Error::CorruptTreeData(err.to_string())
}

/// Writes `tree` as JSON to `writer`.
///
/// # Errors
///
/// Returns `Id3Error::Write` if the writer fails.
pub fn to_writer<W: Write>(tree: &DecisionTree, writer: W) -> Result<(), Id3Error> {
    serde_json::to_writer(writer, &envelope(tree)).map_err(Id3Error::Write)
}

/// Reads a tree written by [`to_writer`].
///
/// # Errors
///
/// Returns `Id3Error::CorruptTreeData` if the input is not valid JSON, is
/// truncated, names another format or version, or describes an invalid tree.
pub fn from_reader<R: Read>(reader: R) -> Result<DecisionTree, Id3Error> {
    let envelope: Envelope = serde_json::from_reader(reader).map_err(corrupt)?;
    from_envelope(envelope)
}

/// Serializes `tree` to a JSON string.
pub fn to_string(tree: &DecisionTree) -> Result<String, Id3Error> {
    serde_json::to_string(&envelope(tree)).map_err(Id3Error::Write)
}

pub fn from_str(data: &str) -> Result<DecisionTree, Id3Error> {
    let envelope: Envelope = serde_json::from_str(data).map_err(corrupt)?;
    from_envelope(envelope)
}

fn from_envelope(envelope: Envelope) -> Result<DecisionTree, Id3Error> {
    if envelope.format != FORMAT_NAME {
        return Err(Id3Error::CorruptTreeData(format!(
            "unknown format {:?}",
            envelope.format
        )));
    }
    if envelope.version != FORMAT_VERSION {
        return Err(Id3Error::CorruptTreeData(format!(
            "unsupported version {}",
            envelope.version
        )));
    }
    unflatten(envelope.nodes)
}

/// Saves `tree` to the file at `path`, replacing any existing file.
pub fn save(tree: &DecisionTree, path: impl AsRef<Path>) -> Result<(), Id3Error> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| Id3Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    to_writer(tree, &mut writer).map_err(|e| match e {
        Id3Error::Write(source) => io_err(source.into()),
        other => other,
    })?;
    writer.flush().map_err(io_err)?;
    info!(path = %path.display(), leaves = tree.leaf_count(), "saved decision tree");
    Ok(())
}

/// Loads a tree saved with [`save`].
///
/// # Errors
///
/// Returns `Id3Error::NotFound` if `path` does not exist and
/// `Id3Error::CorruptTreeData` if its contents are not a valid tree.
pub fn load(path: impl AsRef<Path>) -> Result<DecisionTree, Id3Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Id3Error::NotFound(path.to_path_buf()),
        _ => Id3Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let tree = from_reader(BufReader::new(file))?;
    info!(path = %path.display(), leaves = tree.leaf_count(), "loaded decision tree");
    Ok(tree)
}
