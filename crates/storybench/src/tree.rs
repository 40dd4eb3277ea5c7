//! The navigation tree built from flattened module keys, and the path
//! resolution used by both interactive routing and static enumeration.

use serde::{Deserialize, Serialize};

/// A node of the navigation tree: a group (has children) or a leaf
/// (carries the module key of a story file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Display name (first character capitalized).
    pub name: String,
    /// URL path segment; matched case-insensitively against incoming paths.
    pub segment: String,
    /// Child nodes, for groups.
    pub children: Vec<TreeNode>,
    /// Module key into the loader map, for leaves.
    pub module_key: Option<String>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.module_key.is_some()
    }
}

/// Result of mapping URL path segments onto the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PathResolution<'a> {
    /// No segments: the welcome/index view.
    Index,
    /// The path names a group; a story still has to be picked.
    Group(&'a TreeNode),
    /// The path reaches a story file, with or without a variant segment.
    Story {
        node: &'a TreeNode,
        module_key: &'a str,
        export: Option<String>,
    },
    NotFound,
}

/// Build the tree from flattened, slash-joined module keys. Group nodes
/// are reused case-insensitively per level so keys sharing a prefix end up
/// under one branch; siblings are sorted alphabetically, case-insensitive.
pub(crate) fn build_tree<I>(keys: I) -> Vec<TreeNode>
where
    I: IntoIterator<Item = String>,
{
    let mut root: Vec<TreeNode> = Vec::new();

    for key in keys {
        let segments: Vec<&str> = key.split('/').filter(|s| !s.is_empty()).collect();
        let Some((last, dirs)) = segments.split_last() else {
            continue;
        };

        let mut level = &mut root;
        for dir in dirs {
            let position = level
                .iter()
                .position(|n| n.segment.eq_ignore_ascii_case(dir));
            let index = match position {
                Some(index) => index,
                None => {
                    level.push(TreeNode {
                        name: capitalize_first(dir),
                        segment: (*dir).to_string(),
                        children: Vec::new(),
                        module_key: None,
                    });
                    level.len() - 1
                }
            };
            level = &mut level[index].children;
        }

        level.push(TreeNode {
            name: capitalize_first(last),
            segment: (*last).to_string(),
            children: Vec::new(),
            module_key: Some(key.clone()),
        });
    }

    sort_nodes(&mut root);
    root
}

fn sort_nodes(nodes: &mut [TreeNode]) {
    nodes.sort_by_key(|n| n.name.to_lowercase());
    for node in nodes {
        sort_nodes(&mut node.children);
    }
}

/// Find the node an exact segment path points at, case-insensitively.
pub fn find_node<'a>(nodes: &'a [TreeNode], segments: &[String]) -> Option<&'a TreeNode> {
    let mut level = nodes;
    let mut found = None;

    for segment in segments {
        let node = level.iter().find(|n| n.segment.eq_ignore_ascii_case(segment))?;
        level = &node.children;
        found = Some(node);
    }

    found
}

/// Walk the tree along URL segments. The walk stops at the first leaf it
/// reaches; the next remaining segment, if any, is the export name
/// (further segments are ignored).
pub fn resolve_path<'a>(nodes: &'a [TreeNode], segments: &[String]) -> PathResolution<'a> {
    if segments.is_empty() {
        return PathResolution::Index;
    }

    let mut level = nodes;
    for (index, segment) in segments.iter().enumerate() {
        let Some(node) = level.iter().find(|n| n.segment.eq_ignore_ascii_case(segment)) else {
            return PathResolution::NotFound;
        };

        if let Some(module_key) = &node.module_key {
            return PathResolution::Story {
                node,
                module_key,
                export: segments.get(index + 1).cloned(),
            };
        }

        if index == segments.len() - 1 {
            return if node.children.is_empty() {
                PathResolution::NotFound
            } else {
                PathResolution::Group(node)
            };
        }

        level = &node.children;
    }

    PathResolution::NotFound
}

/// Filter the tree on a free-text query: a node stays visible when its
/// name matches, or when it is an ancestor of a matching descendant.
pub fn filter_tree(nodes: &[TreeNode], query: &str) -> Vec<TreeNode> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return nodes.to_vec();
    }
    filter_nodes(nodes, &query)
}

fn filter_nodes(nodes: &[TreeNode], query: &str) -> Vec<TreeNode> {
    let mut result = Vec::new();

    for node in nodes {
        let name_matches = node.name.to_lowercase().contains(query);

        if !node.children.is_empty() {
            let kept = filter_nodes(&node.children, query);
            if !kept.is_empty() {
                result.push(TreeNode {
                    children: kept,
                    ..node.clone()
                });
            } else if name_matches {
                // The group itself matches: keep its whole subtree.
                result.push(node.clone());
            }
        } else if name_matches {
            result.push(node.clone());
        }
    }

    result
}

/// Number of story-file leaves in the forest.
pub fn count_leaves(nodes: &[TreeNode]) -> usize {
    nodes
        .iter()
        .map(|n| usize::from(n.is_leaf()) + count_leaves(&n.children))
        .sum()
}

/// Every leaf with the segment path leading to it, depth-first.
pub(crate) fn collect_leaves(nodes: &[TreeNode]) -> Vec<(Vec<String>, String)> {
    fn walk(nodes: &[TreeNode], prefix: &[String], out: &mut Vec<(Vec<String>, String)>) {
        for node in nodes {
            let mut path = prefix.to_vec();
            path.push(node.segment.clone());
            if let Some(key) = &node.module_key {
                out.push((path.clone(), key.clone()));
            }
            walk(&node.children, &path, out);
        }
    }

    let mut out = Vec::new();
    walk(nodes, &[], &mut out);
    out
}

/// Join path segments under a base path into a lowercase URL.
pub fn segments_to_url(base_path: &str, segments: &[String]) -> String {
    let joined = segments
        .iter()
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/{}", base_path.trim_end_matches('/'), joined)
}

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
