use std::collections::HashSet;

use crate::document::Node;

/// Include/exclude policy over node ids.
///
/// An excluded node is dropped together with its whole subtree. When an
/// include set is given, only its members are yielded, but their ancestors
/// are still walked so nested members stay reachable. Exclusion wins when
/// an id is in both sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFilter {
    pub including: Option<HashSet<String>>,
    pub excluding: Option<HashSet<String>>,
}
impl NodeFilter {
    pub fn new<I, E>(including: Option<I>, excluding: Option<E>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        NodeFilter {
            including: including.map(|ids| ids.into_iter().map(Into::into).collect()),
            excluding: excluding.map(|ids| ids.into_iter().map(Into::into).collect()),
        }
    }
    pub fn including<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        NodeFilter {
            including: Some(ids.into_iter().map(Into::into).collect()),
            excluding: None,
        }
    }
    pub fn excluding<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        NodeFilter {
            including: None,
            excluding: Some(ids.into_iter().map(Into::into).collect()),
        }
    }
    pub fn is_excluded(&self, id: &str) -> bool {
        self.excluding
            .as_ref()
            .map_or(false, |excluding| excluding.contains(id))
    }
    pub fn is_selected(&self, id: &str) -> bool {
        match &self.including {
            Some(including) if !including.is_empty() => including.contains(id),
            _ => true,
        }
    }
}

/// Depth-first, pre-order walk over a node tree yielding the nodes a
/// [`NodeFilter`] selects. Lazy: nothing below the last yielded node is
/// visited until the next call.
pub struct Nodes<'a> {
    stack: Vec<&'a Node>,
    filter: &'a NodeFilter,
}
impl<'a> Nodes<'a> {
    pub fn new(root: &'a Node, filter: &'a NodeFilter) -> Self {
        Nodes {
            stack: vec![root],
            filter,
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        while let Some(node) = self.stack.pop() {
            if self.filter.is_excluded(&node.id) {
                continue;
            }
            self.stack.extend(node.children.iter().rev());
            if self.filter.is_selected(&node.id) {
                return Some(node);
            }
        }
        None
    }
}

/// Nodes of the tree rooted at `root` selected by `filter`.
pub fn extract_nodes<'a>(root: &'a Node, filter: &'a NodeFilter) -> Nodes<'a> {
    Nodes::new(root, filter)
}
