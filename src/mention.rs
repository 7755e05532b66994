//! The normalized mention annotation shared by every pass.

use crate::syntax::{Element, Node, Properties};

/// Character that introduces a mention, both in the bracket syntax and in
/// front of a linkified mention.
pub const MARKER: char = '@';

pub const MENTION_TAG: &str = "span";
pub const DATA_TYPE: &str = "data-type";
pub const DATA_ID: &str = "data-id";
pub const MENTION_TYPE: &str = "mention";

/// A recognized reference to an entity: an opaque id plus its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub id: String,
    pub label: String,
}

impl Mention {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Builds the annotation node:
    /// `<span data-type="mention" data-id="{id}">@{label}</span>`.
    pub fn into_node(self) -> Node {
        let mut properties = Properties::new();
        properties.insert(DATA_TYPE, MENTION_TYPE);
        properties.insert(DATA_ID, self.id);

        Node::element(
            MENTION_TAG,
            properties,
            vec![Node::text(format!("{MARKER}{}", self.label))],
        )
    }

    /// Reads a mention back out of an annotation node.
    pub fn from_element(element: &Element) -> Option<Self> {
        if !element.is(MENTION_TAG) || element.properties.get(DATA_TYPE) != Some(MENTION_TYPE) {
            return None;
        }
        let id = element.properties.get(DATA_ID)?;
        let label = element.first_child_text()?.strip_prefix(MARKER)?;
        Some(Self::new(id, label))
    }
}

/// Collects every mention annotation in the tree, in document order.
pub fn collect_mentions(nodes: &[Node]) -> Vec<Mention> {
    let mut mentions = Vec::new();

    fn walk(nodes: &[Node], mentions: &mut Vec<Mention>) {
        for node in nodes {
            if let Node::Element(element) = node {
                match Mention::from_element(element) {
                    Some(mention) => mentions.push(mention),
                    None => walk(&element.children, mentions),
                }
            }
        }
    }

    walk(nodes, &mut mentions);
    mentions
}
