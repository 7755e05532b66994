//! Rewrites `@[display](id)` occurrences inside text nodes.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::mention::Mention;
use crate::syntax::{Node, Root};
use crate::transform::passes::{Pass, PassStats};

// Exclusion classes only, so matching stays linear in the input length.
static MENTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@\[([^\]]+)\]\(([^)]+)\)").expect("mention pattern is a valid regex")
});

/// One occurrence of the bracket syntax within a text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionMatch<'a> {
    pub full_match: &'a str,
    pub display_text: &'a str,
    pub identifier: &'a str,
    /// Byte offset of the `@`.
    pub start: usize,
    /// Byte offset one past the closing `)`.
    pub end: usize,
}

/// Finds all non-overlapping bracket mentions, leftmost first.
pub fn find_mentions(value: &str) -> Vec<MentionMatch<'_>> {
    MENTION_PATTERN
        .captures_iter(value)
        .filter_map(|cap| {
            let full = cap.get(0)?;
            Some(MentionMatch {
                full_match: full.as_str(),
                display_text: cap.get(1)?.as_str(),
                identifier: cap.get(2)?.as_str(),
                start: full.start(),
                end: full.end(),
            })
        })
        .collect()
}

/// Splits a text value into plain text runs and mention annotations.
///
/// Returns `None` when the value holds no mention, so callers can leave the
/// original node alone. Empty runs between adjacent mentions are dropped.
pub fn split_mentions(value: &str) -> Option<Vec<Node>> {
    let matches = find_mentions(value);
    if matches.is_empty() {
        return None;
    }

    let mut nodes = Vec::with_capacity(matches.len() * 2 + 1);
    let mut last_end = 0;

    for m in matches {
        if m.start > last_end {
            nodes.push(Node::text(&value[last_end..m.start]));
        }
        log::trace!("Bracket mention {:?} -> {}", m.full_match, m.identifier);
        nodes.push(Mention::new(m.identifier, m.display_text).into_node());
        last_end = m.end;
    }

    if last_end < value.len() {
        nodes.push(Node::text(&value[last_end..]));
    }

    Some(nodes)
}

pub struct BracketMentions;

impl Pass for BracketMentions {
    fn name(&self) -> &str {
        "bracket-mentions"
    }

    fn enabled(&self, config: &Config) -> bool {
        config.bracket_mentions
    }

    fn run(&self, root: &mut Root, _config: &Config) -> PassStats {
        let mut stats = PassStats::default();
        rewrite_children(&mut root.children, &mut stats);
        stats
    }
}

fn rewrite_children(children: &mut Vec<Node>, stats: &mut PassStats) {
    let mut index = 0;

    while index < children.len() {
        let replacement = match &mut children[index] {
            Node::Text(text) => {
                stats.visited += 1;
                split_mentions(&text.value)
            }
            Node::Element(element) => {
                rewrite_children(&mut element.children, stats);
                None
            }
            Node::Comment(_) => None,
        };

        match replacement {
            Some(run) => {
                let len = run.len();
                stats.rewritten += 1;
                stats.mentions += run.iter().filter(|node| node.as_element().is_some()).count();
                children.splice(index..=index, run);
                // Skip the inserted run; synthesized text is never rescanned.
                index += len;
            }
            None => index += 1,
        }
    }
}
