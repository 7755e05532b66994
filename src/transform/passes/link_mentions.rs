//! Fuses a trailing `@` marker and the link that follows it into a mention.
//!
//! Markdown renderers turn `@[label](id)` into a literal `@` followed by
//! `<a href="id">label</a>`, so the marker and the link arrive as two
//! sibling nodes.

use crate::config::Config;
use crate::mention::{MARKER, Mention};
use crate::syntax::{Element, Node, Root};
use crate::transform::passes::{Pass, PassStats};

/// Decides whether `link`, preceded by `previous`, is a linkified mention.
///
/// Requires `previous` to be a text node ending in the marker, and `link` to
/// be an `a` element with a non-empty `href` whose first child is non-empty
/// text.
pub fn link_mention(previous: &Node, link: &Element) -> Option<Mention> {
    if !link.is("a") {
        return None;
    }

    let marker_text = previous.as_text()?;
    if !marker_text.ends_with(MARKER) {
        return None;
    }

    let href = link.properties.get("href").filter(|href| !href.is_empty())?;
    let label = link.first_child_text().filter(|label| !label.is_empty())?;

    Some(Mention::new(href, label))
}

pub struct LinkMentions;

impl Pass for LinkMentions {
    fn name(&self) -> &str {
        "link-mentions"
    }

    fn enabled(&self, config: &Config) -> bool {
        config.link_mentions
    }

    fn run(&self, root: &mut Root, config: &Config) -> PassStats {
        let mut stats = PassStats::default();
        fuse_children(&mut root.children, config, &mut stats);
        stats
    }
}

fn fuse_children(children: &mut Vec<Node>, config: &Config, stats: &mut PassStats) {
    let mut index = 0;

    while index < children.len() {
        let mention = match &children[index] {
            Node::Element(element) if element.is("a") => {
                stats.visited += 1;
                index
                    .checked_sub(1)
                    .and_then(|prev| link_mention(&children[prev], element))
            }
            _ => None,
        };

        let Some(mention) = mention else {
            if let Node::Element(element) = &mut children[index] {
                fuse_children(&mut element.children, config, stats);
            }
            index += 1;
            continue;
        };

        log::trace!("Link mention -> {}", mention.id);
        let prev = index - 1;
        if let Node::Text(text) = &mut children[prev] {
            text.value.pop();
        }
        children[index] = mention.into_node();
        stats.rewritten += 1;
        stats.mentions += 1;

        if config.prune_empty_text && children[prev].as_text() == Some("") {
            // The annotation shifts into `prev`; `index` now names its successor.
            children.remove(prev);
        } else {
            index += 1;
        }
    }
}
