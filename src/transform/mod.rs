pub mod passes;
pub mod runner;

pub use passes::{Pass, PassRegistry, PassStats};
pub use runner::{TransformRunner, TransformStats};

use crate::config::Config;
use crate::syntax::Root;

/// Rewrites every mention in the tree using the default configuration.
///
/// Bracket mentions (`@[label](id)`) are rewritten first across the whole
/// tree, then `@` markers followed by links are fused.
pub fn apply_mention_transform(root: &mut Root) {
    apply_mention_transform_with(root, &Config::default());
}

/// Rewrites mentions with the passes enabled in `config`.
pub fn apply_mention_transform_with(root: &mut Root, config: &Config) -> TransformStats {
    let runner = TransformRunner::new(default_registry());
    runner.run(root, config)
}

/// The built-in passes, in the order they must run.
fn default_registry() -> PassRegistry {
    let mut registry = PassRegistry::new();
    registry.register(Box::new(passes::bracket_mentions::BracketMentions));
    registry.register(Box::new(passes::link_mentions::LinkMentions));
    registry
}
