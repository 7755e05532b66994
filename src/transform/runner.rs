use crate::config::Config;
use crate::syntax::Root;
use crate::transform::passes::{PassRegistry, PassStats};

/// Per-pass counters from one transform run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub passes: Vec<(String, PassStats)>,
}

impl TransformStats {
    pub fn get(&self, name: &str) -> Option<PassStats> {
        self.passes
            .iter()
            .find(|(pass, _)| pass == name)
            .map(|(_, stats)| *stats)
    }

    /// Total annotation nodes created across all passes.
    pub fn mentions(&self) -> usize {
        self.passes.iter().map(|(_, stats)| stats.mentions).sum()
    }
}

pub struct TransformRunner {
    registry: PassRegistry,
}

impl TransformRunner {
    pub fn new(registry: PassRegistry) -> Self {
        Self { registry }
    }

    /// Runs every enabled pass to completion, one after another.
    pub fn run(&self, root: &mut Root, config: &Config) -> TransformStats {
        let mut stats = TransformStats::default();

        for pass in self.registry.passes() {
            if !pass.enabled(config) {
                log::debug!("Skipping disabled pass: {}", pass.name());
                continue;
            }

            log::debug!("Running pass: {}", pass.name());
            let pass_stats = pass.run(root, config);
            log::debug!(
                "Pass {} rewrote {}/{} candidate(s), created {} mention(s)",
                pass.name(),
                pass_stats.rewritten,
                pass_stats.visited,
                pass_stats.mentions
            );
            stats.passes.push((pass.name().to_string(), pass_stats));
        }

        stats
    }
}
