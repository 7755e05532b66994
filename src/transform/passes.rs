use crate::config::Config;
use crate::syntax::Root;

pub mod bracket_mentions;
pub mod link_mentions;

/// One rewrite over the whole tree.
pub trait Pass {
    fn name(&self) -> &str;
    fn enabled(&self, config: &Config) -> bool;
    fn run(&self, root: &mut Root, config: &Config) -> PassStats;
}

/// Counters reported by a single pass run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Candidate nodes inspected (text nodes or links, depending on the pass).
    pub visited: usize,
    /// Candidates that were replaced.
    pub rewritten: usize,
    /// Annotation nodes created.
    pub mentions: usize,
}

/// Passes in execution order.
pub struct PassRegistry {
    passes: Vec<Box<dyn Pass>>,
}

impl PassRegistry {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn register(&mut self, pass: Box<dyn Pass>) {
        self.passes.push(pass);
    }

    pub fn passes(&self) -> &[Box<dyn Pass>] {
        &self.passes
    }
}

impl Default for PassRegistry {
    fn default() -> Self {
        Self::new()
    }
}
