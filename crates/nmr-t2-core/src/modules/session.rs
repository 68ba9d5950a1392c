use super::engine::{Engine, EngineOutput};
use super::traits::DecayEngine;
use crate::common::config::EngineConfig;
use crate::domain::NmrResult;

/// Holds the most recent successful pass. A failed recomputation leaves it
/// untouched so a display can keep showing the last good results.
#[derive(Debug, Default)]
pub struct EngineSession<E = Engine> {
    engine: E,
    last_good: Option<EngineOutput>,
}

impl<E: DecayEngine> EngineSession<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            last_good: None,
        }
    }

    pub fn recompute(&mut self, config: &EngineConfig) -> NmrResult<&EngineOutput> {
        let output = self.engine.run(config)?;
        Ok(&*self.last_good.insert(output))
    }

    pub fn last_good(&self) -> Option<&EngineOutput> {
        self.last_good.as_ref()
    }

    pub fn clear(&mut self) {
        self.last_good = None;
    }
}
