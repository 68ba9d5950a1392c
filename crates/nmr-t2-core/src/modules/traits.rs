use super::engine::EngineOutput;
use crate::common::config::EngineConfig;
use crate::domain::NmrResult;

pub trait DecayEngine {
    fn run(&self, config: &EngineConfig) -> NmrResult<EngineOutput>;
}

impl<T> DecayEngine for &T
where
    T: DecayEngine + ?Sized,
{
    fn run(&self, config: &EngineConfig) -> NmrResult<EngineOutput> {
        (**self).run(config)
    }
}
