use crate::generator::scenario::{random_scenario, ScenarioKind};
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use fmcwcore::config::RadarConfig;
use fmcwcore::prelude::{RangeDopplerMap, Target};
use fmcwcore::processing::{magnitude_db, synthesize_frame, RangeDopplerProcessor};
use log::{debug, info};
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// One labelled sample produced by the workflow.
#[derive(Debug)]
pub struct WorkflowResult {
    pub kind: ScenarioKind,
    pub label: usize,
    pub targets: Vec<Target>,
    pub range_doppler: RangeDopplerMap,
    pub power_db: Array2<f64>,
}

/// Drives scenario generation, cube synthesis and range-Doppler processing.
#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    radar: RadarConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> anyhow::Result<Self> {
        let radar = config.radar_config()?;
        Ok(Self { config, radar })
    }

    pub fn radar(&self) -> &RadarConfig {
        &self.radar
    }

    pub fn execute<R: Rng>(
        &self,
        kind: ScenarioKind,
        rng: &mut R,
    ) -> anyhow::Result<WorkflowResult> {
        let mut processor = RangeDopplerProcessor::new();
        self.execute_with(&mut processor, kind, rng)
    }

    fn execute_with<R: Rng>(
        &self,
        processor: &mut RangeDopplerProcessor,
        kind: ScenarioKind,
        rng: &mut R,
    ) -> anyhow::Result<WorkflowResult> {
        let targets = random_scenario(kind, rng);
        let cube = synthesize_frame(&self.radar, &targets, self.config.noise_level, rng)
            .with_context(|| format!("synthesizing {} cube", kind))?;
        let range_doppler = processor
            .process(cube.view())
            .with_context(|| format!("processing {} cube", kind))?;
        let power_db = magnitude_db(&range_doppler);

        debug!("{} scene with {} targets", kind, targets.len());

        Ok(WorkflowResult {
            kind,
            label: kind.class_index(),
            targets,
            range_doppler,
            power_db,
        })
    }

    /// `samples_per_class` results for every scenario kind, seeded from the config.
    pub fn generate_dataset(&self) -> anyhow::Result<Vec<WorkflowResult>> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut processor = RangeDopplerProcessor::new();
        let mut results =
            Vec::with_capacity(ScenarioKind::ALL.len() * self.config.samples_per_class);

        for kind in ScenarioKind::ALL {
            for _ in 0..self.config.samples_per_class {
                results.push(self.execute_with(&mut processor, kind, &mut rng)?);
            }
            info!("generated {} {} samples", self.config.samples_per_class, kind);
        }

        processor.cleanup();
        Ok(results)
    }
}
