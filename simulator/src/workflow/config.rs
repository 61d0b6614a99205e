use anyhow::Context;
use fmcwcore::config::{RadarConfig, RadarParameters};
use fmcwcore::processing::DEFAULT_NOISE_LEVEL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Dataset workflow settings, loadable from YAML.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub radar: RadarParameters,
    pub noise_level: f64,
    pub seed: u64,
    pub samples_per_class: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            radar: RadarParameters::default(),
            noise_level: DEFAULT_NOISE_LEVEL,
            seed: 0,
            samples_per_class: 4,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(num_chirps: usize, noise_level: f64, seed: u64) -> Self {
        Self {
            radar: RadarParameters {
                num_chirps,
                ..Default::default()
            },
            noise_level,
            seed,
            ..Default::default()
        }
    }

    pub fn radar_config(&self) -> anyhow::Result<RadarConfig> {
        RadarConfig::from_parameters(&self.radar).context("validating radar parameters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_radar_config() {
        let cfg = WorkflowConfig::from_args(32, 0.0, 7);
        let radar = cfg.radar_config().unwrap();
        assert_eq!(radar.n_chirps, 32);
        assert_eq!(radar.n_samples, 600);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"radar:\n  sample_rate: 5.0e6\n  num_chirps: 64\nnoise_level: 0.2\nseed: 42\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.samples_per_class, 4);
        assert_eq!(cfg.radar.carrier_frequency, 77e9);

        let radar = cfg.radar_config().unwrap();
        assert_eq!(radar.n_samples, 300);
        assert_eq!(radar.n_chirps, 64);
    }

    #[test]
    fn invalid_radar_parameters_surface_as_errors() {
        let cfg = WorkflowConfig::from_args(0, 0.1, 0);
        let err = cfg.radar_config().unwrap_err();
        assert!(format!("{:#}", err).contains("num_chirps"));
    }
}
