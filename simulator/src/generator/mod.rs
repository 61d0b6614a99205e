pub mod scenario;
pub mod template;

pub use scenario::{get_random_scenario, random_scenario, ScenarioKind};
pub use template::ClutterTemplate;
