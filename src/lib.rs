pub mod simulation;
pub mod configuration;
pub mod view;
pub mod benchmark;

pub use simulation::states::{Body, Color, NVec2, System};
pub use simulation::params::{Parameters, AU};
pub use simulation::error::SimulationError;
pub use simulation::forces::Gravity;
pub use simulation::integrator::verlet_step;
pub use simulation::engine::Simulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use view::camera::Camera;
pub use view::controller::{Command, DisplayInfo, RenderBody, ViewController};

pub use benchmark::benchmark::{bench_gravity, bench_verlet};
