pub mod run;
pub mod tracing;
pub mod wiring;

pub use run::run_demo;
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_demo, DemoScenario, DemoWiring};
