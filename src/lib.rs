// NDRT HUD library
// Secondary-task text presentation and takeover-request handling for the ego vehicle

pub mod cli;
pub mod cockpit;
pub mod comm;
pub mod config;
pub mod dash;
pub mod io;
pub mod logging;
pub mod resource;
pub mod sound;
pub mod text;
pub mod time;
pub mod tor;

pub use cli::Cli;
pub use cockpit::{CockpitFrame, EgoCockpit, VehicleInputs};
pub use config::Options;
pub use logging::LogLevel;
