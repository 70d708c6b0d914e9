pub mod config;
pub mod error;
pub mod html;
pub mod models;
pub mod torre;
pub mod analysis;
pub mod routes;
pub mod state;

pub use config::{Config, DistributionConfig, TorreEndpoints};
pub use error::{Error, Result};
pub use torre::{SearchPeople, TorreClient};
pub use analysis::DistributionEstimator;
pub use routes::build_router;
pub use state::AppState;
