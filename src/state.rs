use std::sync::Arc;

use crate::analysis::DistributionEstimator;
use crate::config::{Config, DistributionConfig};
use crate::error::Result;
use crate::torre::TorreClient;

#[derive(Clone)]
pub struct AppState {
    pub torre: Arc<TorreClient>,
    pub estimator: Arc<DistributionEstimator>,
}

impl AppState {
    pub fn new(torre: Arc<TorreClient>, distribution: DistributionConfig) -> Self {
        let estimator = DistributionEstimator::new(torre.clone(), distribution);
        Self {
            torre,
            estimator: Arc::new(estimator),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let torre = Arc::new(TorreClient::from_config(config)?);
        Ok(Self::new(torre, DistributionConfig::from(config)))
    }
}
