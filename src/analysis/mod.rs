pub mod planner;
pub mod normalizer;
pub mod classifier;
pub mod aggregator;
pub mod estimator;

pub use planner::{plan_queries, SkillQuery};
pub use normalizer::extract_base_skill;
pub use classifier::{FixedJitter, JitterSource, ProficiencyClassifier, ThreadRngJitter};
pub use aggregator::DistributionCount;
pub use estimator::DistributionEstimator;
