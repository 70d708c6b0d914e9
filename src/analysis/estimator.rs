use std::sync::Arc;
use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::analysis::aggregator::DistributionCount;
use crate::analysis::classifier::ProficiencyClassifier;
use crate::analysis::normalizer::extract_base_skill;
use crate::analysis::planner::{plan_queries, SkillQuery};
use crate::config::DistributionConfig;
use crate::models::DistributionResult;
use crate::torre::SearchPeople;

pub struct DistributionEstimator {
    search: Arc<dyn SearchPeople>,
    classifier: ProficiencyClassifier,
    config: DistributionConfig,
}

impl DistributionEstimator {
    pub fn new(search: Arc<dyn SearchPeople>, config: DistributionConfig) -> Self {
        Self::with_classifier(search, ProficiencyClassifier::new(), config)
    }

    pub fn with_classifier(
        search: Arc<dyn SearchPeople>,
        classifier: ProficiencyClassifier,
        config: DistributionConfig,
    ) -> Self {
        Self {
            search,
            classifier,
            config,
        }
    }

    /// Runs every search variant and folds the classified profiles into one
    /// distribution. Never fails: a variant whose search fails adds nothing.
    pub async fn estimate_distribution(&self, skill: &str) -> DistributionResult {
        tracing::info!("Analyzing skill proficiency distribution for: {}", skill);

        let queries = plan_queries(skill);
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit.max(1)));

        let variant_futures = queries.iter().map(|query| {
            let sem = semaphore.clone();
            async move {
                let _permit = sem.acquire().await.ok()?;
                Some(self.run_variant(query).await)
            }
        });

        let mut counts = DistributionCount::new();
        for partial in join_all(variant_futures).await.into_iter().flatten() {
            counts.merge(&partial);
        }

        let result = counts.into_result(skill);
        tracing::info!(
            "Distribution for '{}': {} profiles across {} levels",
            skill,
            result.total_profiles,
            result.entries.len()
        );
        for entry in &result.entries {
            tracing::debug!(
                "  {} - {}: {} ({}%)",
                skill,
                entry.level,
                entry.count,
                entry.percentage
            );
        }

        result
    }

    async fn run_variant(&self, query: &SkillQuery) -> DistributionCount {
        let profiles = self
            .search
            .search(&query.display_term, query.result_cap, query.result_offset)
            .await;

        let base_skill = if self.config.rederive_base_skill {
            extract_base_skill(&query.display_term)
        } else {
            query.base_skill.clone()
        };

        let counts: DistributionCount = profiles
            .iter()
            .map(|profile| {
                let bucket = self.classifier.classify(profile, &base_skill);
                tracing::trace!(
                    "Profile '{}' -> {}",
                    profile.name().ok().flatten().unwrap_or("Unknown"),
                    bucket
                );
                bucket
            })
            .collect();

        tracing::debug!("Search '{}' -> {} profiles", query.display_term, counts.total());
        counts
    }
}
