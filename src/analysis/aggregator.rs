use crate::models::{DistributionEntry, DistributionResult, ProficiencyBucket};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributionCount {
    counts: [u32; 4],
}

impl DistributionCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, bucket: ProficiencyBucket) {
        self.counts[bucket.index()] += 1;
    }

    pub fn merge(&mut self, other: &DistributionCount) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    pub fn count(&self, bucket: ProficiencyBucket) -> u32 {
        self.counts[bucket.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Turns the counts into percentages, truncating each one independently.
    pub fn into_result(self, skill: &str) -> DistributionResult {
        let total_profiles = self.total();
        if total_profiles == 0 {
            return DistributionResult::empty(skill);
        }

        let entries = ProficiencyBucket::ALL
            .iter()
            .filter_map(|&level| {
                let count = self.count(level);
                (count > 0).then(|| DistributionEntry {
                    level,
                    percentage: count * 100 / total_profiles,
                    count,
                })
            })
            .collect();

        DistributionResult {
            skill: skill.to_string(),
            entries,
            total_profiles,
        }
    }
}

impl FromIterator<ProficiencyBucket> for DistributionCount {
    fn from_iter<I: IntoIterator<Item = ProficiencyBucket>>(iter: I) -> Self {
        let mut count = Self::new();
        for bucket in iter {
            count.record(bucket);
        }
        count
    }
}
