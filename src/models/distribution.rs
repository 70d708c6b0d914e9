use serde::{Deserialize, Serialize};

pub const DATA_SOURCE: &str = "Torre.ai";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyBucket {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyBucket {
    pub const ALL: [ProficiencyBucket; 4] = [
        ProficiencyBucket::Beginner,
        ProficiencyBucket::Intermediate,
        ProficiencyBucket::Advanced,
        ProficiencyBucket::Expert,
    ];

    pub fn index(self) -> usize {
        match self {
            ProficiencyBucket::Beginner => 0,
            ProficiencyBucket::Intermediate => 1,
            ProficiencyBucket::Advanced => 2,
            ProficiencyBucket::Expert => 3,
        }
    }
}

impl std::fmt::Display for ProficiencyBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProficiencyBucket::Beginner => write!(f, "Beginner"),
            ProficiencyBucket::Intermediate => write!(f, "Intermediate"),
            ProficiencyBucket::Advanced => write!(f, "Advanced"),
            ProficiencyBucket::Expert => write!(f, "Expert"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub level: ProficiencyBucket,
    pub percentage: u32,
    pub count: u32,
}

/// Estimated proficiency distribution for one skill.
///
/// Each percentage is `floor(count * 100 / total_profiles)` computed on its own,
/// so the percentages can add up to slightly less than 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionResult {
    pub skill: String,
    pub entries: Vec<DistributionEntry>,
    pub total_profiles: u32,
}

impl DistributionResult {
    pub fn empty(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            entries: Vec::new(),
            total_profiles: 0,
        }
    }

    pub fn entry(&self, level: ProficiencyBucket) -> Option<&DistributionEntry> {
        self.entries.iter().find(|e| e.level == level)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProficiencyLevel {
    pub level: ProficiencyBucket,
    pub percentage: u32,
    pub count: u32,
    /// Reserved; never populated.
    pub average_experience: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDistributionResponse {
    pub skill: String,
    pub distribution: Vec<ProficiencyLevel>,
    pub total_profiles: u32,
    pub source: String,
}

impl From<DistributionResult> for SkillDistributionResponse {
    fn from(result: DistributionResult) -> Self {
        Self {
            skill: result.skill,
            distribution: result
                .entries
                .into_iter()
                .map(|e| ProficiencyLevel {
                    level: e.level,
                    percentage: e.percentage,
                    count: e.count,
                    average_experience: None,
                })
                .collect(),
            total_profiles: result.total_profiles,
            source: DATA_SOURCE.to_string(),
        }
    }
}
