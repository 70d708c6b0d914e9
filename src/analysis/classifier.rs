use rand::Rng;

use crate::error::Result;
use crate::models::{ProficiencyBucket, ProfileRecord};

/// Upper bound (exclusive) of the random term added to every score.
pub const JITTER_RANGE: u32 = 10;

const SENIOR_MARKERS: [&str; 2] = ["senior", "lead"];
const EXPERT_MARKERS: [&str; 4] = ["architect", "expert", "principal", "director"];
const JUNIOR_MARKERS: [&str; 4] = ["junior", "trainee", "intern", "student"];
const PRACTITIONER_MARKERS: [&str; 2] = ["developer", "engineer"];

pub trait JitterSource: Send + Sync {
    fn next_below(&self, upper: u32) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn next_below(&self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(0..upper)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub u32);

impl JitterSource for FixedJitter {
    fn next_below(&self, upper: u32) -> u32 {
        self.0.min(upper.saturating_sub(1))
    }
}

pub struct ProficiencyClassifier {
    jitter: Box<dyn JitterSource>,
}

impl ProficiencyClassifier {
    pub fn new() -> Self {
        Self::with_jitter(ThreadRngJitter)
    }

    pub fn with_jitter(jitter: impl JitterSource + 'static) -> Self {
        Self {
            jitter: Box::new(jitter),
        }
    }

    /// Buckets one profile. A profile whose fields cannot be read lands in a
    /// uniformly random bucket instead of failing the batch.
    pub fn classify(&self, profile: &ProfileRecord, base_skill: &str) -> ProficiencyBucket {
        match self.base_score(profile, base_skill) {
            Ok(score) => {
                let jitter = self.jitter.next_below(JITTER_RANGE);
                bucket_for_score(score + jitter)
            }
            Err(e) => {
                let index = self.jitter.next_below(ProficiencyBucket::ALL.len() as u32) as usize;
                let bucket = ProficiencyBucket::ALL[index];
                tracing::debug!("Unreadable profile ({}), falling back to {}", e, bucket);
                bucket
            }
        }
    }

    pub fn base_score(&self, profile: &ProfileRecord, base_skill: &str) -> Result<u32> {
        let headline = profile
            .professional_headline()?
            .unwrap_or_default()
            .to_lowercase();
        let weight = profile.weight()?.unwrap_or(0.0);
        let completion = profile.completion()?.unwrap_or(0.0);

        let mentions_any = |markers: &[&str]| markers.iter().any(|m| headline.contains(m));

        let mut score = 0;
        if headline.contains(&base_skill.to_lowercase()) {
            score += 15;
        }
        if mentions_any(&SENIOR_MARKERS) {
            score += 25;
        }
        if mentions_any(&EXPERT_MARKERS) {
            score += 30;
        }
        if mentions_any(&JUNIOR_MARKERS) {
            score += 5;
        }
        if mentions_any(&PRACTITIONER_MARKERS) {
            score += 10;
        }

        // Profile quality
        if completion > 0.7 {
            score += 8;
        }
        if weight > 1.0 {
            score += 5;
        }

        Ok(score)
    }
}

impl Default for ProficiencyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn bucket_for_score(score: u32) -> ProficiencyBucket {
    match score {
        s if s >= 40 => ProficiencyBucket::Expert,
        s if s >= 25 => ProficiencyBucket::Advanced,
        s if s >= 15 => ProficiencyBucket::Intermediate,
        _ => ProficiencyBucket::Beginner,
    }
}
