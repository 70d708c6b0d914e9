#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillQuery {
    pub base_skill: String,
    pub display_term: String,
    pub result_cap: u32,
    pub result_offset: u32,
}

impl SkillQuery {
    fn new(skill: &str, display_term: String, result_cap: u32, result_offset: u32) -> Self {
        Self {
            base_skill: skill.to_string(),
            display_term,
            result_cap,
            result_offset,
        }
    }
}

/// Expands a skill into the five search variants, each aimed at a different
/// seniority slice: general, senior, working engineers, juniors, and
/// specialists.
pub fn plan_queries(skill: &str) -> [SkillQuery; 5] {
    [
        SkillQuery::new(skill, skill.to_string(), 25, 0),
        SkillQuery::new(skill, format!("senior {} expert", skill), 15, 0),
        SkillQuery::new(skill, format!("{} developer engineer", skill), 25, 20),
        SkillQuery::new(skill, format!("junior {} trainee", skill), 15, 0),
        SkillQuery::new(skill, format!("{} professional specialist", skill), 20, 10),
    ]
}
