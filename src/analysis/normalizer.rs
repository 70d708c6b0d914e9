const SENIORITY_PREFIXES: [&str; 4] = ["senior ", "junior ", "lead ", "entry level "];

const ROLE_SUFFIXES: [&str; 6] = [
    " developer",
    " engineer",
    " programmer",
    " specialist",
    " expert",
    " architect",
];

/// Recovers the skill token from a decorated search term.
///
/// Strips at most one seniority prefix and then at most one role suffix, so
/// `"rust developer engineer"` comes back as `"rust developer"`.
pub fn extract_base_skill(term: &str) -> String {
    let mut skill = term.to_lowercase();

    if let Some(rest) = SENIORITY_PREFIXES
        .iter()
        .find_map(|prefix| skill.strip_prefix(prefix))
    {
        skill = rest.to_string();
    }

    if let Some(rest) = ROLE_SUFFIXES
        .iter()
        .find_map(|suffix| skill.strip_suffix(suffix))
    {
        skill = rest.to_string();
    }

    skill.trim().to_string()
}
