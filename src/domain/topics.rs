/// Maximum number of suggestions shown in the dropdown.
pub const MAX_SUGGESTIONS: usize = 5;

/// Topics used when the `/topics` endpoint is unreachable.
pub const FALLBACK_TOPICS: &[&str] = &[
    "Hotfixes",
    "Class Tuning",
    "Patch Notes",
    "PTR",
    "Classic",
    "Delves",
    "Dungeons",
    "Raids",
    "Mythic+",
    "PvP",
    "Professions",
    "Housing",
    "Known Issues",
    "Maintenance",
];

pub fn fallback_topics() -> Vec<String> {
    FALLBACK_TOPICS.iter().map(|t| t.to_string()).collect()
}

/// Case-insensitive substring matches of `input` among `topics`, in list order.
pub fn suggest(topics: &[String], input: &str) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return vec![];
    }
    topics
        .iter()
        .filter(|topic| topic.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
