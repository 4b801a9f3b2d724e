use crate::catalog::plan::Language;

/// Keyword lists checked in this order; the first language with a hit wins.
const LANGUAGE_KEYWORDS: [(Language, &[&str]); 4] = [
    (Language::English, &["англ", "english"]),
    (Language::Russian, &["русск", "russian"]),
    (Language::Chinese, &["китай", "chinese", "中文", "汉语"]),
    (Language::Arabic, &["араб", "arabic", "عربي"]),
];

/// Guess which language a topic label is about. No scoring: the first
/// language whose keyword occurs in the lowercased topic is returned.
pub fn detect_language_from_topic(topic: &str) -> Option<Language> {
    let lowered = topic.to_lowercase();
    LANGUAGE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(language, _)| *language)
}
