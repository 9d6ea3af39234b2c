//! Display mapping — presentation-only values derived from a recommendation.
//!
//! Every derivation here is total: malformed input degrades to a fallback
//! label or a clamped value, never to an error.

use reqwest::Url;
use serde::Serialize;

use crate::models::recommendation::RecommendationRecord;

/// Title used when no test name can be recovered from the record URL.
pub const FALLBACK_TEST_NAME: &str = "SHL Assessment";

/// Extracts a human-readable test name from an assessment detail URL.
///
/// The name is the second-to-last non-empty path segment, split on `-` with
/// each piece capitalised: `/view/python-coding-test/general/` gives
/// `Python Coding Test`.
pub fn test_name(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return FALLBACK_TEST_NAME.to_string();
    };
    let segments: Vec<&str> = match parsed.path_segments() {
        Some(segments) => segments.filter(|s| !s.is_empty()).collect(),
        None => Vec::new(),
    };
    if segments.len() < 2 {
        return FALLBACK_TEST_NAME.to_string();
    }

    segments[segments.len() - 2]
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Five-star rating derived from a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub filled: u8,
    pub empty: u8,
}

impl Rating {
    pub const MAX: u8 = 5;

    /// Scores outside 0..=5 are clamped so the total is always five.
    pub fn from_score(score: i32) -> Self {
        let filled = score.clamp(0, i32::from(Self::MAX)) as u8;
        Self {
            filled,
            empty: Self::MAX - filled,
        }
    }

    pub fn render(&self, filled: char, empty: char) -> String {
        std::iter::repeat(filled)
            .take(usize::from(self.filled))
            .chain(std::iter::repeat(empty).take(usize::from(self.empty)))
            .collect()
    }
}

/// Capability flags shown as check/cross badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub remote: bool,
    pub adaptive: bool,
}

impl FeatureFlags {
    pub fn from_record(record: &RecommendationRecord) -> Self {
        Self {
            remote: record.remote_support.is_supported(),
            adaptive: record.adaptive_support.is_supported(),
        }
    }

    pub fn remote_label(&self) -> &'static str {
        if self.remote {
            "Remote Support"
        } else {
            "No Remote Support"
        }
    }

    pub fn adaptive_label(&self) -> &'static str {
        if self.adaptive {
            "Adaptive"
        } else {
            "Not Adaptive"
        }
    }
}

/// Everything the view needs to draw one recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationCard {
    pub title: String,
    pub category: Option<String>,
    pub description: String,
    pub test_types: Vec<String>,
    pub duration_label: String,
    pub score: i32,
    pub rating: Rating,
    pub match_label: String,
    pub flags: FeatureFlags,
    pub reason: String,
    pub url: String,
}

impl RecommendationCard {
    pub fn from_record(record: &RecommendationRecord) -> Self {
        // Older catalog responses name the test directly and carry no URL.
        let title = match record.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => test_name(&record.url),
        };
        Self {
            title,
            category: record.category.clone(),
            description: record.description.clone(),
            test_types: record.test_type.clone(),
            duration_label: format!("{} minutes", record.duration),
            score: record.score,
            rating: Rating::from_score(record.score),
            match_label: format!("Match score: {}/{}", record.score, Rating::MAX),
            flags: FeatureFlags::from_record(record),
            reason: record.reason.clone(),
            url: record.url.clone(),
        }
    }
}

/// Maps a whole result list, preserving service order.
pub fn cards(records: &[RecommendationRecord]) -> Vec<RecommendationCard> {
    records.iter().map(RecommendationCard::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::SupportFlag;

    #[test]
    fn test_name_from_penultimate_segment() {
        assert_eq!(
            test_name("https://x.test/view/python-coding-test/general/"),
            "Python Coding Test"
        );
    }

    #[test]
    fn test_name_without_trailing_slash() {
        assert_eq!(
            test_name("https://x.test/catalog/view/excel-365/details"),
            "Excel 365"
        );
    }

    #[test]
    fn test_name_catalog_url_with_single_trailing_slug() {
        // The slug is the last non-empty segment, so the segment before it wins.
        assert_eq!(
            test_name("https://www.shl.com/solutions/products/product-catalog/view/python-new/"),
            "View"
        );
    }

    #[test]
    fn test_name_root_url_falls_back() {
        assert_eq!(test_name("https://x.test/"), FALLBACK_TEST_NAME);
    }

    #[test]
    fn test_name_single_segment_falls_back() {
        assert_eq!(test_name("https://x.test/verify-g-plus/"), FALLBACK_TEST_NAME);
    }

    #[test]
    fn test_name_unparseable_url_falls_back() {
        assert_eq!(test_name("not a url"), FALLBACK_TEST_NAME);
        assert_eq!(test_name(""), FALLBACK_TEST_NAME);
    }

    #[test]
    fn test_name_keeps_rest_of_word_case() {
        assert_eq!(test_name("https://x.test/view/opq32r-iOS/x/"), "Opq32r IOS");
    }

    #[test]
    fn test_rating_three() {
        let rating = Rating::from_score(3);
        assert_eq!(rating, Rating { filled: 3, empty: 2 });
        assert_eq!(rating.render('★', '☆'), "★★★☆☆");
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::from_score(0), Rating { filled: 0, empty: 5 });
        assert_eq!(Rating::from_score(5), Rating { filled: 5, empty: 0 });
    }

    #[test]
    fn test_rating_out_of_range_is_clamped() {
        assert_eq!(Rating::from_score(9), Rating { filled: 5, empty: 0 });
        assert_eq!(Rating::from_score(-2), Rating { filled: 0, empty: 5 });
        assert_eq!(Rating::from_score(42).render('*', '.').chars().count(), 5);
    }

    #[test]
    fn test_flags_only_yes_is_positive() {
        let record = RecommendationRecord {
            remote_support: SupportFlag::No,
            adaptive_support: SupportFlag::from("maybe"),
            ..Default::default()
        };
        let flags = FeatureFlags::from_record(&record);
        assert!(!flags.remote);
        assert!(!flags.adaptive);
        assert_eq!(flags.remote_label(), "No Remote Support");
        assert_eq!(flags.adaptive_label(), "Not Adaptive");

        let record = RecommendationRecord {
            remote_support: SupportFlag::Yes,
            adaptive_support: SupportFlag::Yes,
            ..Default::default()
        };
        let flags = FeatureFlags::from_record(&record);
        assert_eq!(flags.remote_label(), "Remote Support");
        assert_eq!(flags.adaptive_label(), "Adaptive");
    }

    #[test]
    fn test_card_labels() {
        let record = RecommendationRecord {
            url: "https://x.test/view/sales-simulation/details/".to_string(),
            duration: 25,
            score: 4,
            ..Default::default()
        };
        let card = RecommendationCard::from_record(&record);
        assert_eq!(card.title, "Sales Simulation");
        assert_eq!(card.duration_label, "25 minutes");
        assert_eq!(card.match_label, "Match score: 4/5");
    }

    #[test]
    fn test_card_prefers_catalog_name() {
        let record = RecommendationRecord {
            name: Some("Verify G+".to_string()),
            category: Some("Cognitive Ability".to_string()),
            ..Default::default()
        };
        let card = RecommendationCard::from_record(&record);
        assert_eq!(card.title, "Verify G+");
        assert_eq!(card.category.as_deref(), Some("Cognitive Ability"));
    }
}
