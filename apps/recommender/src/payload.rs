//! Payload builder: turns a raw form snapshot into the request body.

use crate::models::form::FormInput;
use crate::models::recommendation::RecommendationRequest;

/// Builds the normalized request for one submission.
///
/// Skills are split on every literal comma and trimmed one by one. Order,
/// case, duplicates and empty tokens are preserved, so `""` yields `[""]`.
pub fn build(input: FormInput) -> RecommendationRequest {
    let key_skills = split_skills(&input.key_skills);
    RecommendationRequest {
        job_title: input.job_title,
        level: input.level,
        use_case: input.use_case,
        key_skills,
    }
}

fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|skill| skill.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::{JobLevel, UseCase};

    fn form(skills: &str) -> FormInput {
        FormInput {
            job_title: "Data Analyst".to_string(),
            level: JobLevel::Senior,
            use_case: UseCase::Development,
            key_skills: skills.to_string(),
        }
    }

    #[test]
    fn test_skills_are_trimmed_in_order() {
        let request = build(form("a, b ,c"));
        assert_eq!(request.key_skills, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_skills_yield_single_empty_token() {
        let request = build(form(""));
        assert_eq!(request.key_skills, vec![""]);
    }

    #[test]
    fn test_empty_tokens_and_duplicates_are_kept() {
        let request = build(form("SQL,, sql ,SQL"));
        assert_eq!(request.key_skills, vec!["SQL", "", "sql", "SQL"]);
    }

    #[test]
    fn test_inner_whitespace_is_untouched() {
        let request = build(form("  data analysis  ,excel"));
        assert_eq!(request.key_skills, vec!["data analysis", "excel"]);
    }

    #[test]
    fn test_scalar_fields_are_copied_verbatim() {
        let request = build(FormInput {
            job_title: "  Engineer ".to_string(),
            ..form("rust")
        });
        assert_eq!(request.job_title, "  Engineer ");
        assert_eq!(request.level, JobLevel::Senior);
        assert_eq!(request.use_case, UseCase::Development);
    }
}
