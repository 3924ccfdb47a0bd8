extern crate log;
extern crate serde;

use crate::{
    catalog::{Catalog, Difficulty, Problem},
    error::{field, schema_error, Result},
};
use log::{debug, info};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Decoded shape of the bulk-listing endpoint. Every required leaf is
/// optional here; `parse_problem_list` turns absence into a schema error.
#[derive(Debug, Deserialize)]
pub struct ProblemListResponse {
    pub stat_status_pairs: Option<Vec<StatStatusPair>>,
}
#[derive(Debug, Deserialize)]
pub struct StatStatusPair {
    pub stat: Option<ListedStat>,
    pub difficulty: Option<ListedDifficulty>,
    pub paid_only: Option<bool>,
}
#[derive(Debug, Deserialize)]
pub struct ListedStat {
    pub question_id: Option<u64>,
    #[serde(rename = "question__title")]
    pub title: Option<String>,
    #[serde(rename = "question__title_slug")]
    pub slug: Option<String>,
}
#[derive(Debug, Deserialize)]
pub struct ListedDifficulty {
    pub level: Option<u64>,
}

/// All-or-nothing: one malformed entry fails the whole parse, no partial
/// catalog. Records land keyed by identifier, so iteration is ascending
/// whatever order the listing used.
pub fn parse_problem_list(listing: ProblemListResponse) -> Result<Catalog> {
    let pairs = field(listing.stat_status_pairs, "stat_status_pairs")?;
    info!("have {} questions to parse", pairs.len());
    let mut problems = BTreeMap::new();
    for pair in pairs {
        let stat = field(pair.stat, "stat")?;
        let level = field(
            field(pair.difficulty, "difficulty")?.level,
            "difficulty.level",
        )?;
        let problem = Problem {
            question_id: field(stat.question_id, "stat.question_id")?,
            title: field(stat.title, "stat.question__title")?,
            slug: field(stat.slug, "stat.question__title_slug")?,
            difficulty: Difficulty::from_level(level)
                .ok_or_else(|| schema_error("difficulty.level"))?,
            paid_only: field(pair.paid_only, "paid_only")?,
            content: None,
            snippets: None,
        };
        debug!("question `{}` parsed successfully", problem);
        problems.insert(problem.question_id, problem);
    }
    Ok(Catalog { problems })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: u64, title: &str, slug: &str, level: u64) -> serde_json::Value {
        json!({
            "stat": {
                "question_id": id,
                "question__title": title,
                "question__title_slug": slug,
                "total_acs": 1000,
            },
            "difficulty": { "level": level },
            "paid_only": false,
            "status": null,
        })
    }

    fn decode(value: serde_json::Value) -> ProblemListResponse {
        serde_json::from_value(value).expect("listing decodes")
    }

    #[test]
    fn parses_entries_in_ascending_id_order() {
        let listing = decode(json!({
            "user_name": "",
            "stat_status_pairs": [
                entry(3, "Longest Substring", "longest-substring", 2),
                entry(1, "Two Sum", "two-sum", 1),
                entry(2, "Add Two Numbers", "add-two-numbers", 2),
            ],
        }));
        let catalog = parse_problem_list(listing).expect("parse succeeds");
        assert_eq!(catalog.len(), 3);
        let ids: Vec<u64> = catalog.problems.keys().copied().collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let two_sum = &catalog.problems[&1];
        assert_eq!(two_sum.title, "Two Sum");
        assert_eq!(two_sum.slug, "two-sum");
        assert_eq!(two_sum.difficulty, Difficulty::Easy);
        assert!(!two_sum.paid_only);
        assert!(two_sum.content.is_none());
        assert!(two_sum.snippets.is_none());
    }

    #[test]
    fn missing_field_on_any_entry_fails_the_whole_parse() {
        let mut broken = entry(2, "Add Two Numbers", "add-two-numbers", 2);
        broken["stat"]
            .as_object_mut()
            .unwrap()
            .remove("question__title_slug");
        let listing = decode(json!({
            "stat_status_pairs": [entry(1, "Two Sum", "two-sum", 1), broken],
        }));
        let err = parse_problem_list(listing).expect_err("parse fails");
        assert!(err.is_schema(), "unexpected error: {}", err);
    }

    #[test]
    fn missing_listing_array_is_a_schema_error() {
        let listing = decode(json!({ "user_name": "" }));
        assert!(parse_problem_list(listing).expect_err("fails").is_schema());
    }

    #[test]
    fn out_of_range_difficulty_is_a_schema_error() {
        let listing = decode(json!({
            "stat_status_pairs": [entry(1, "Two Sum", "two-sum", 9)],
        }));
        assert!(parse_problem_list(listing).expect_err("fails").is_schema());
    }
}
