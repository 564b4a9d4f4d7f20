use serde::{Deserialize, Serialize};

use crate::journal::review::ReviewRecord;

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSort {
    #[default]
    Newest,
    Oldest,
    HighestStars,
    MostCraved,
}

/// In-memory filter over journal entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewQuery {
    /// Case-insensitive substring matched against dish, place, and notes.
    pub search: Option<String>,
    pub tag: Option<String>,
    pub min_kuchisabishii: Option<u8>,
    pub sort: ReviewSort,
}

/// Filters and sorts `records` without touching the source slice.
pub fn query_reviews(records: &[ReviewRecord], query: &ReviewQuery) -> Vec<ReviewRecord> {
    let needle = query.search.as_ref().map(|text| text.to_lowercase());

    let mut matches: Vec<ReviewRecord> = records
        .iter()
        .filter(|record| {
            let text_ok = needle.as_ref().map_or(true, |needle| {
                record.dish.to_lowercase().contains(needle)
                    || record.place.to_lowercase().contains(needle)
                    || record.notes.to_lowercase().contains(needle)
            });
            let tag_ok = query
                .tag
                .as_ref()
                .map_or(true, |tag| record.tags.iter().any(|candidate| candidate == tag));
            let craving_ok = query
                .min_kuchisabishii
                .map_or(true, |floor| record.kuchisabishii >= floor);
            text_ok && tag_ok && craving_ok
        })
        .cloned()
        .collect();

    match query.sort {
        ReviewSort::Newest => matches.sort_by(|a, b| b.timestamp.total_cmp(&a.timestamp)),
        ReviewSort::Oldest => matches.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp)),
        ReviewSort::HighestStars => matches.sort_by(|a, b| b.stars.total_cmp(&a.stars)),
        ReviewSort::MostCraved => matches.sort_by(|a, b| b.kuchisabishii.cmp(&a.kuchisabishii)),
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{AxisPreset, TasteVector};

    fn record(id: u64, dish: &str, place: &str, kuchisabishii: u8, stars: f32, tags: &[&str], timestamp: f64) -> ReviewRecord {
        ReviewRecord {
            id,
            dish: dish.to_string(),
            place: place.to_string(),
            notes: String::new(),
            kuchisabishii,
            stars,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            timestamp,
            taste: TasteVector::from_preset(AxisPreset::Basic, &[]),
        }
    }

    fn sample_records() -> Vec<ReviewRecord> {
        vec![
            record(1, "Shoyu ramen", "Menya Kaiko", 5, 4.5, &["noodles"], 100.0),
            record(2, "Uni don", "Tsukiji corner", 3, 5.0, &["seafood"], 300.0),
            record(3, "Tonkotsu ramen", "Hakata stand", 4, 3.5, &["noodles"], 200.0),
        ]
    }

    #[test]
    fn search_matches_dish_and_place_case_insensitively() {
        let records = sample_records();
        let query = ReviewQuery {
            search: Some("RAMEN".into()),
            ..Default::default()
        };
        let found = query_reviews(&records, &query);
        assert_eq!(found.len(), 2);

        let query = ReviewQuery {
            search: Some("tsukiji".into()),
            ..Default::default()
        };
        assert_eq!(query_reviews(&records, &query).len(), 1);
    }

    #[test]
    fn tag_and_craving_filters_compose() {
        let records = sample_records();
        let query = ReviewQuery {
            tag: Some("noodles".into()),
            min_kuchisabishii: Some(5),
            ..Default::default()
        };
        let found = query_reviews(&records, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn newest_sort_is_the_default() {
        let records = sample_records();
        let found = query_reviews(&records, &ReviewQuery::default());
        let ids: Vec<u64> = found.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn sorts_order_by_their_key() {
        let records = sample_records();

        let query = ReviewQuery {
            sort: ReviewSort::HighestStars,
            ..Default::default()
        };
        assert_eq!(query_reviews(&records, &query)[0].id, 2);

        let query = ReviewQuery {
            sort: ReviewSort::MostCraved,
            ..Default::default()
        };
        assert_eq!(query_reviews(&records, &query)[0].id, 1);

        let query = ReviewQuery {
            sort: ReviewSort::Oldest,
            ..Default::default()
        };
        assert_eq!(query_reviews(&records, &query)[0].id, 1);
    }

    #[test]
    fn empty_query_returns_everything() {
        let records = sample_records();
        assert_eq!(query_reviews(&records, &ReviewQuery::default()).len(), 3);
    }
}
