//! Aggregate metrics and natural-language insight synthesis over a
//! (possibly filtered, possibly partial) table. Everything degrades
//! gracefully: absent columns yield NaN sentinels or omitted insights,
//! never errors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::numbers::{mean, median, pearson, usize_to_f64};
use crate::table::GameTable;

/// Headline metrics for the dashboard's KPI cards. Metrics whose source
/// column is absent carry `f64::NAN`; callers render that as "no value".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kpis {
    #[serde(rename = "Games")]
    pub games: usize,
    #[serde(rename = "Avg Metascore")]
    pub avg_metascore: f64,
    #[serde(rename = "Avg User Score")]
    pub avg_user_score: f64,
    #[serde(rename = "Median Price")]
    pub median_price: f64,
}

/// Compute the KPI cards. `games` is always the row count; the other
/// three skip missing cells and fall back to NaN when their column is
/// absent or has no present values.
#[must_use]
pub fn kpis(table: &GameTable) -> Kpis {
    Kpis {
        games: table.len(),
        avg_metascore: table
            .numeric_column("metascore")
            .map_or(f64::NAN, |values| mean(&values)),
        avg_user_score: table
            .numeric_column("user_score")
            .map_or(f64::NAN, |values| mean(&values)),
        median_price: table
            .numeric_column("price")
            .map_or(f64::NAN, |values| median(&values)),
    }
}

/// Count the distinct string representations in a column, descending by
/// count, truncated to `n`. Ties keep first-encountered order (the sort
/// is stable over insertion order). Absent column yields an empty vec.
#[must_use]
pub fn top_categories(table: &GameTable, column: &str, n: usize) -> Vec<(String, usize)> {
    let Some(values) = table.display_column(column) else {
        return Vec::new();
    };
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values.into_iter().flatten() {
        if !counts.contains_key(&value) {
            order.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Derive up to three data-backed insight sentences, in fixed order:
/// best-value genre, price/rating correlations, most popular platform.
/// An insight whose input columns are absent is omitted, so the result
/// holds 0 to 3 strings; an empty table yields exactly one notice.
#[must_use]
pub fn generate_text_insights(table: &GameTable) -> Vec<String> {
    if table.is_empty() {
        return vec![String::from(
            "No data available — adjust filters or upload a dataset.",
        )];
    }
    let mut insights = Vec::new();
    if let Some(text) = best_value_insight(table) {
        insights.push(text);
    }
    if let Some(text) = correlation_insight(table) {
        insights.push(text);
    }
    if let Some(text) = popularity_insight(table) {
        insights.push(text);
    }
    insights.truncate(3);
    insights
}

#[derive(Default)]
struct RatioAccumulator {
    hours_sum: f64,
    hours_count: usize,
    price_sum: f64,
    price_count: usize,
}

fn best_value_insight(table: &GameTable) -> Option<String> {
    let hours = table.numeric_column("hours_played")?;
    let prices = table.numeric_column("price")?;
    let genres = table.display_column("genre")?;

    // Groups accumulate in row order so ties resolve to the
    // first-encountered genre.
    let mut groups: Vec<(String, RatioAccumulator)> = Vec::new();
    for ((genre, price), hours_value) in genres.iter().zip(&prices).zip(&hours) {
        let Some(genre) = genre else { continue };
        let Some(price) = price else { continue };
        if *price <= 0.0 {
            continue;
        }
        let index = match groups.iter().position(|(name, _)| name == genre) {
            Some(index) => index,
            None => {
                groups.push((genre.clone(), RatioAccumulator::default()));
                groups.len() - 1
            }
        };
        let slot = &mut groups[index].1;
        slot.price_sum += price;
        slot.price_count += 1;
        if let Some(hours_value) = hours_value {
            slot.hours_sum += hours_value;
            slot.hours_count += 1;
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for (genre, acc) in &groups {
        if acc.hours_count == 0 || acc.price_count == 0 {
            continue;
        }
        let hours_mean = acc.hours_sum / usize_to_f64(acc.hours_count);
        let price_mean = acc.price_sum / usize_to_f64(acc.price_count);
        let ratio = hours_mean / price_mean;
        if best.is_none_or(|(_, leader)| ratio > leader) {
            best = Some((genre.as_str(), ratio));
        }
    }

    best.map(|(genre, ratio)| {
        format!("Best value: {genre} offers ~{ratio:.1} hours per $1 on average.")
    })
}

fn correlation_insight(table: &GameTable) -> Option<String> {
    let prices = table.numeric_column("price")?;
    let user_scores = table.numeric_column("user_score")?;
    let metascores = table.numeric_column("metascore")?;
    let corr_user = pearson(&prices, &user_scores);
    let corr_meta = pearson(&prices, &metascores);
    Some(format!(
        "Correlation: price vs user score {corr_user:+.2}, price vs metascore {corr_meta:+.2}."
    ))
}

fn popularity_insight(table: &GameTable) -> Option<String> {
    let platforms = table.display_column("platform")?;
    let owners = table.numeric_column("owners_millions")?;

    let mut groups: Vec<(String, (f64, usize))> = Vec::new();
    for (platform, owners_value) in platforms.iter().zip(&owners) {
        let Some(platform) = platform else { continue };
        let Some(owners_value) = owners_value else {
            continue;
        };
        match groups.iter().position(|(name, _)| name == platform) {
            Some(index) => {
                let (sum, count) = &mut groups[index].1;
                *sum += owners_value;
                *count += 1;
            }
            None => groups.push((platform.clone(), (*owners_value, 1))),
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for (platform, (sum, count)) in &groups {
        let avg = sum / usize_to_f64(*count);
        if best.is_none_or(|(_, leader)| avg > leader) {
            best = Some((platform.as_str(), avg));
        }
    }

    best.map(|(platform, avg)| {
        format!("Most popular platform by owners: {platform} (~{avg:.1}M average).")
    })
}
