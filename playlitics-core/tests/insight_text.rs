use playlitics_core::{
    DatasetConfig, GameTable, generate, generate_text_insights, ingest, kpis, top_categories,
};

const TINY_CSV: &str = "\
genre,platform,release_year,price,metascore,user_score,hours_played,owners_millions
Action,PC,2020,20,80,8.5,50,10
RPG,PC,2021,60,75,7.2,120,5
Action,Xbox,2022,40,85,8.8,70,7
";

fn tiny_table() -> GameTable {
    ingest(TINY_CSV.as_bytes()).expect("tiny dataset parses")
}

#[test]
fn tiny_table_kpis() {
    let cards = kpis(&tiny_table());
    assert_eq!(cards.games, 3);
    assert!((cards.avg_metascore - 80.0).abs() < 1e-9);
    assert!((cards.avg_user_score - 8.166_666_666_666_666).abs() < 1e-6);
    assert!((cards.median_price - 40.0).abs() < 1e-9);
}

#[test]
fn kpis_degrade_per_missing_column() {
    let table = ingest(b"title,price\nAlpha,10\nBeta,30\n").unwrap();
    let cards = kpis(&table);
    assert_eq!(cards.games, 2);
    assert!(cards.avg_metascore.is_nan());
    assert!(cards.avg_user_score.is_nan());
    assert!((cards.median_price - 20.0).abs() < 1e-9);
}

#[test]
fn tiny_table_top_categories() {
    let ranked = top_categories(&tiny_table(), "genre", 5);
    assert_eq!(
        ranked,
        vec![(String::from("Action"), 2), (String::from("RPG"), 1)]
    );
    assert!(top_categories(&tiny_table(), "publisher", 5).is_empty());
}

#[test]
fn tiny_table_produces_all_three_insights_in_order() {
    let insights = generate_text_insights(&tiny_table());
    assert_eq!(insights.len(), 3);

    // Action and RPG tie at 2.0 hours per dollar; the first-encountered
    // group wins.
    assert_eq!(
        insights[0],
        "Best value: Action offers ~2.0 hours per $1 on average."
    );
    assert_eq!(
        insights[1],
        "Correlation: price vs user score -0.76, price vs metascore -0.50."
    );
    // PC averages 7.5M owners against Xbox's 7.0M.
    assert_eq!(
        insights[2],
        "Most popular platform by owners: PC (~7.5M average)."
    );
}

#[test]
fn empty_table_returns_exactly_one_notice() {
    let insights = generate_text_insights(&generate(&DatasetConfig::new(0)));
    assert_eq!(
        insights,
        vec![String::from(
            "No data available — adjust filters or upload a dataset."
        )]
    );
}

#[test]
fn insight_count_is_bounded_by_three() {
    let generated = generate(&DatasetConfig::new(300));
    let insights = generate_text_insights(&generated);
    assert_eq!(insights.len(), 3);

    let partial = ingest(b"title,release_year\nAlpha,2019\n").unwrap();
    assert!(generate_text_insights(&partial).is_empty());
}

#[test]
fn popularity_insight_survives_partial_owner_data() {
    let csv = "platform,owners_millions\nPC,4\nSwitch,not-tracked\nSwitch,9\nPC,6\n";
    let table = ingest(csv.as_bytes()).unwrap();
    let insights = generate_text_insights(&table);
    assert_eq!(
        insights,
        vec![String::from(
            "Most popular platform by owners: Switch (~9.0M average)."
        )]
    );
}
