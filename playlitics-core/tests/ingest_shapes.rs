use playlitics_core::{Cell, DatasetConfig, ParseError, generate, ingest};

#[test]
fn aliased_partial_upload_normalizes_headers() {
    let csv = "Metacritic, User Score ,Year,studio\n88,8.7,2019,Remedy\n,7.0,2020,Larian\n";
    let table = ingest(csv.as_bytes()).unwrap();

    let columns: Vec<&str> = table.columns().iter().map(String::as_str).collect();
    assert_eq!(columns, ["metascore", "user_score", "release_year", "studio"]);

    assert_eq!(
        table.numeric_column("metascore").unwrap(),
        vec![Some(88.0), None]
    );
    assert_eq!(
        table.numeric_column("release_year").unwrap(),
        vec![Some(2019.0), Some(2020.0)]
    );
    // Unknown columns ride along untouched.
    assert_eq!(
        table.display_column("studio").unwrap(),
        vec![Some(String::from("Remedy")), Some(String::from("Larian"))]
    );
}

#[test]
fn per_cell_coercion_failures_do_not_poison_neighbors() {
    let csv = "title,price,metascore,is_multiplayer\n\
               Alpha,N/A,88,yes\n\
               Beta,19.99,not-scored,0\n\
               Gamma,5,91,perhaps\n";
    let table = ingest(csv.as_bytes()).unwrap();

    assert_eq!(
        table.numeric_column("price").unwrap(),
        vec![None, Some(19.99), Some(5.0)]
    );
    assert_eq!(
        table.numeric_column("metascore").unwrap(),
        vec![Some(88.0), None, Some(91.0)]
    );
    let multiplayer: Vec<Cell> = table.rows().iter().map(|row| row[3].clone()).collect();
    assert_eq!(
        multiplayer,
        vec![Cell::Bool(true), Cell::Bool(false), Cell::Missing]
    );
}

#[test]
fn missing_cells_export_as_null_json() {
    let table = ingest(b"price,genre\nN/A,Action\n12,\n").unwrap();
    let json = table.to_json_records().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["price"], serde_json::Value::Null);
    assert_eq!(parsed[0]["genre"], serde_json::json!("Action"));
    assert_eq!(parsed[1]["price"], serde_json::json!(12));
    assert_eq!(parsed[1]["genre"], serde_json::Value::Null);
}

#[test]
fn structural_damage_is_a_specific_error() {
    let result = ingest(b"a,b\n1,2,3\n");
    let error = result.expect_err("ragged rows must fail");
    assert!(matches!(error, ParseError::Malformed(_)));
    // Caller-facing message, not a debug dump.
    assert!(error.to_string().starts_with("uploaded file is not valid CSV"));

    assert!(matches!(ingest(b""), Err(ParseError::MissingHeader)));
}

#[test]
fn generated_export_survives_reingestion() {
    let table = generate(&DatasetConfig::with_seed(80, 31));
    let csv = table.to_csv().unwrap();
    let round_tripped = ingest(csv.as_bytes()).unwrap();

    assert_eq!(round_tripped.columns(), table.columns());
    assert_eq!(round_tripped.len(), table.len());
    for column in [
        "release_year",
        "price",
        "metascore",
        "user_score",
        "hours_played",
        "owners_millions",
    ] {
        assert_eq!(
            round_tripped.numeric_column(column).unwrap(),
            table.numeric_column(column).unwrap(),
            "numeric column {column} drifted through export"
        );
    }
    for column in ["game_id", "title", "genre", "platform", "is_multiplayer"] {
        assert_eq!(
            round_tripped.display_column(column).unwrap(),
            table.display_column(column).unwrap(),
            "column {column} drifted through export"
        );
    }
}
