//! Tests for the seeded reference dataset and the image blob operations.

use anyhow::Result;
use chrono::NaiveDate;
use prism::serializer::CONTEXT_TABLES;
use prism_test_utils::TestSetup;
use std::collections::HashSet;

fn parse_date(value: &serde_json::Value) -> NaiveDate {
    NaiveDate::parse_from_str(value.as_str().expect("date column is TEXT"), "%Y-%m-%d")
        .expect("seed dates are ISO formatted")
}

#[tokio::test]
async fn seeds_ten_rows_per_table() -> Result<()> {
    let setup = TestSetup::new().await?;
    for spec in &CONTEXT_TABLES {
        let rows = setup.provider.read_table(spec).await?;
        assert_eq!(rows.len(), 10, "table {} should carry the full seed", spec.table);
    }
    Ok(())
}

#[tokio::test]
async fn testing_never_precedes_collection() -> Result<()> {
    let setup = TestSetup::new().await?;
    let samples = setup.provider.read_table(&CONTEXT_TABLES[0]).await?;
    for row in &samples {
        let collected = parse_date(&row["date_collected"]);
        let tested = parse_date(&row["date_tested"]);
        assert!(
            tested >= collected,
            "sample {} tested before collection",
            row["sample_id"]
        );
    }
    Ok(())
}

#[tokio::test]
async fn assay_rows_reference_seeded_samples() -> Result<()> {
    let setup = TestSetup::new().await?;
    let samples = setup.provider.read_table(&CONTEXT_TABLES[0]).await?;
    let known_ids: HashSet<i64> = samples
        .iter()
        .map(|row| row["sample_id"].as_i64().unwrap())
        .collect();

    for spec in &CONTEXT_TABLES[1..] {
        for row in setup.provider.read_table(spec).await? {
            let sample_id = row["sample_id"].as_i64().unwrap();
            assert!(
                known_ids.contains(&sample_id),
                "{} row {} references unknown sample {}",
                spec.table,
                row["test_id"],
                sample_id
            );
        }
    }
    Ok(())
}

#[tokio::test]
async fn seeding_is_idempotent() -> Result<()> {
    let setup = TestSetup::new().await?;
    setup.provider.seed_reference_data().await?;
    for spec in &CONTEXT_TABLES {
        let rows = setup.provider.read_table(spec).await?;
        assert_eq!(rows.len(), 10);
    }
    Ok(())
}

#[tokio::test]
async fn reseeding_preserves_an_uploaded_image() -> Result<()> {
    let setup = TestSetup::new().await?;
    let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x01, 0x02];
    assert!(setup.provider.store_sample_image(5, bytes.clone()).await?);

    setup.provider.seed_reference_data().await?;

    let stored = setup.provider.load_sample_image(5).await?;
    assert_eq!(stored.as_deref(), Some(bytes.as_slice()));
    Ok(())
}

#[tokio::test]
async fn image_blob_round_trip() -> Result<()> {
    let setup = TestSetup::new().await?;
    let bytes = vec![1, 2, 3, 4, 5];

    assert!(setup.provider.load_sample_image(3).await?.is_none());
    assert!(setup.provider.store_sample_image(3, bytes.clone()).await?);
    assert_eq!(
        setup.provider.load_sample_image(3).await?.as_deref(),
        Some(bytes.as_slice())
    );

    // Neighboring samples are untouched.
    assert!(setup.provider.load_sample_image(4).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn blob_write_to_unknown_sample_reports_failure() -> Result<()> {
    let setup = TestSetup::new().await?;
    assert!(setup.provider.fetch_sample(99).await?.is_none());
    assert!(!setup.provider.store_sample_image(99, vec![1]).await?);
    Ok(())
}

#[tokio::test]
async fn fetch_sample_returns_the_full_record() -> Result<()> {
    let setup = TestSetup::new().await?;
    let sample = setup
        .provider
        .fetch_sample(3)
        .await?
        .expect("sample 3 is seeded");
    assert_eq!(sample["latitude"], "19.8360 N");
    assert_eq!(sample["longitude"], "83.9725 E");
    assert_eq!(sample["date_collected"], "2025-09-01");
    assert_eq!(sample["date_tested"], "2025-09-04");
    Ok(())
}
