//! Tests for prompt assembly: segment order, full-table context injection,
//! losslessness of the serialized data block, and determinism.

use anyhow::Result;
use prism::{prompts::core::ASSISTANT_INSTRUCTIONS, ChatClient, ChatClientBuilder};
use prism_test_utils::{MockAiProvider, TestSetup};

async fn build_client() -> Result<(ChatClient, MockAiProvider)> {
    let setup = TestSetup::new().await?;
    let mock = MockAiProvider::new("mock answer");
    let client = ChatClientBuilder::new()
        .ai_provider(Box::new(mock.clone()))
        .storage(setup.provider.clone())
        .build()?;
    Ok((client, mock))
}

#[tokio::test]
async fn prompt_ends_with_the_verbatim_question() -> Result<()> {
    let (client, _) = build_client().await?;

    for message in ["thank you", "what were the results?", "3"] {
        let prompt = client.assemble_prompt(message).await?;
        assert!(
            prompt.ends_with(&format!("User question: {message}")),
            "prompt must end with the user's exact text, got tail: {:?}",
            &prompt[prompt.len().saturating_sub(60)..]
        );
    }
    Ok(())
}

#[tokio::test]
async fn instructions_lead_every_prompt() -> Result<()> {
    let (client, _) = build_client().await?;

    let with_data = client.assemble_prompt("show me the data").await?;
    let without_data = client.assemble_prompt("hello").await?;
    assert!(with_data.starts_with(ASSISTANT_INSTRUCTIONS));
    assert!(without_data.starts_with(ASSISTANT_INSTRUCTIONS));
    Ok(())
}

#[tokio::test]
async fn data_dependent_prompt_contains_every_seeded_row() -> Result<()> {
    let (client, _) = build_client().await?;

    let prompt = client.assemble_prompt("summarize all results").await?;
    assert!(prompt.contains("Samples: ["));
    assert!(prompt.contains("Nile Red Tests: ["));
    assert!(prompt.contains("Rhodamine B Tests: ["));

    // 10 rows per table; each row of each table carries a sample_id field.
    let sample_id_fields = prompt.matches("\"sample_id\":").count();
    assert_eq!(sample_id_fields, 30, "no row may be silently dropped");
    // The two assay tables contribute 10 test_id fields each.
    assert_eq!(prompt.matches("\"test_id\":").count(), 20);
    Ok(())
}

#[tokio::test]
async fn bare_digit_question_gets_the_full_sample_context() -> Result<()> {
    let (client, _) = build_client().await?;

    let prompt = client.assemble_prompt("3").await?;
    // Sample 3's complete row ...
    assert!(prompt.contains("19.8360 N"));
    assert!(prompt.contains("83.9725 E"));
    assert!(prompt.contains("2025-09-01"));
    assert!(prompt.contains("2025-09-04"));
    // ... and both of its assay results.
    assert!(prompt.contains("\"microplastic_concentration\":1.23"));
    assert!(prompt.contains("\"POLYMER_TYPE\":\"PET\""));
    assert!(prompt.contains("\"concentration\":0.456"));
    Ok(())
}

#[tokio::test]
async fn general_question_carries_no_table_dump() -> Result<()> {
    let (client, _) = build_client().await?;

    let prompt = client.assemble_prompt("thank you").await?;
    assert!(!prompt.contains("Samples: ["));
    assert!(!prompt.contains("Nile Red Tests: ["));
    assert!(!prompt.contains("Rhodamine B Tests: ["));
    Ok(())
}

#[tokio::test]
async fn assembly_is_deterministic_for_unchanged_data() -> Result<()> {
    let (client, _) = build_client().await?;

    let first = client.assemble_prompt("what is the sample data?").await?;
    let second = client.assemble_prompt("what is the sample data?").await?;
    assert_eq!(first, second, "identical question and data must produce byte-identical prompts");
    Ok(())
}

#[tokio::test]
async fn serialized_rows_keep_every_field() -> Result<()> {
    let setup = TestSetup::new().await?;
    let mock = MockAiProvider::new("ok");
    let client = ChatClientBuilder::new()
        .ai_provider(Box::new(mock))
        .storage(setup.provider.clone())
        .build()?;

    // Before any upload the image column is rendered as an explicit null.
    let context = client.render_database_context().await?;
    assert!(context.contains("\"image\":null"));

    // After an upload the binary value appears as the blob placeholder
    // rather than being dropped from the record.
    setup
        .provider
        .store_sample_image(2, vec![0xFF, 0xD8, 0xFF])
        .await?;
    let context = client.render_database_context().await?;
    assert!(context.contains("\"image\":\"<blob>\""));
    Ok(())
}

#[tokio::test]
async fn answer_routes_the_assembled_prompt_through_the_provider() -> Result<()> {
    let (client, mock) = build_client().await?;

    let reply = client.answer("what data do you have?").await?;
    assert_eq!(reply, "mock answer");

    let calls = mock.get_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with(ASSISTANT_INSTRUCTIONS));
    assert!(calls[0].contains("Samples: ["));
    assert!(calls[0].ends_with("User question: what data do you have?"));
    Ok(())
}
