//! Tests for the holiday pipeline's ordering, data flow and failure handling.

use super::HolidayPipeline;
use crate::core::{StageKind, TripRequest};
use crate::errors::{ModelError, TripflowError};
use crate::events::{types, CollectingEventSink};
use crate::model::MockModelClient;
use crate::stages::{BudgetStage, PlannerStage, ResearchStage, Stage, WriterStage};
use crate::testing::{EchoModelClient, FixedModelClient, ScriptedModelClient};
use mockall::Sequence;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn paris() -> TripRequest {
    TripRequest::new("Paris", 3.0, "art, food", 1500.0)
}

#[tokio::test]
async fn test_calls_model_four_times_in_order() {
    let client = Arc::new(ScriptedModelClient::new([
        "PLAN", "RESEARCH", "OPTIMIZED", "ITINERARY",
    ]));
    let pipeline = HolidayPipeline::new(client.clone());

    let itinerary = pipeline.run(&paris()).await.unwrap();
    let prompts = client.prompts();

    assert_eq!(itinerary.as_str(), "ITINERARY");
    assert_eq!(prompts.len(), 4);

    assert!(prompts[0].contains("You are a travel planner AI."));
    assert!(prompts[0].contains("Paris"));
    assert!(prompts[0].contains("Days: 3"));
    assert!(prompts[0].contains("art, food"));

    assert!(prompts[1].contains("Enhance this travel plan"));
    assert!(prompts[1].contains("PLAN"));

    assert!(prompts[2].contains("Optimize this travel plan"));
    assert!(prompts[2].contains("RESEARCH"));

    assert!(prompts[3].contains("Rewrite this as a clean, day-by-day itinerary"));
    assert!(prompts[3].contains("OPTIMIZED"));
}

#[tokio::test]
async fn test_call_order_with_mock_sequence() {
    let mut client = MockModelClient::new();
    let mut seq = Sequence::new();

    client
        .expect_generate()
        .withf(|p: &str| p.contains("travel planner AI") && p.contains("Destination: Paris"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok("draft".to_string()));
    client
        .expect_generate()
        .withf(|p: &str| p.contains("attractions and tips") && p.contains("draft"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok("enriched".to_string()));
    client
        .expect_generate()
        .withf(|p: &str| p.contains("budget of $1500") && p.contains("enriched"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok("cheap".to_string()));
    client
        .expect_generate()
        .withf(|p: &str| p.contains("day-by-day itinerary") && p.contains("cheap"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok("final".to_string()));

    let pipeline = HolidayPipeline::new(Arc::new(client));
    let itinerary = pipeline.run(&paris()).await.unwrap();

    assert_eq!(itinerary.as_str(), "final");
}

#[tokio::test]
async fn test_budget_prompt_contains_literal_budget() {
    let client = Arc::new(ScriptedModelClient::new(Vec::<String>::new()));
    let pipeline = HolidayPipeline::new(client.clone());

    pipeline
        .run(&TripRequest::new("Rome", 2.0, "history", 749.5))
        .await
        .unwrap();

    assert!(client.prompts()[2].contains("a budget of $749.5:"));
}

#[tokio::test]
async fn test_fixed_reply_passes_through() {
    let client = Arc::new(FixedModelClient::new("X"));
    let pipeline = HolidayPipeline::new(client.clone());

    let itinerary = pipeline.run(&paris()).await.unwrap();

    assert_eq!(itinerary.as_str(), "X");
    assert_eq!(client.call_count(), 4);
}

#[tokio::test]
async fn test_echo_client_nests_all_four_prompts() {
    let request = paris();
    let pipeline = HolidayPipeline::new(Arc::new(EchoModelClient));

    let itinerary = pipeline.run(&request).await.unwrap();

    let expected = WriterStage.build_prompt(&BudgetStage::new(1500.0).build_prompt(
        &ResearchStage.build_prompt(&PlannerStage.build_prompt(&request.to_prompt())),
    ));
    assert_eq!(itinerary.as_str(), expected);
    assert_eq!(
        itinerary.as_str(),
        "\nRewrite this as a clean, day-by-day itinerary:\n\n\
         \nOptimize this travel plan for a budget of $1500:\n\n\
         \nEnhance this travel plan with attractions and tips:\n\n\
         \nYou are a travel planner AI.\nCreate a detailed travel plan.\n\n\
         \nDestination: Paris\nDays: 3\nInterests: art, food\n\
         \n  \n  \n  \n  "
    );
}

#[tokio::test]
async fn test_failure_stops_later_stages() {
    for failing_call in 0..4 {
        let client = Arc::new(
            ScriptedModelClient::new(Vec::<String>::new()).failing_on(failing_call, "quota exceeded"),
        );
        let pipeline = HolidayPipeline::new(client.clone());

        let err = pipeline.run(&paris()).await.unwrap_err();

        assert_eq!(client.call_count(), failing_call + 1);
        assert_eq!(err.failed_stage(), Some(StageKind::ORDER[failing_call]));
        match err {
            TripflowError::Stage { source, .. } => {
                assert_eq!(source.to_string(), "quota exceeded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[tokio::test]
async fn test_failure_with_mock_is_observable() {
    let mut client = MockModelClient::new();
    client
        .expect_generate()
        .times(1)
        .returning(|_| Err(ModelError::Api { status: 403, message: "blocked".to_string() }));

    let pipeline = HolidayPipeline::new(Arc::new(client));
    let err = pipeline.run(&paris()).await.unwrap_err();

    assert_eq!(err.failed_stage(), Some(StageKind::Planner));
    assert!(err.to_string().contains("API error 403: blocked"));
}

#[tokio::test]
async fn test_events_for_successful_run() {
    let sink = Arc::new(CollectingEventSink::new());
    let pipeline = HolidayPipeline::new(Arc::new(FixedModelClient::new("secret plan text")))
        .with_event_sink(sink.clone());

    pipeline.run(&paris()).await.unwrap();

    let mut expected = Vec::new();
    for _ in 0..4 {
        expected.push(types::STAGE_STARTED.to_string());
        expected.push(types::STAGE_COMPLETED.to_string());
    }
    expected.push(types::PIPELINE_COMPLETED.to_string());
    assert_eq!(sink.event_types(), expected);

    let stages: Vec<String> = sink
        .events_of_type(types::STAGE_COMPLETED)
        .into_iter()
        .filter_map(|(_, data)| data?["stage"].as_str().map(ToString::to_string))
        .collect();
    assert_eq!(stages, HolidayPipeline::stage_names().to_vec());

    for (_, data) in sink.events() {
        let data = data.unwrap().to_string();
        assert!(!data.contains("secret plan text"));
    }
}

#[tokio::test]
async fn test_events_share_one_run_id() {
    let sink = Arc::new(CollectingEventSink::new());
    let pipeline =
        HolidayPipeline::new(Arc::new(EchoModelClient)).with_event_sink(sink.clone());

    pipeline.run(&paris()).await.unwrap();

    let run_ids: Vec<serde_json::Value> = sink
        .events()
        .into_iter()
        .map(|(_, data)| data.unwrap()["run_id"].clone())
        .collect();
    assert!(run_ids.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_events_for_failed_run() {
    let sink = Arc::new(CollectingEventSink::new());
    let client = ScriptedModelClient::new(Vec::<String>::new()).failing_on(1, "network down");
    let pipeline = HolidayPipeline::new(Arc::new(client)).with_event_sink(sink.clone());

    pipeline.run(&paris()).await.unwrap_err();

    assert_eq!(
        sink.event_types(),
        vec![
            types::STAGE_STARTED,
            types::STAGE_COMPLETED,
            types::STAGE_STARTED,
            types::STAGE_FAILED,
            types::PIPELINE_FAILED,
        ]
    );

    let (_, data) = sink.events_of_type(types::PIPELINE_FAILED).remove(0);
    assert_eq!(data.unwrap()["stage"], "research");
}

#[tokio::test]
async fn test_independent_runs_share_client() {
    let client = Arc::new(FixedModelClient::new("ok"));
    let pipeline = HolidayPipeline::new(client.clone());

    let paris = paris();
    let oslo = TripRequest::new("Oslo", 1.0, "fjords", 300.0);
    let (a, b) = tokio::join!(pipeline.run(&paris), pipeline.run(&oslo));

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(client.call_count(), 8);
}

#[test]
fn test_stage_names() {
    assert_eq!(
        HolidayPipeline::stage_names(),
        ["planner", "research", "budget", "writer"]
    );
}
