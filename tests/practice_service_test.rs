// ABOUTME: Integration tests for the practice coordinator service
// ABOUTME: Recording, retention pruning, profile persistence, and engine queries over a real store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{create_memory_service, create_sqlite_store, draft, reference_now};
use fretwise::database_plugins::{ProfileStore, SessionStore};
use fretwise::errors::ErrorCode;
use fretwise::intelligence::{InsightKind, IntelligenceConfig};
use fretwise::models::{PracticeSessionDraft, SkillCategory};
use fretwise::services::PracticeService;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::TempDir;

const LOW_CHORD_ACCURACIES: [f64; 6] = [40.0, 45.0, 42.0, 48.0, 50.0, 47.0];

async fn record_low_chord_run<S>(service: &PracticeService<S>)
where
    S: SessionStore + ProfileStore,
{
    for (hours_ago, accuracy) in (0..6_i64).rev().zip(LOW_CHORD_ACCURACIES) {
        service
            .record_session_at(draft(SkillCategory::Chord, accuracy, hours_ago), reference_now())
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_record_generates_id_and_saves_profile() {
    let service = create_memory_service(100);
    let recorded = service
        .record_session_at(draft(SkillCategory::Scale, 82.0, 1), reference_now())
        .await
        .unwrap();

    assert!(!recorded.session.id.is_empty());
    assert_eq!(recorded.pruned, 0);
    assert_eq!(recorded.profile.total_sessions, 1);
    assert_eq!(recorded.profile.level, 1);
    assert!((recorded.profile.average_accuracy - 82.0).abs() < f64::EPSILON);

    let stored = service.store().load().await.unwrap();
    assert_eq!(stored, Some(recorded.profile.clone()));
    assert_eq!(service.profile().await.unwrap(), recorded.profile);

    let history = service.history(None).await.unwrap();
    assert_eq!(history, vec![recorded.session]);
}

#[tokio::test]
async fn test_retention_cap_prunes_oldest_sessions() {
    let service = create_memory_service(3);
    let mut pruned_total = 0;
    for hours_ago in (1..=5).rev() {
        let recorded = service
            .record_session_at(draft(SkillCategory::Chord, 70.0, hours_ago), reference_now())
            .await
            .unwrap();
        pruned_total += recorded.pruned;
    }

    assert_eq!(pruned_total, 2);
    assert_eq!(service.store().count().await.unwrap(), 3);

    let history = service.history(None).await.unwrap();
    let newest = history.first().unwrap().timestamp;
    let oldest = history.last().unwrap().timestamp;
    assert_eq!(reference_now() - newest, chrono::Duration::hours(1));
    assert_eq!(reference_now() - oldest, chrono::Duration::hours(3));

    let profile = service.profile().await.unwrap();
    assert_eq!(profile.total_sessions, 3);
}

#[tokio::test]
async fn test_invalid_drafts_are_rejected_without_writing() {
    let service = create_memory_service(100);

    let missing_accuracy = PracticeSessionDraft {
        accuracy: None,
        ..draft(SkillCategory::Song, 0.0, 1)
    };
    let err = service.record_session(missing_accuracy).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    let out_of_range = draft(SkillCategory::Song, 101.0, 1);
    let err = service.record_session(out_of_range).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let overlong = PracticeSessionDraft {
        duration_seconds: u64::MAX / 2 + 1,
        ..draft(SkillCategory::Song, 80.0, 1)
    };
    let err = service.record_session(overlong.clone()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(service.record_session(overlong).await.is_err());

    let blank_item = PracticeSessionDraft {
        item_name: "   ".to_owned(),
        ..draft(SkillCategory::Song, 50.0, 1)
    };
    assert!(service.record_session(blank_item).await.is_err());

    assert_eq!(service.store().count().await.unwrap(), 0);
    assert!(service.store().load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_session_id_is_rejected() {
    let service = create_memory_service(100);
    let with_id = PracticeSessionDraft {
        id: Some("lesson-1".to_owned()),
        ..draft(SkillCategory::Chord, 60.0, 2)
    };
    service.record_session(with_id.clone()).await.unwrap();

    let err = service.record_session(with_id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(service.store().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_profile_without_history_is_a_fresh_profile() {
    let service = create_memory_service(100);
    let profile = service.profile().await.unwrap();
    assert_eq!(profile.level, 1);
    assert_eq!(profile.total_sessions, 0);
    assert!(profile.weak_areas.is_empty());
    assert!(profile.last_practiced_at.is_none());
}

#[tokio::test]
async fn test_low_accuracy_chords_surface_everywhere() {
    let service = create_memory_service(100);
    record_low_chord_run(&service).await;
    let now = reference_now();

    let weak_areas = service.weak_areas_at(now).await.unwrap();
    assert_eq!(weak_areas.first().map(|w| w.category), Some(SkillCategory::Chord));

    let stored = service.store().load().await.unwrap().unwrap();
    assert_eq!(stored.weak_areas, weak_areas);

    let analysis = service.training_analysis_at(now).await.unwrap();
    assert_eq!(analysis.suggested_focus, "Chords");

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let recommendations = service.recommendations_at(now, &mut rng).await.unwrap();
    assert!(!recommendations.is_empty());
    assert!(recommendations
        .windows(2)
        .all(|pair| pair[0].priority >= pair[1].priority));

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let plan = service.daily_plan_at(now, &mut rng).await.unwrap();
    assert_eq!(plan.date, now.date_naive());
    assert_eq!(
        plan.modules.first().map(|m| m.id.as_str()),
        Some("chords-basic-open")
    );
    assert!(plan.rationale.contains("Chords needs attention"));
}

#[tokio::test]
async fn test_seeded_queries_are_reproducible() {
    let service = create_memory_service(100);
    record_low_chord_run(&service).await;
    service
        .record_session_at(draft(SkillCategory::Scale, 88.0, 0), reference_now())
        .await
        .unwrap();

    let first = service
        .recommendations_at(reference_now(), &mut ChaCha8Rng::seed_from_u64(5))
        .await
        .unwrap();
    let second = service
        .recommendations_at(reference_now(), &mut ChaCha8Rng::seed_from_u64(5))
        .await
        .unwrap();
    assert_eq!(first, second);

    let plan_a = service
        .daily_plan_at(reference_now(), &mut ChaCha8Rng::seed_from_u64(9))
        .await
        .unwrap();
    let plan_b = service
        .daily_plan_at(reference_now(), &mut ChaCha8Rng::seed_from_u64(9))
        .await
        .unwrap();
    assert_eq!(plan_a, plan_b);
}

#[tokio::test]
async fn test_new_user_plan_and_insights() {
    let service = create_memory_service(100);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let plan = service.daily_plan_at(reference_now(), &mut rng).await.unwrap();
    let ids: Vec<&str> = plan.modules.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["chords-basic-open"]);
    assert_eq!(plan.total_duration_minutes, 15);

    let insights = service.insights_at(reference_now()).await.unwrap();
    let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![InsightKind::Accuracy]);

    let analysis = service.training_analysis_at(reference_now()).await.unwrap();
    assert_eq!(analysis.suggested_focus, "Chord Transitions");
}

#[tokio::test]
async fn test_history_by_category_and_manual_prune() {
    let service = create_memory_service(100);
    for (category, hours_ago) in [
        (SkillCategory::Chord, 4),
        (SkillCategory::EarTraining, 3),
        (SkillCategory::Chord, 2),
        (SkillCategory::EarTraining, 1),
    ] {
        service
            .record_session_at(draft(category, 65.0, hours_ago), reference_now())
            .await
            .unwrap();
    }

    let ear = service
        .history_by_category(SkillCategory::EarTraining, None)
        .await
        .unwrap();
    assert_eq!(ear.len(), 2);
    assert!(ear.iter().all(|s| s.category == SkillCategory::EarTraining));
    assert!(ear[0].timestamp > ear[1].timestamp);

    assert_eq!(service.prune(1).await.unwrap(), 3);
    let remaining = service.history(None).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].category, SkillCategory::EarTraining);
    assert_eq!(service.profile().await.unwrap().total_sessions, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_records_leave_profile_consistent() {
    let service = Arc::new(create_memory_service(100));
    let mut handles = Vec::new();
    for i in 0..8_i64 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service
                .record_session_at(draft(SkillCategory::Song, 70.0, i), reference_now())
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = service.store().load().await.unwrap().unwrap();
    assert_eq!(stored.total_sessions, 8);
    assert_eq!(stored.total_practice_time_seconds, 8 * 600);
}

#[tokio::test]
async fn test_service_over_sqlite_store() {
    let dir = TempDir::new().unwrap();
    let store = create_sqlite_store(dir.path()).await;
    let service = PracticeService::with_config(store, 4, &IntelligenceConfig::default());

    record_low_chord_run(&service).await;
    assert_eq!(service.store().count().await.unwrap(), 4);

    let stored = service.store().load().await.unwrap().unwrap();
    assert_eq!(stored.total_sessions, 4);

    let history = service.history(Some(2)).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!((history[0].accuracy - 47.0).abs() < f64::EPSILON);
    assert!((history[1].accuracy - 50.0).abs() < f64::EPSILON);
}
