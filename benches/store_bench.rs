// ABOUTME: Criterion benchmarks for the session stores
// ABOUTME: Measures append, newest-first queries, and pruning on the in-memory and SQLite backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Criterion benchmarks for session store operations.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::cast_possible_wrap,
    missing_docs
)]

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Duration;
use common::fixtures::{bench_now, generate_sessions, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fretwise::database_plugins::{InMemoryStore, SessionStore, SqliteStore};
use fretwise::models::{PracticeSession, SkillCategory};
use tokio::runtime::Runtime;

/// Counter for unique session ids across benchmark iterations
static SESSION_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_session() -> PracticeSession {
    let counter = SESSION_COUNTER.fetch_add(1, Ordering::SeqCst);
    PracticeSession::builder(
        SkillCategory::Scale,
        "a-minor-pentatonic",
        76.5,
        bench_now() + Duration::seconds(counter as i64),
    )
    .id(format!("bench-append-{counter}"))
    .duration_seconds(420)
    .build()
}

async fn filled<S: SessionStore>(store: S, count: usize) -> S {
    for session in generate_sessions(count) {
        store.append(session).await.unwrap();
    }
    store
}

fn bench_append(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("store_append");

    let memory = InMemoryStore::new();
    group.bench_function("memory", |b| {
        b.iter(|| rt.block_on(memory.append(black_box(next_session()))).unwrap());
    });

    let sqlite = rt.block_on(SqliteStore::new("sqlite::memory:")).unwrap();
    group.bench_function("sqlite", |b| {
        b.iter(|| rt.block_on(sqlite.append(black_box(next_session()))).unwrap());
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("store_query");

    for size in HistorySize::ALL {
        let memory = rt.block_on(filled(InMemoryStore::new(), size.count()));
        let sqlite = rt.block_on(async {
            filled(SqliteStore::new("sqlite::memory:").await.unwrap(), size.count()).await
        });

        group.bench_with_input(BenchmarkId::new("memory_all", size.count()), &memory, |b, store| {
            b.iter(|| rt.block_on(store.query(None)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("sqlite_all", size.count()), &sqlite, |b, store| {
            b.iter(|| rt.block_on(store.query(None)).unwrap());
        });
        group.bench_with_input(
            BenchmarkId::new("sqlite_category_20", size.count()),
            &sqlite,
            |b, store| {
                b.iter(|| {
                    rt.block_on(store.query_by_category(SkillCategory::Chord, Some(20)))
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_prune(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let count = HistorySize::Medium.count();

    c.bench_function("store_prune_memory", |b| {
        b.iter_batched(
            || rt.block_on(filled(InMemoryStore::new(), count)),
            |store| rt.block_on(store.prune_to_most_recent(count / 2)).unwrap(),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_append, bench_query, bench_prune);
criterion_main!(benches);
