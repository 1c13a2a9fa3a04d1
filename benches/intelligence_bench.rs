// ABOUTME: Criterion benchmarks for the practice analytics engine
// ABOUTME: Measures weak-area detection, profile building, recommendations, plans, and analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fretwise Practice Intelligence

//! Criterion benchmarks for the analytics engine.
//!
//! Every component is pure, so these run without a store over histories of
//! 100, 500 and 2000 sessions.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{bench_now, generate_sessions, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fretwise::intelligence::{
    DailyPlanBuilder, InsightGenerator, IntelligenceConfig, ModuleCatalog, ProfileBuilder,
    RecommendationEngine, TrainingAnalyzer, WeakAreaAnalyzer,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_weak_areas(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let analyzer = WeakAreaAnalyzer::with_config(config.weak_area.clone());
    let builder = ProfileBuilder::with_config(config.profile.clone(), config.weak_area);
    let mut group = c.benchmark_group("weak_areas");

    for size in HistorySize::ALL {
        let history = generate_sessions(size.count());
        let profile = builder.build_at(&history, bench_now());
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size.count()),
            &history,
            |b, history| {
                b.iter(|| analyzer.analyze_at(black_box(history), &profile, bench_now()));
            },
        );
    }
    group.finish();
}

fn bench_profile_build(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let builder = ProfileBuilder::with_config(config.profile, config.weak_area);
    let mut group = c.benchmark_group("profile_build");

    for size in HistorySize::ALL {
        let history = generate_sessions(size.count());
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size.count()),
            &history,
            |b, history| {
                b.iter(|| builder.build_at(black_box(history), bench_now()));
            },
        );
    }
    group.finish();
}

fn bench_recommendations(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let builder = ProfileBuilder::with_config(config.profile.clone(), config.weak_area.clone());
    let engine = RecommendationEngine::with_config(config.recommendation);
    let mut group = c.benchmark_group("recommendations");

    for size in HistorySize::ALL {
        let history = generate_sessions(size.count());
        let profile = builder.build_at(&history, bench_now());
        group.bench_with_input(
            BenchmarkId::from_parameter(size.count()),
            &history,
            |b, history| {
                let mut rng = ChaCha8Rng::seed_from_u64(42);
                b.iter(|| {
                    engine.generate_at(
                        &profile,
                        &profile.weak_areas,
                        black_box(history),
                        bench_now(),
                        &mut rng,
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_daily_plan(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let builder = ProfileBuilder::with_config(config.profile.clone(), config.weak_area.clone());
    let planner = DailyPlanBuilder::with_config(config.planning, config.analysis);
    let catalog = ModuleCatalog::builtin();
    let profile = builder.build_at(&generate_sessions(HistorySize::Medium.count()), bench_now());

    c.bench_function("daily_plan", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| {
            planner.build_on(
                black_box(&profile),
                &catalog,
                bench_now().date_naive(),
                &mut rng,
            )
        });
    });
}

fn bench_training_analysis(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let builder = ProfileBuilder::with_config(config.profile.clone(), config.weak_area.clone());
    let analyzer = TrainingAnalyzer::with_config(config.analysis.clone(), config.weak_area);
    let insights = InsightGenerator::with_config(config.analysis);
    let mut group = c.benchmark_group("training_analysis");

    for size in HistorySize::ALL {
        let history = generate_sessions(size.count());
        let profile = builder.build_at(&history, bench_now());
        group.bench_with_input(
            BenchmarkId::new("analyze", size.count()),
            &history,
            |b, history| {
                b.iter(|| analyzer.analyze_at(black_box(history), &profile, bench_now()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("insights", size.count()),
            &history,
            |b, history| {
                b.iter(|| insights.generate_at(&profile, black_box(history), bench_now()));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_weak_areas,
    bench_profile_build,
    bench_recommendations,
    bench_daily_plan,
    bench_training_analysis
);
criterion_main!(benches);
