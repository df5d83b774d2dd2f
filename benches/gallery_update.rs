// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery controller transitions.
//!
//! Measures the performance of:
//! - Accumulating many pages into one query session
//! - Pruning the image store when a new query starts

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::domain::gallery::{ImageRecord, SearchPage};
use iced_gallery::gallery::{Effect, Message, State};
use iced_gallery::media::ImageStore;
use std::hint::black_box;

const PER_PAGE: u64 = 20;

fn page(index: u64, total: usize) -> SearchPage {
    let start = index * PER_PAGE;
    let hits = (start..start + PER_PAGE)
        .map(|n| {
            ImageRecord::new(
                n,
                format!("https://cdn.example/{n}_thumb.jpg"),
                format!("https://cdn.example/{n}_large.jpg"),
            )
        })
        .collect();
    SearchPage::new(hits, total)
}

/// Feeds the response for the request issued by `effects`.
fn answer(state: &mut State, effects: &[Effect], response: SearchPage) -> Vec<Effect> {
    let Some(Effect::FetchPage(request)) = effects.first() else {
        return Vec::new();
    };
    state.handle(Message::PageFetched {
        request: request.id,
        outcome: Ok(response),
    })
}

fn run_session(pages: u64) -> State {
    let total = usize::try_from(pages * PER_PAGE).unwrap_or(usize::MAX);
    let mut state = State::new();
    let effects = state.handle(Message::SubmitQuery("mountains".into()));
    answer(&mut state, &effects, page(0, total));
    for index in 1..pages {
        let effects = state.handle(Message::AdvancePage);
        answer(&mut state, &effects, page(index, total));
    }
    state
}

/// Benchmark page accumulation for growing session lengths.
fn bench_page_accumulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_update");

    for pages in [1_u64, 10, 50] {
        group.bench_with_input(
            BenchmarkId::new("accumulate_pages", pages),
            &pages,
            |b, &pages| b.iter(|| black_box(run_session(pages))),
        );
    }

    group.finish();
}

/// Benchmark the store pruning done when a new query replaces the results.
fn bench_store_retain(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_update");
    let state = run_session(50);
    let urls: Vec<String> = state
        .results()
        .items()
        .iter()
        .map(|record| record.thumbnail_url.clone())
        .collect();

    group.bench_function("retain_after_new_query", |b| {
        b.iter(|| {
            let mut store = ImageStore::new();
            for url in store.request(urls.clone()) {
                store.insert(&url, Ok(vec![0_u8; 16]));
            }
            let fresh = State::new();
            black_box(store.retain(|url| fresh.references(url)))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_page_accumulation, bench_store_retain);
criterion_main!(benches);
