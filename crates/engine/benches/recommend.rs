//! Benchmarks for the recommendation call
//!
//! Run with: cargo bench --package engine
//!
//! Builds a synthetic library (every genre populated, a directory of users
//! with overlapping favorites) and times the full pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::{recommend, TasteProfile};
use store::{Catalog, Directory, Genre, Series};

const SERIES_PER_GENRE: usize = 100;
const FRIENDS: usize = 50;

fn build_library() -> (Catalog, Directory) {
    let mut catalog = Catalog::new();
    for genre in Genre::ALL {
        for i in 0..SERIES_PER_GENRE {
            catalog
                .add(Series {
                    name: format!("{genre:?}{i}"),
                    episodes: 10,
                    genre,
                    age_range: None,
                    episode_duration: 20.0 + (i % 40) as f64,
                })
                .expect("Failed to build catalog");
        }
    }

    let mut directory = Directory::new();
    directory.add_user("Subject", 40).expect("Failed to add user");
    for i in 0..10 {
        directory
            .add_favorite("Subject", &format!("Drama{i}"))
            .unwrap();
    }
    for f in 0..FRIENDS {
        let friend = format!("Friend{f}");
        directory.add_user(&friend, 30).unwrap();
        directory.add_friend("Subject", &friend).unwrap();
        // Each friend favorites a sliding window of dramas and mysteries.
        for i in 0..20 {
            directory
                .add_favorite(&friend, &format!("Drama{}", (f + i) % SERIES_PER_GENRE))
                .unwrap();
            directory
                .add_favorite(&friend, &format!("Mystery{}", (f + i) % SERIES_PER_GENRE))
                .unwrap();
        }
    }

    (catalog, directory)
}

fn bench_recommend(c: &mut Criterion) {
    let (catalog, directory) = build_library();

    c.bench_function("recommend_uncapped", |b| {
        b.iter(|| {
            let recs = recommend(
                black_box(&catalog),
                black_box(&directory),
                black_box("Subject"),
                black_box(0),
            )
            .expect("recommendation failed");
            black_box(recs.count())
        })
    });

    c.bench_function("recommend_capped_10", |b| {
        b.iter(|| {
            let recs = recommend(
                black_box(&catalog),
                black_box(&directory),
                black_box("Subject"),
                black_box(10),
            )
            .expect("recommendation failed");
            black_box(recs.count())
        })
    });
}

fn bench_build_taste_profile(c: &mut Criterion) {
    let (catalog, directory) = build_library();
    let user = directory.lookup("Subject").expect("user missing");

    c.bench_function("build_taste_profile", |b| {
        b.iter(|| {
            let profile = TasteProfile::build(&catalog, &directory, black_box(user)).unwrap();
            black_box(profile)
        })
    });
}

criterion_group!(benches, bench_recommend, bench_build_taste_profile);
criterion_main!(benches);
