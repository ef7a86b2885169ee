use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use set_engine::cards::{full_deck, Card};
use set_engine::core::{GameRng, SetConfig, CLASSIC_COLORS};
use set_engine::game::GameModel;
use set_engine::rules::{count_sets, find_set, is_set};

fn shuffled_tables(n: usize, size: usize) -> Vec<Vec<Card>> {
    (0..n as u64)
        .map(|seed| {
            let mut model = GameModel::with_rng(SetConfig::default(), GameRng::new(seed));
            model.shuffle_unmatched();
            model.unmatched_cards().iter().take(size).copied().collect()
        })
        .collect()
}

fn bench_is_set(c: &mut Criterion) {
    let deck = full_deck(&CLASSIC_COLORS, 0);
    c.bench_function("is_set_all_triples_of_first_27", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for i in 0..27 {
                for j in (i + 1)..27 {
                    for k in (j + 1)..27 {
                        if is_set(black_box(&deck[i]), black_box(&deck[j]), black_box(&deck[k])) {
                            found += 1;
                        }
                    }
                }
            }
            found
        })
    });
}

fn bench_find_set(c: &mut Criterion) {
    let mut g = c.benchmark_group("find_set");
    for &size in &[12usize, 15, 21] {
        let tables = shuffled_tables(256, size);
        g.bench_with_input(BenchmarkId::new("table", size), &tables, |b, tables| {
            b.iter(|| {
                for table in tables {
                    black_box(find_set(black_box(table), &CLASSIC_COLORS));
                }
            })
        });
    }
    g.finish();
}

fn bench_count_full_deck(c: &mut Criterion) {
    let deck = full_deck(&CLASSIC_COLORS, 0);
    c.bench_function("count_sets_full_deck", |b| {
        b.iter(|| count_sets(black_box(&deck), &CLASSIC_COLORS))
    });
}

criterion_group!(benches, bench_is_set, bench_find_set, bench_count_full_deck);
criterion_main!(benches);
