use std::hint::black_box;

use bloglist::domain::{
    view::{filter, visible_blogs},
    Blog,
};
use criterion::{criterion_group, criterion_main, Criterion};

const TITLES: [&str; 6] = [
    "React patterns",
    "Go To Statement Considered Harmful",
    "Canonical string reduction",
    "First class tests",
    "TDD harms architecture",
    "Type wars",
];

fn blogs(count: usize) -> Vec<Blog> {
    (0..count)
        .map(|i| Blog {
            id: i.to_string(),
            title: format!("{} #{i}", TITLES[i % TITLES.len()]),
            author: "Robert C. Martin".to_string(),
            url: format!("https://example.com/{i}"),
            likes: (i as u64 * 7919) % 101,
            user: None,
        })
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let blogs = blogs(5_000);

    c.bench_function("filter", |b| {
        b.iter(|| filter(black_box(&blogs), black_box("tests")).len())
    });

    c.bench_function("visible-blogs-no-query", |b| {
        b.iter(|| visible_blogs(black_box(&blogs), black_box("")).len())
    });

    c.bench_function("visible-blogs-query", |b| {
        b.iter(|| visible_blogs(black_box(&blogs), black_box("ARCH")).len())
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
