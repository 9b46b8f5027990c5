use std::hint::black_box;

use bluefeed::domain::{
    markup::parse_highlights,
    rich_text::transform,
    text::{wrap_styled, wrap_words},
};
use criterion::{criterion_group, criterion_main, Criterion};

const FRAGMENT: &str = r#"Classes
• <mark>Shaman</mark> Elemental: Lava Burst damage increased by 8%.
• <mark>Shaman</mark> Enhancement: Stormstrike now correctly benefits from Mastery.
- Restoration: Healing Rain radius restored to 10 yards.
Delves:
Zekvir's Lair difficulty has been reduced for groups of 2 or fewer players, and the encounter no longer resets when a party member is defeated.
Items
* Fixed an issue where some <mark>shaman</mark> totems were not displayed on the action bar after a reload &amp; a zone change.
Quests: The campaign chapter "Against the Current" can be completed again."#;

fn benchmark(c: &mut Criterion) {
    c.bench_function("rich-text-transform", |b| {
        b.iter(|| transform(black_box(FRAGMENT)))
    });

    c.bench_function("wrap-words", |b| {
        b.iter(|| wrap_words(black_box(FRAGMENT), black_box(40)))
    });

    let runs: Vec<(String, bool)> = FRAGMENT
        .lines()
        .flat_map(parse_highlights)
        .map(|segment| (segment.text, segment.highlighted))
        .collect();
    c.bench_function("wrap-styled", |b| {
        b.iter(|| wrap_styled(black_box(&runs), black_box(40)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
