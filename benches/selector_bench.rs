use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use reflekt::rules::ResponseSelector;
use reflekt::session::Session;
use reflekt::types::{Language, Utterance};

fn bench_selector_select(c: &mut Criterion) {
    let selector = ResponseSelector::builtin();
    let mut group = c.benchmark_group("selector_select");

    let inputs = [
        ("first_rule", Language::En, "I feel sad about my mother"),
        ("mid_bank", Language::En, "I would like to travel to the sea"),
        ("catch_all", Language::En, "the quick brown fox jumps over the lazy dog"),
        ("swedish", Language::Sv, "jag vill åka hem till min familj"),
    ];

    for (name, language, raw) in inputs {
        let utterance = Utterance::from_raw(raw);
        let mut session = Session::new(1, language);
        group.bench_with_input(BenchmarkId::from_parameter(name), &utterance, |b, u| {
            b.iter(|| {
                let response = selector.select(black_box(u), &mut session);
                black_box(response.text);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_selector_select);
criterion_main!(benches);
