use criterion::{Criterion, criterion_group, criterion_main};
use tau_docs_engine::{HighlightMode, Highlighter, Keywords};

fn generate_tau_source(functions: usize) -> String {
    let mut source = String::new();
    for i in 0..functions {
        source.push_str(&format!(
            "// helper number {i}\n\
             sun_liyo_tau f{i} ne_bana_diye tau_ka_jugaad(x) {{\n\
             \x20   agar_maan_lo (x < {i}) {{ laadle_ye_le \"small\"; }} na_toh {{ laadle_ye_le x * 2; }}\n\
             }};\n"
        ));
    }
    source
}

fn bench_highlight_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");
    group.sample_size(10);

    let content = generate_tau_source(200);
    for (name, mode) in [
        ("passes", HighlightMode::Passes),
        ("lexer", HighlightMode::Lexer),
    ] {
        let highlighter = Highlighter::new(Keywords::builtin(), mode);
        group.bench_function(name, |b| {
            b.iter(|| std::hint::black_box(highlighter.highlight(std::hint::black_box(&content))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_highlight_modes);
criterion_main!(benches);
