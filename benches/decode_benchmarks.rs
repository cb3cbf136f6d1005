//! Glyph token decoding benchmarks
//!
//! Measures the cost of each resolution tier: exact hits are hash lookups,
//! the fallback tiers scan the whole table.

use arabic_glyph_decoder::{GlyphTable, TokenStreamDecoder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const EXACT_LINE: &str = "/lamfinal/yehmedial/kafinitial/wawfinal/laminitial/arabicalef \
                          /reh/aleffinal/tehmedial/khahinitial/arabicalef /lamwithalefisolated";

const FALLBACK_LINE: &str = "/LAMFINAL/alefmedial/noonisolated/edial/zzzznotaglyph/ArabicAlef";

fn bench_build_table(c: &mut Criterion) {
    c.bench_function("build_table", |b| b.iter(GlyphTable::build));
}

fn bench_decode(c: &mut Criterion) {
    let table = GlyphTable::build();
    let decoder = TokenStreamDecoder::new(&table);
    let page = EXACT_LINE.repeat(50);

    c.bench_function("decode_exact_line", |b| b.iter(|| decoder.decode(black_box(EXACT_LINE))));
    c.bench_function("decode_fallback_line", |b| {
        b.iter(|| decoder.decode(black_box(FALLBACK_LINE)))
    });
    c.bench_function("decode_page", |b| b.iter(|| decoder.decode(black_box(&page))));
    c.bench_function("audit_page", |b| b.iter(|| decoder.audit(black_box(&page))));
}

criterion_group!(benches, bench_build_table, bench_decode);
criterion_main!(benches);
