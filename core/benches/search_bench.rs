use criterion::{criterion_group, criterion_main, Criterion};
use search_core::{DocumentStatus, SearchServer};

fn build_server() -> SearchServer {
    let words: Vec<String> = (0..2000).map(|i| format!("w{i}")).collect();
    let mut server = SearchServer::new("and with the").unwrap();
    let mut seed: usize = 17;
    for id in 0..10_000 {
        let text: Vec<&str> = (0..40)
            .map(|_| {
                seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                words[(seed >> 33) % words.len()].as_str()
            })
            .collect();
        server.add_document(id, &text.join(" "), DocumentStatus::Active, &[1, 2, 3]).unwrap();
    }
    server
}

fn bench_find_top(c: &mut Criterion) {
    let server = build_server();
    let query: String = (0..300).map(|i| format!("w{} -w{} ", i * 5, i * 5 + 1)).collect();
    c.bench_function("find_top_documents_seq", |b| {
        b.iter(|| server.find_top_documents(&query).unwrap())
    });
    c.bench_function("find_top_documents_par", |b| {
        b.iter(|| server.find_top_documents_par(&query).unwrap())
    });
}

criterion_group!(benches, bench_find_top);
criterion_main!(benches);
