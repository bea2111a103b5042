//! Indexing and ranking benchmarks for the core search engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use search_core::prelude::*;

fn generate_documents(n_docs: usize, terms_per_doc: usize, vocab_size: usize) -> Vec<String> {
    (0..n_docs)
        .map(|d| {
            (0..terms_per_doc)
                .map(|i| format!("term{}", (i * 7 + d) % vocab_size))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn build_server(documents: &[String]) -> SearchServer {
    let mut server = SearchServer::new::<&str>("").unwrap();
    for (id, doc) in documents.iter().enumerate() {
        server
            .add_document(id as i64, doc.clone(), DocumentStatus::Actual, &[1])
            .unwrap();
    }
    server
}

fn actual(_id: i64, status: DocumentStatus, _rating: i32) -> bool {
    status == DocumentStatus::Actual
}

fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexing");

    for (n_docs, terms_per_doc) in [(100, 50), (1000, 100), (10000, 200)].iter() {
        let vocab_size = 1000;
        let documents = generate_documents(*n_docs, *terms_per_doc, vocab_size);

        group.bench_with_input(
            BenchmarkId::new("add_document", format!("{}docs_{}terms", n_docs, terms_per_doc)),
            &documents,
            |b, docs| {
                b.iter(|| {
                    black_box(build_server(docs));
                })
            },
        );
    }

    group.finish();
}

fn bench_find_top_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_top_documents");

    for (n_docs, terms_per_doc) in [(1000, 100), (10000, 200), (100000, 300)].iter() {
        let vocab_size = 1000;
        let documents = generate_documents(*n_docs, *terms_per_doc, vocab_size);
        let server = build_server(&documents);

        let query = "term1 term8 term15 -term22";

        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{}docs", n_docs)),
            &server,
            |b, server| {
                b.iter(|| {
                    black_box(server.find_top_documents(query, actual).unwrap());
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", format!("{}docs", n_docs)),
            &server,
            |b, server| {
                b.iter(|| {
                    black_box(server.find_top_documents_parallel(query, actual).unwrap());
                })
            },
        );
    }

    group.finish();
}

fn bench_bulk_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_queries");

    let vocab_size = 1000;
    let documents = generate_documents(5000, 150, vocab_size);
    let server = build_server(&documents);

    for query_count in [10usize, 100, 1000].iter() {
        let queries: Vec<String> = (0..*query_count)
            .map(|i| format!("term{} -term{}", i % vocab_size, (i * 3) % vocab_size))
            .collect();

        group.bench_with_input(BenchmarkId::new("process_queries", query_count), &queries, |b, qs| {
            b.iter(|| {
                black_box(process_queries(&server, qs));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_indexing, bench_find_top_documents, bench_bulk_queries);
criterion_main!(benches);
