use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tf_idf_classifier::TextClassifier;

const CLASSES: [&str; 4] = ["finance", "food", "housing", "travel"];

/// deterministic synthetic corpus: each class draws from its own word pool plus shared filler
fn make_documents(class_idx: usize, n: usize) -> Vec<String> {
    let shared = ["the", "of", "and", "payment", "XXXX"];
    (0..n)
        .map(|i| {
            let own: Vec<String> = (0..6)
                .map(|j| format!("c{}w{}", class_idx, (i * 7 + j * 13) % 200))
                .collect();
            format!("{} {} {}", own.join(" "), shared[i % shared.len()], shared[(i + 2) % shared.len()])
        })
        .collect()
}

fn build(docs: &[Vec<String>]) -> TextClassifier {
    let mut clf: TextClassifier = TextClassifier::new(CLASSES).expect("valid labels");
    for (class, class_docs) in CLASSES.iter().zip(docs) {
        clf.train(class, class_docs).expect("valid documents");
    }
    clf
}

fn train_and_classify_benchmark(c: &mut Criterion) {
    let docs: Vec<Vec<String>> = (0..CLASSES.len()).map(|i| make_documents(i, 2_000)).collect();

    c.bench_function("train", |b| {
        b.iter(|| build(black_box(&docs)));
    });

    let mut clf = build(&docs);
    c.bench_function("finalize", |b| {
        b.iter(|| clf.finalize().expect("initialized"));
    });

    let query = "c2w13 c2w26 payment of XXXX unknownword";
    c.bench_function("classify", |b| {
        b.iter(|| clf.classify(black_box(query)).expect("initialized"));
    });
}

criterion_group!(benches, train_and_classify_benchmark);
criterion_main!(benches);
