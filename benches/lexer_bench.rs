use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathlang::Tokenizer;

fn lexer_benchmark(c: &mut Criterion) {
    let source = r#"
        let x = 5
        let y = 7
        let z = x + y - 2
        note "intermediate result"
        print "z is"
        print z;
    "#;

    c.bench_function("tokenize simple program", |b| {
        b.iter(|| {
            let mut tokenizer = Tokenizer::new(black_box(source));
            tokenizer.tokenize().unwrap()
        })
    });
}

criterion_group!(benches, lexer_benchmark);
criterion_main!(benches);
