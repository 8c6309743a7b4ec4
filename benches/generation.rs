use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_wordsearch::core::{generate, PuzzleConfig, SimpleRng};

fn word_pool() -> Vec<String> {
    [
        "gato", "perro", "sol", "luna", "mar", "cielo", "nube", "flor", "casa", "playa",
        "camino", "puente", "ciudad", "pueblo", "libro", "papel", "mesa", "silla", "fruta",
        "naranja",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn bench_generate(c: &mut Criterion) {
    let pool = word_pool();
    let config = PuzzleConfig::default();

    c.bench_function("generate_15x15_10_words", |b| {
        let mut seed = 1u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut rng = SimpleRng::new(seed);
            black_box(generate(black_box(&pool), &config, &mut rng))
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    use tui_wordsearch::core::GameSession;

    let pool = word_pool();
    let mut rng = SimpleRng::new(7);
    let puzzle = generate(&pool, &PuzzleConfig::default(), &mut rng);
    let path = puzzle.placed[0].path.clone();
    let session = GameSession::word_search(puzzle);

    c.bench_function("evaluate_selection", |b| {
        b.iter(|| {
            let mut game = session.clone();
            black_box(game.evaluate(black_box(&path)))
        })
    });
}

criterion_group!(benches, bench_generate, bench_evaluate);
criterion_main!(benches);
