use card_flight::core::{SceneConfig, TextureId};
use card_flight::scene::TransferScene;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

const FRAME: f32 = 1.0 / 60.0;

fn loaded_scene(cards_per_deck: usize) -> TransferScene {
    let config = SceneConfig::default().with_cards_per_deck(cards_per_deck);
    let mut scene = TransferScene::new(config).unwrap();
    scene.load((0..3).map(|i| TextureId::new(i, 120.0, 180.0)).collect());
    scene.resize(1280.0, 720.0);
    scene
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("load_3x144", |b| {
        b.iter(|| black_box(loaded_scene(144)));
    });
}

fn bench_advance_busy(c: &mut Criterion) {
    // Six cards in flight at once: two cycles into a two-second flight
    c.bench_function("advance_frame_busy", |b| {
        b.iter_batched(
            || {
                let mut scene = loaded_scene(144);
                scene.advance(1.0);
                scene.advance(1.0 - FRAME);
                scene
            },
            |mut scene| {
                for _ in 0..120 {
                    black_box(scene.advance(FRAME));
                }
                scene
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_render_list(c: &mut Criterion) {
    let mut scene = loaded_scene(144);
    scene.advance(1.0);
    scene.advance(0.5);

    c.bench_function("render_list_432", |b| {
        b.iter(|| black_box(scene.render_list()));
    });
}

criterion_group!(benches, bench_load, bench_advance_busy, bench_render_list);
criterion_main!(benches);
