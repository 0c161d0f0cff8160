use criterion::{criterion_group, criterion_main, Criterion};
use polray::{
    degree,
    elements::{BeamSplitter, Mirror, RefractiveBoundary, ThinLens, Waveplate},
    millimeter, nanometer,
    polarization::Jones,
    Scene, Source, TraceConfig, Tracer,
};

fn scene() -> Scene {
    let mut scene = Scene::new();
    scene
        .add_line(
            "lens",
            millimeter!(0.0, 25.0),
            millimeter!(0.0, -25.0),
            ThinLens::new(millimeter!(200.0)).unwrap(),
        )
        .unwrap();
    scene
        .add_arc(
            "window front",
            millimeter!(40.0, 25.0),
            millimeter!(40.0, -25.0),
            millimeter!(100.0),
            RefractiveBoundary::new(1.0, 1.5).unwrap(),
        )
        .unwrap();
    scene
        .add_line(
            "window back",
            millimeter!(50.0, -25.0),
            millimeter!(50.0, 25.0),
            RefractiveBoundary::new(1.0, 1.5).unwrap(),
        )
        .unwrap();
    scene
        .add_line(
            "waveplate",
            millimeter!(70.0, 25.0),
            millimeter!(70.0, -25.0),
            Waveplate::quarter_wave(degree!(30.0)).unwrap(),
        )
        .unwrap();
    scene
        .add_line(
            "splitter",
            millimeter!(90.0, -25.0),
            millimeter!(110.0, 25.0),
            BeamSplitter::new(50.0, 50.0).unwrap(),
        )
        .unwrap();
    scene
        .add_line(
            "end mirror",
            millimeter!(150.0, 25.0),
            millimeter!(150.0, -25.0),
            Mirror::new(0.99).unwrap(),
        )
        .unwrap();
    scene.add_source(
        Source::new(
            millimeter!(-50.0, 0.0),
            degree!(0.0),
            degree!(30.0),
            256,
            nanometer!(1053.0),
            Jones::linear(degree!(10.0)),
        )
        .unwrap(),
    );
    scene
}

fn criterion_trace(c: &mut Criterion) {
    let scene = scene();
    let mut config = TraceConfig::default();
    config.set_intensity_threshold(1.0e-6).unwrap();
    let parallel = Tracer::new(config.clone());
    config.set_parallel(false);
    let sequential = Tracer::new(config);
    c.bench_function("trace parallel", |b| b.iter(|| parallel.trace(&scene)));
    c.bench_function("trace sequential", |b| b.iter(|| sequential.trace(&scene)));
}

criterion_group!(benches, criterion_trace);
criterion_main!(benches);
