//! A fan of rays hitting a glass lens (a curved front surface followed by a flat back surface). Every
//! refractive boundary splits a ray into a transmitted and a reflected branch with Fresnel weights.
use polray::{
    degree, elements::RefractiveBoundary, error::PolResult, inspect::inspect_near, millimeter,
    nanometer, polarization::Jones, Scene, Source, TraceConfig, Tracer,
};

fn main() -> PolResult<()> {
    env_logger::init();
    let mut scene = Scene::new();
    scene.set_description("plano-convex lens");
    scene.add_arc(
        "front surface",
        millimeter!(-12.725, 12.7),
        millimeter!(-12.725, -12.7),
        millimeter!(51.5),
        RefractiveBoundary::new(1.0, 1.5)?,
    )?;
    scene.add_line(
        "back surface",
        millimeter!(-6.0, -12.7),
        millimeter!(-6.0, 12.7),
        RefractiveBoundary::new(1.0, 1.5)?,
    )?;
    scene.add_source(Source::new(
        millimeter!(-60.0, 0.0),
        degree!(0.0),
        degree!(20.0),
        11,
        nanometer!(633.0),
        Jones::linear(degree!(45.0)),
    )?);
    let mut config = TraceConfig::default();
    config.set_intensity_threshold(1.0e-4)?;
    let result = Tracer::new(config).trace(&scene)?;
    println!("{}:", scene.description());
    for path in result.paths() {
        println!("  {path}");
    }
    for (reason, count) in result.statistics() {
        println!(
            "{reason}: {count} path(s), total intensity {:.6}",
            result.total_intensity(reason)
        );
    }
    if let Some(found) = inspect_near(result.paths(), millimeter!(20.0, 0.0), millimeter!(2.0)) {
        println!(
            "nearest segment to (20 mm, 0 mm): path {}, segment {}, intensity {:.4}, polarization {}",
            found.path_index(),
            found.segment_index(),
            found.intensity(),
            found.polarization()
        );
    }
    Ok(())
}
