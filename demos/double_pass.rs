//! Double pass through a waveplate: a linearly polarized beam passes a waveplate, is reflected by a
//! mirror and passes the waveplate a second time. With a quarter-wave plate at 45° to the input
//! polarization the returning beam is rotated by 90°. A half-wave plate has no net effect.
use polray::{
    degree,
    elements::{Mirror, Waveplate},
    error::PolResult,
    millimeter, nanometer,
    polarization::Jones,
    Scene, Source, TraceConfig, Tracer,
};
use uom::si::angle::degree;

fn double_pass(waveplate: Waveplate) -> PolResult<Scene> {
    let mut scene = Scene::new();
    scene.set_description("waveplate double pass");
    scene.add_line(
        "waveplate",
        millimeter!(50.0, 12.7),
        millimeter!(50.0, -12.7),
        waveplate,
    )?;
    scene.add_line(
        "end mirror",
        millimeter!(100.0, 12.7),
        millimeter!(100.0, -12.7),
        Mirror::default(),
    )?;
    scene.add_source(Source::single_ray(
        millimeter!(0.0, 0.0),
        degree!(0.0),
        nanometer!(1053.0),
        Jones::linear(degree!(45.0)),
    )?);
    Ok(scene)
}

fn main() -> PolResult<()> {
    env_logger::init();
    let tracer = Tracer::new(TraceConfig::default());
    for (label, waveplate) in [
        ("quarter-wave", Waveplate::quarter_wave(degree!(0.0))?),
        ("half-wave", Waveplate::half_wave(degree!(22.5))?),
    ] {
        let scene = double_pass(waveplate)?;
        let result = tracer.trace(&scene)?;
        println!("{} ({label}):", scene.description());
        for path in result.paths() {
            println!("  {path}");
            for (i, segment) in path.segments().iter().enumerate() {
                let pol = segment.polarization();
                println!(
                    "    segment {i}: intensity {:.4}, polarization {pol}, {} at {:.1}°",
                    segment.intensity(),
                    pol.handedness(),
                    pol.orientation().get::<degree>()
                );
            }
        }
    }
    Ok(())
}
