//! Demonstrates enabling verbose logging for fourier-engine.
use fourier_engine::Fourier64;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let mut engine = Fourier64::new(signal.len());

    engine.fft(&signal).unwrap();
    engine.dft(&signal).unwrap();
    if let Err(e) = engine.fft(&[0.0f64; 9]) {
        log::error!("{e}");
    }
}
