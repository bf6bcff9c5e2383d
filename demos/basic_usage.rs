//! Basic usage example for fourier-engine
//!
//! Builds an engine, runs both transform paths on the same signal and prints
//! the derived spectra.

use fourier_engine::{ExactPolicy, Fourier, Fourier64};

fn main() {
    println!("=== fourier-engine Basic Usage Example ===\n");

    // 1. Radix-2 engine: 12 requested samples are padded to 16
    let sample_rate = 1600.0;
    let signal: Vec<f64> = (0..12)
        .map(|i| {
            let t = i as f64 / sample_rate;
            1.0 + 2.0 * (2.0 * std::f64::consts::PI * 200.0 * t).cos()
        })
        .collect();

    let mut engine = Fourier64::new(signal.len());
    println!("1. Radix-2 engine");
    println!("   Requested: {}, working size: {}", signal.len(), engine.size());

    engine.fft(&signal).unwrap();
    let freqs = engine.bin_frequencies(sample_rate).unwrap();
    for (f, a) in freqs.iter().zip(engine.one_sided_amplitudes()) {
        println!("   {:>7.1} Hz  {:.4}", f, a);
    }
    println!();

    // 2. Direct path on the same data for comparison
    println!("2. Direct transform");
    let fast = engine.fourier_coef();
    engine.dft(&signal).unwrap();
    let max_diff = fast
        .iter()
        .zip(engine.fourier_coef())
        .map(|(a, b)| (a.re - b.re).abs().max((a.im - b.im).abs()))
        .fold(0.0, f64::max);
    println!("   Max deviation from fft path: {:.3e}", max_diff);
    println!();

    // 3. Exact-size engine keeps 12 bins
    println!("3. Exact-size engine");
    let mut exact: Fourier<f64, ExactPolicy> = Fourier::with_policy(signal.len(), ExactPolicy);
    exact.fft(&signal).unwrap();
    println!("   Working size: {}", exact.size());
    println!(
        "   Power (dB): {:?}",
        exact
            .powers_db(-120.0)
            .iter()
            .map(|p| format!("{:.1}", p))
            .collect::<Vec<_>>()
    );
    println!(
        "   Phase: {:?}",
        exact
            .phases()
            .iter()
            .map(|p| format!("{:.2}", p))
            .collect::<Vec<_>>()
    );
    println!();

    // 4. Oversized input is refused
    println!("4. Oversized input");
    match exact.fft(&[0i32; 13]) {
        Ok(()) => println!("   unexpectedly accepted"),
        Err(e) => println!("   rejected: {}", e),
    }
}
