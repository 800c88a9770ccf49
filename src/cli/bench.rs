use crate::error::Result;
use crate::pipeline::generate;
use rand::RngCore;
use serde::Serialize;
use std::fmt::Write;
use std::time::Instant;

/// Options for the bench command
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Iteration counts to sweep; each drives both the chain length and
    /// the KDF work factor.
    pub iteration_counts: Vec<u32>,
    /// Largest confusion-string length; odd lengths from 1 are swept.
    pub max_pattern_len: usize,
    /// Emit the samples as JSON instead of a table.
    pub json: bool,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            iteration_counts: vec![10, 50, 100],
            max_pattern_len: 15,
            json: false,
        }
    }
}

/// One timed `generate` call
#[derive(Debug, Serialize)]
pub struct BenchSample {
    pub iterations: u32,
    pub pattern_len: usize,
    pub stream_len: usize,
    pub elapsed_secs: f64,
}

/// Time the generator over randomly drawn inputs.
///
/// A 16-byte random password is fixed for the whole sweep; each sample
/// uses a fresh random confusion pattern of the given length. Stream
/// lengths vary between runs by design, so elapsed times are indicative,
/// not reproducible.
pub fn run_bench(options: &BenchOptions) -> Result<String> {
    let mut rng = rand::thread_rng();
    let mut password = [0u8; 16];
    rng.fill_bytes(&mut password);

    let mut samples = Vec::new();
    for &iterations in &options.iteration_counts {
        for pattern_len in (1..=options.max_pattern_len).step_by(2) {
            let mut pattern = vec![0u8; pattern_len];
            rng.fill_bytes(&mut pattern);

            let start = Instant::now();
            let stream = generate(&password, &pattern, iterations)?;
            let elapsed = start.elapsed();

            samples.push(BenchSample {
                iterations,
                pattern_len,
                stream_len: stream.len(),
                elapsed_secs: elapsed.as_secs_f64(),
            });
        }
    }

    if options.json {
        return Ok(serde_json::to_string_pretty(&samples)?);
    }
    Ok(render_table(&samples))
}

fn render_table(samples: &[BenchSample]) -> String {
    let mut table = String::from("iterations  pattern_len  stream_bytes    seconds\n");
    for sample in samples {
        let _ = writeln!(
            table,
            "{:>10}  {:>11}  {:>12}  {:>9.6}",
            sample.iterations, sample.pattern_len, sample.stream_len, sample.elapsed_secs
        );
    }
    table
}
