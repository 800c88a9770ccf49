use crate::error::Result;
use crate::pipeline::bootstrap::{bootstrap_seed, transform_pattern};
use crate::pipeline::extract::draw_segment;
use crate::pipeline::keymat::KeyMaterial;
use crate::pipeline::source::AesOfbSource;

/// Drives the full pipeline: one bootstrap, then a fixed number of chained
/// segment draws, each iteration reseeded from the tail output of the
/// previous one.
///
/// The whole run is deterministic in (password, pattern, iterations);
/// every byte of state is derived from those three inputs.
pub struct Generator<'a> {
    password: &'a [u8],
    pattern: &'a [u8],
    iterations: u32,
    segment_cap: Option<usize>,
}

impl<'a> Generator<'a> {
    pub fn new(password: &'a [u8], pattern: &'a [u8], iterations: u32) -> Self {
        Self {
            password,
            pattern,
            iterations,
            segment_cap: None,
        }
    }

    /// Bound each segment's length. Exceeding the bound fails the whole
    /// call with [`SeedstreamError::SegmentCapExceeded`] instead of
    /// drawing forever; no partial stream is returned.
    ///
    /// [`SeedstreamError::SegmentCapExceeded`]: crate::error::SeedstreamError::SegmentCapExceeded
    pub fn segment_cap(mut self, cap: usize) -> Self {
        self.segment_cap = Some(cap);
        self
    }

    /// Run the chain and return the per-iteration segments in order.
    ///
    /// Iteration `i` builds a fresh cipher source from key material
    /// `i - 1`, consumes a fresh copy of the transformed pattern, and
    /// leaves behind the reseed value that becomes key material `i`.
    pub fn run_chain(&self) -> Result<Vec<Vec<u8>>> {
        let seed = bootstrap_seed(self.password, self.pattern, self.iterations)?;
        let target = transform_pattern(self.pattern);

        let mut material = KeyMaterial::split(&seed)?;
        let mut segments = Vec::with_capacity(self.iterations as usize);

        for _ in 0..self.iterations {
            let mut source = AesOfbSource::new(&material);
            let draw = draw_segment(&mut source, &target, self.segment_cap)?;
            segments.push(draw.segment);
            material = KeyMaterial::split(&draw.reseed)?;
        }

        Ok(segments)
    }

    /// Run the chain and concatenate the segments into the final stream.
    pub fn generate(&self) -> Result<Vec<u8>> {
        Ok(self.run_chain()?.concat())
    }
}

/// One-call facade over [`Generator`].
///
/// Deterministic: fixed inputs always produce a bit-identical stream.
/// An empty `pattern` yields an empty stream regardless of `iterations`
/// (the transformed pattern is empty, so every segment is empty);
/// `iterations == 0` is rejected.
pub fn generate(password: &[u8], pattern: &[u8], iterations: u32) -> Result<Vec<u8>> {
    Generator::new(password, pattern, iterations).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeedstreamError;

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate(b"password", b"confusion", 3).unwrap();
        let b = generate(b"password", b"confusion", 3).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_segment_count_equals_iterations() {
        for iterations in [1u32, 2, 5] {
            let generator = Generator::new(b"password", b"confusion", iterations);
            let segments = generator.run_chain().unwrap();
            assert_eq!(segments.len(), iterations as usize);
        }
    }

    #[test]
    fn test_each_segment_is_non_empty() {
        let generator = Generator::new(b"password", b"confusion", 4);
        for segment in generator.run_chain().unwrap() {
            assert!(!segment.is_empty());
        }
    }

    #[test]
    fn test_iterations_change_more_than_the_tail() {
        // The iteration count feeds the KDF, so streams for n and n+1
        // iterations diverge from the first byte instead of sharing a
        // prefix.
        let three = generate(b"password", b"confusion", 3).unwrap();
        let four = generate(b"password", b"confusion", 4).unwrap();
        assert_ne!(three[..three.len().min(8)], four[..four.len().min(8)]);
    }

    #[test]
    fn test_sensitivity_to_password_and_pattern() {
        let base = generate(b"password", b"confusion", 2).unwrap();
        let other_password = generate(b"passwore", b"confusion", 2).unwrap();
        let other_pattern = generate(b"password", b"confusioN", 2).unwrap();

        assert_ne!(base, other_password);
        assert_ne!(base, other_pattern);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(matches!(
            generate(b"password", b"confusion", 0),
            Err(SeedstreamError::InvalidIterationCount)
        ));
    }

    #[test]
    fn test_empty_pattern_yields_empty_stream() {
        for iterations in [1u32, 3, 10] {
            let stream = generate(b"password", b"", iterations).unwrap();
            assert!(stream.is_empty());
        }
    }

    #[test]
    fn test_zero_password_single_byte_pattern_scenario() {
        // 16 zero bytes of password, one-byte pattern, one iteration:
        // the stream is everything drawn until the single transformed
        // target byte appears, and the run repeats bit for bit.
        let password = [0u8; 16];
        let first = generate(&password, &[0x00], 1).unwrap();
        let second = generate(&password, &[0x00], 1).unwrap();

        assert_eq!(first, second);
        assert!(!first.is_empty());

        let target = crate::pipeline::bootstrap::transform_pattern(&[0x00]);
        assert_eq!(first.last().copied(), Some(target[0]));
        // The stopping byte appears exactly once, at the end.
        assert_eq!(
            first.iter().filter(|&&b| b == target[0]).count(),
            1
        );
    }

    #[test]
    fn test_tight_cap_fails_the_call() {
        // A segment can never be shorter than the pattern, so a cap below
        // the pattern length always fails.
        let result = Generator::new(b"password", b"confusion", 1)
            .segment_cap(4)
            .generate();
        assert!(matches!(
            result,
            Err(SeedstreamError::SegmentCapExceeded(4))
        ));
    }

    #[test]
    fn test_generous_cap_matches_uncapped_stream() {
        let uncapped = generate(b"password", b"pq", 2).unwrap();
        let capped = Generator::new(b"password", b"pq", 2)
            .segment_cap(1 << 20)
            .generate()
            .unwrap();
        assert_eq!(uncapped, capped);
    }
}
