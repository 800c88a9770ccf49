use crate::error::{Result, SeedstreamError};
use crate::pipeline::bootstrap::SEED_LEN;
use crate::pipeline::source::ByteSource;

/// One iteration's output: the variable-length segment and the 64-byte
/// reseed value drawn after the pattern was consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDraw {
    pub segment: Vec<u8>,
    pub reseed: [u8; SEED_LEN],
}

/// Draw bytes until the target pattern is consumed, then draw the reseed.
///
/// Every drawn byte is appended to the segment. A byte consumes the
/// pattern's current front element only when it equals that element; a
/// non-matching byte is kept in the segment and is never tested against
/// any other pattern position. An empty pattern consumes nothing and
/// yields an empty segment.
///
/// The expected segment length is about 256 bytes per pattern element,
/// but there is no hard bound: `cap`, when set, fails the draw once the
/// segment reaches that many bytes with pattern still outstanding,
/// instead of looping forever on a defective source.
pub fn draw_segment<S: ByteSource>(
    source: &mut S,
    pattern: &[u8],
    cap: Option<usize>,
) -> Result<SegmentDraw> {
    let mut segment = Vec::new();
    let mut remaining = pattern;

    while let Some((&front, rest)) = remaining.split_first() {
        if let Some(cap) = cap {
            if segment.len() >= cap {
                return Err(SeedstreamError::SegmentCapExceeded(cap));
            }
        }

        let b = source.next_byte();
        segment.push(b);
        if b == front {
            remaining = rest;
        }
    }

    let mut reseed = [0u8; SEED_LEN];
    for slot in reseed.iter_mut() {
        *slot = source.next_byte();
    }

    Ok(SegmentDraw { segment, reseed })
}
