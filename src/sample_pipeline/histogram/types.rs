//! Histogram types

use crate::sample_pipeline::common::error::{Result, SampleImageError};

/// Number of unit-width bins, covering samples `0..1024`.
pub const HISTOGRAM_BINS: usize = 1024;

/// What happens to samples at or above [`HISTOGRAM_BINS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// The top edge is inclusive, so a sample of exactly 1024 lands in the
    /// last bin. Anything larger is dropped and tallied in
    /// [`Histogram::overflow`].
    #[default]
    Discard,
    /// Samples at or above 1024 are folded into the last bin (bin 1023).
    Clamp,
    /// The first sample at or above 1024 fails the whole computation.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// One count per bin, `HISTOGRAM_BINS` entries
    pub counts: Vec<u64>,
    /// Bin boundaries `0..=1024`, one more than `counts`
    pub bin_edges: Vec<u32>,
    /// Samples that fell outside every bin
    pub overflow: u64,
}

impl Histogram {
    pub fn compute(samples: &[u16], policy: OverflowPolicy) -> Result<Self> {
        let mut counts = vec![0u64; HISTOGRAM_BINS];
        let mut overflow = 0;
        let last = HISTOGRAM_BINS - 1;

        for &sample in samples {
            let value = sample as usize;
            if value < HISTOGRAM_BINS {
                counts[value] += 1;
                continue;
            }

            match policy {
                OverflowPolicy::Discard if value == HISTOGRAM_BINS => counts[last] += 1,
                OverflowPolicy::Discard => overflow += 1,
                OverflowPolicy::Clamp => counts[last] += 1,
                OverflowPolicy::Error => {
                    return Err(SampleImageError::HistogramOverflow { value: sample });
                }
            }
        }

        Ok(Self {
            counts,
            bin_edges: (0..=HISTOGRAM_BINS as u32).collect(),
            overflow,
        })
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
