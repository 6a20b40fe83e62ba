use crate::sample_pipeline::common::error::Result;
use crate::sample_pipeline::histogram::types::Histogram;

pub trait HistogramPlotter {
    fn plot(&mut self, histogram: &Histogram) -> Result<()>;
}
