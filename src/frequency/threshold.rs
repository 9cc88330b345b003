//! Significance threshold policies

use super::FrequencyTable;
use crate::types::ThresholdPolicy;

impl ThresholdPolicy {
    /// Compute the significance threshold for `table`.
    ///
    /// Sums and maxima are taken over integer counts, so the result does not
    /// depend on hash iteration order. An empty table yields `0.0`.
    pub fn threshold(&self, table: &FrequencyTable) -> f64 {
        if table.is_empty() {
            return 0.0;
        }

        match *self {
            ThresholdPolicy::Mean => table.total() as f64 / table.distinct() as f64,
            ThresholdPolicy::MaxFraction { fraction } => table.max_count() as f64 * fraction,
        }
    }
}
