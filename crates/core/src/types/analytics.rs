//! Spending analytics types.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One month of spending in the dashboard chart.
///
/// Analytics are recomputed from the user's seed on every request and are
/// never persisted; exactly twelve points cover the trailing year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingPoint {
    /// Short month name, e.g. `Jan`.
    pub month: String,
    pub amount: Money,
}
