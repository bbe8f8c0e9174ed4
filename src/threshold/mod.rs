//! Recall-constrained threshold selection.
//!
//! Given confusion-matrix counts measured at several classifier thresholds,
//! pick the highest threshold whose recall still meets a floor. A higher
//! threshold usually trades recall for precision, so the highest qualifying
//! one is preferred.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Recall floor used when the caller has no specific requirement.
pub const DEFAULT_MIN_RECALL: f64 = 0.9;

/// Confusion-matrix counts observed at one threshold.
///
/// Serialized with the conventional `TP`/`TN`/`FP`/`FN` keys; missing
/// counts read as zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfusionRecord {
    pub threshold: f64,

    #[serde(rename = "TP", default)]
    pub true_positives: u64,

    #[serde(rename = "TN", default)]
    pub true_negatives: u64,

    #[serde(rename = "FP", default)]
    pub false_positives: u64,

    #[serde(rename = "FN", default)]
    pub false_negatives: u64,
}

impl ConfusionRecord {
    /// `TP / (TP + FN)`, or `None` when there were no positive cases.
    pub fn recall(&self) -> Option<f64> {
        // f64 so counts near u64::MAX cannot overflow
        let positives = self.true_positives as f64 + self.false_negatives as f64;
        if positives == 0.0 {
            return None;
        }
        Some(self.true_positives as f64 / positives)
    }
}

/// Highest threshold whose recall is at least `min_recall`.
///
/// Records without positive cases are skipped. Returns `None` when no record
/// qualifies.
///
/// ```rust
/// use fsmkit::threshold::{best_threshold, ConfusionRecord};
///
/// let records: Vec<ConfusionRecord> = serde_json::from_str(r#"[
///     {"threshold": 0.2, "TP": 95, "TN": 40, "FP": 60, "FN": 5},
///     {"threshold": 0.4, "TP": 85, "TN": 55, "FP": 45, "FN": 15}
/// ]"#)?;
///
/// assert_eq!(best_threshold(&records, 0.9), Some(0.2));
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn best_threshold(records: &[ConfusionRecord], min_recall: f64) -> Option<f64> {
    let best = records
        .iter()
        .filter(|record| match record.recall() {
            Some(recall) => {
                trace!(threshold = record.threshold, recall, "candidate");
                recall >= min_recall
            }
            None => {
                trace!(threshold = record.threshold, "skipped: no positive cases");
                false
            }
        })
        .map(|record| record.threshold)
        .max_by(f64::total_cmp);

    debug!(
        records = records.len(),
        min_recall,
        best = ?best,
        "threshold scan complete"
    );
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(threshold: f64, tp: u64, fn_: u64) -> ConfusionRecord {
        ConfusionRecord {
            threshold,
            true_positives: tp,
            true_negatives: 0,
            false_positives: 0,
            false_negatives: fn_,
        }
    }

    #[test]
    fn recall_is_undefined_without_positives() {
        assert_eq!(record(0.5, 0, 0).recall(), None);
        assert_eq!(record(0.5, 9, 1).recall(), Some(0.9));
    }

    #[test]
    fn picks_highest_qualifying_threshold() {
        let records = [
            record(0.1, 95, 5),
            record(0.3, 90, 10),
            record(0.2, 92, 8),
            record(0.4, 85, 15),
        ];

        assert_eq!(best_threshold(&records, DEFAULT_MIN_RECALL), Some(0.3));
    }

    #[test]
    fn none_when_nothing_qualifies() {
        let records = [record(0.5, 80, 20), record(0.6, 75, 25)];

        assert_eq!(best_threshold(&records, DEFAULT_MIN_RECALL), None);
        assert_eq!(best_threshold(&[], DEFAULT_MIN_RECALL), None);
    }

    #[test]
    fn records_without_positives_are_skipped() {
        let records = [record(0.9, 0, 0), record(0.1, 10, 0)];

        assert_eq!(best_threshold(&records, DEFAULT_MIN_RECALL), Some(0.1));
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let saturated = record(0.5, u64::MAX, 1);

        assert_eq!(saturated.recall(), Some(1.0));
        assert_eq!(best_threshold(&[saturated], DEFAULT_MIN_RECALL), Some(0.5));
        assert_eq!(record(0.5, 0, u64::MAX).recall(), Some(0.0));
    }

    #[test]
    fn missing_counts_deserialize_as_zero() {
        let parsed: ConfusionRecord =
            serde_json::from_str(r#"{"threshold": 0.7, "TP": 3}"#).unwrap();

        assert_eq!(parsed, record(0.7, 3, 0));
    }
}
