use crate::error::PackError;
use crate::landmark::BodyPart;

/// What one successful pack call saw
#[derive(Debug, Clone, PartialEq)]
pub struct PackSummary {
    /// Landmark count per part in `BodyPart::ALL` order, `None` when absent
    pub landmark_counts: [Option<usize>; BodyPart::COUNT],
    pub normalized: bool,
}

impl PackSummary {
    pub fn present(&self) -> Vec<BodyPart> {
        BodyPart::ALL
            .into_iter()
            .filter(|p| self.landmark_counts[*p as usize].is_some())
            .collect()
    }
}

/// Diagnostics side channel of the packer
pub trait PackObserver: Send + Sync {
    fn on_packed(&self, summary: &PackSummary);
    fn on_rejected(&self, error: &PackError);
}

/// Emits `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PackObserver for TracingObserver {
    fn on_packed(&self, summary: &PackSummary) {
        let [face, left_hand, pose, right_hand] = summary.landmark_counts;
        tracing::debug!(
            face = ?face,
            left_hand = ?left_hand,
            pose = ?pose,
            right_hand = ?right_hand,
            normalized = summary.normalized,
            "packed landmark step"
        );
    }

    fn on_rejected(&self, error: &PackError) {
        tracing::warn!(%error, "landmark step rejected");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl PackObserver for NullObserver {
    fn on_packed(&self, _summary: &PackSummary) {}
    fn on_rejected(&self, _error: &PackError) {}
}
