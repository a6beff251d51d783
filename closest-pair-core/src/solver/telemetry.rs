#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

/// Observes pairwise distance evaluations made by an algorithm.
pub trait ComparisonObserver {
    /// Called once when the algorithm starts its scan.
    fn enter(&mut self) {}

    /// Called once per explicit pairwise distance evaluation.
    fn count(&mut self);

    /// Called once when the algorithm finishes its scan.
    fn exit(&mut self) {}
}

/// Counts pairwise distance evaluations. The counter is reset on every `enter`.
#[derive(Clone, Debug, Default)]
pub struct ComparisonCounter {
    comparisons: usize,
}

impl ComparisonCounter {
    /// Returns the amount of comparisons made since the last `enter`.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

impl ComparisonObserver for ComparisonCounter {
    fn enter(&mut self) {
        self.comparisons = 0;
    }

    fn count(&mut self) {
        self.comparisons += 1;
    }
}

/// An observer which ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ComparisonObserver for NoopObserver {
    fn count(&mut self) {}
}
