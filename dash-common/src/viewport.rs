/// Classifies viewport widths as narrow (mobile) or wide (desktop).
///
/// Remembers the last emitted classification so repeated resize events that
/// stay on the same side of the breakpoint produce nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportClassifier {
    breakpoint_px: f64,
    last: Option<bool>,
}

impl ViewportClassifier {
    pub fn new(breakpoint_px: f64) -> Self {
        Self {
            breakpoint_px,
            last: None,
        }
    }

    /// Classifier that already reports `current`, so a first observation on
    /// the same side of the breakpoint emits nothing.
    pub fn starting_at(breakpoint_px: f64, current: bool) -> Self {
        Self {
            breakpoint_px,
            last: Some(current),
        }
    }

    /// Narrow iff strictly below the breakpoint.
    pub fn classify(&self, width_px: f64) -> bool {
        width_px < self.breakpoint_px
    }

    /// Classify `width_px` and return the result only if it differs from the
    /// previous observation (or is the first one).
    pub fn observe(&mut self, width_px: f64) -> Option<bool> {
        let is_mobile = self.classify(width_px);
        if self.last == Some(is_mobile) {
            return None;
        }
        self.last = Some(is_mobile);
        Some(is_mobile)
    }

    pub fn last(&self) -> Option<bool> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_exclusive() {
        let classifier = ViewportClassifier::new(768.0);
        assert!(classifier.classify(767.0));
        assert!(!classifier.classify(768.0));
        assert!(!classifier.classify(1440.0));
    }

    #[test]
    fn test_first_observation_always_emits() {
        let mut classifier = ViewportClassifier::new(768.0);
        assert_eq!(classifier.last(), None);
        assert_eq!(classifier.observe(1024.0), Some(false));
        assert_eq!(classifier.last(), Some(false));
    }

    #[test]
    fn test_redundant_resizes_are_suppressed() {
        let mut classifier = ViewportClassifier::new(768.0);
        assert_eq!(classifier.observe(1024.0), Some(false));
        assert_eq!(classifier.observe(900.0), None);
        assert_eq!(classifier.observe(800.0), None);
        assert_eq!(classifier.observe(600.0), Some(true));
        assert_eq!(classifier.observe(320.0), None);
        assert_eq!(classifier.observe(1280.0), Some(false));
    }

    #[test]
    fn test_seeded_classifier_skips_matching_first_observation() {
        let mut classifier = ViewportClassifier::starting_at(768.0, false);
        assert_eq!(classifier.observe(1440.0), None);
        assert_eq!(classifier.observe(500.0), Some(true));

        let mut classifier = ViewportClassifier::starting_at(768.0, false);
        assert_eq!(classifier.observe(375.0), Some(true));
    }
}
