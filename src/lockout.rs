/// Counts malformed inputs across every menu of a session.
///
/// The count is never cleared by valid input; it only resets after a lockout.
#[derive(Debug)]
pub struct InvalidInputCounter {
    count: u32,
    threshold: u32,
}

impl InvalidInputCounter {
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold: threshold.max(1),
        }
    }

    /// Records one malformed input. Returns `true` once the threshold is reached.
    pub fn record(&mut self) -> bool {
        self.count += 1;
        self.count >= self.threshold
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::InvalidInputCounter;

    #[test]
    fn trips_on_third_record() {
        let mut counter = InvalidInputCounter::new(3);
        assert!(!counter.record());
        assert!(!counter.record());
        assert!(counter.record());
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn reset_starts_a_fresh_window() {
        let mut counter = InvalidInputCounter::new(3);
        for _ in 0..3 {
            counter.record();
        }
        counter.reset();
        assert_eq!(counter.count(), 0);
        assert!(!counter.record());
    }

    #[test]
    fn zero_threshold_behaves_as_one() {
        let mut counter = InvalidInputCounter::new(0);
        assert!(counter.record());
    }
}
