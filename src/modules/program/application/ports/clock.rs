use crate::modules::season::{reference_time, ReferenceDateTime};

/// Source of "now" in the reference timezone
pub trait Clock: Send + Sync {
    fn now(&self) -> ReferenceDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ReferenceDateTime {
        reference_time::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ReferenceDateTime);

impl Clock for FixedClock {
    fn now(&self) -> ReferenceDateTime {
        self.0
    }
}
