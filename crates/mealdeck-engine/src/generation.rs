/// Ticket identifying one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic request counter. Only the most recently issued generation is
/// current; responses carrying any other generation are stale.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new generation, superseding every earlier one
    pub fn next(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    /// Supersede all outstanding requests without issuing a new one
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }
}
