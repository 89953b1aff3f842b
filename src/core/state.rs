pub type Ticks = u64;

// Default process identifier; any id type works with the queue
pub type Pid = u64;

/// One process as seen by the scheduler: who it is and how long it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord<I = Pid> {
    id: I,
    burst_time: Ticks,
}

impl<I> ProcessRecord<I> {
    pub fn new(id: I, burst_time: Ticks) -> Self {
        Self { id, burst_time }
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_stores_fields_verbatim() {
        let record = ProcessRecord::new("init", 7);
        assert_eq!(*record.id(), "init");
        assert_eq!(record.burst_time(), 7);
    }

    #[test]
    fn zero_burst_is_allowed() {
        let record: ProcessRecord = ProcessRecord::new(3, 0);
        assert_eq!(record.burst_time(), 0);
    }
}
