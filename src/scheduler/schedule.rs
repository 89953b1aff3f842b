use std::fmt;

use average::{Estimate, Mean};

use crate::core::{ProcessRecord, Ticks};

/// One row of a [`Schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry<'a, I> {
    pub id: &'a I,
    pub burst_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

/// Per-process timings of a queue, in run order.
#[derive(Debug, Clone)]
pub struct Schedule<'a, I> {
    entries: Vec<ScheduleEntry<'a, I>>,
}

impl<'a, I> Schedule<'a, I> {
    // Callers guarantee `waiting_times` lines up with `processes`
    pub(crate) fn new(processes: &'a [ProcessRecord<I>], waiting_times: &[Ticks]) -> Self {
        debug_assert_eq!(processes.len(), waiting_times.len());
        let entries = processes
            .iter()
            .zip(waiting_times)
            .map(|(process, &waiting_time)| ScheduleEntry {
                id: process.id(),
                burst_time: process.burst_time(),
                waiting_time,
                turnaround_time: waiting_time.saturating_add(process.burst_time()),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ScheduleEntry<'a, I>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry<'a, I>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean waiting time, or `None` when there is nothing scheduled.
    pub fn average_waiting_time(&self) -> Option<f64> {
        self.mean(|e| e.waiting_time)
    }

    /// Mean turnaround time, or `None` when there is nothing scheduled.
    pub fn average_turnaround_time(&self) -> Option<f64> {
        self.mean(|e| e.turnaround_time)
    }

    fn mean(&self, field: impl Fn(&ScheduleEntry<'a, I>) -> Ticks) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let mean: Mean = self.entries.iter().map(|e| field(e) as f64).collect();
        Some(mean.estimate())
    }
}

impl<I: fmt::Display> fmt::Display for Schedule<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>8} {:>8} {:>8} {:>10}", "pid", "burst", "waiting", "turnaround")?;
        for e in &self.entries {
            writeln!(
                f,
                "{:>8} {:>8} {:>8} {:>10}",
                e.id.to_string(),
                e.burst_time,
                e.waiting_time,
                e.turnaround_time
            )?;
        }
        Ok(())
    }
}
