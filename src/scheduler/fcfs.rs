use std::fmt;

use super::Schedule;
use crate::core::{Error, LogObserver, Observer, Pid, ProcessRecord, Result, Ticks};

/// Non-preemptive first-come-first-served run queue.
///
/// Processes keep the order they were given in: position in the queue is
/// arrival order, and so also run order. Every calculation is a read over
/// that order and can be repeated freely.
///
/// ```
/// # use fcfs_model::FcfsQueue;
/// let queue = FcfsQueue::build(vec![1, 2, 3], vec![4, 3, 1])?;
/// let waiting = queue.compute_waiting_times();
/// assert_eq!(waiting, vec![0, 4, 7]);
/// assert_eq!(queue.compute_turnaround_times(Some(&waiting))?, vec![4, 7, 8]);
/// # Ok::<(), fcfs_model::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FcfsQueue<I = Pid> {
    processes: Vec<ProcessRecord<I>>,
}

impl<I> FcfsQueue<I> {
    /// Pairs `ids` and `burst_times` by position and reports the banner to a [`LogObserver`].
    pub fn build(ids: Vec<I>, burst_times: Vec<Ticks>) -> Result<Self> {
        Self::build_with(ids, burst_times, &mut LogObserver)
    }

    /// Same as [`build`](Self::build), with the banner going to `observer`.
    pub fn build_with<O: Observer>(
        ids: Vec<I>,
        burst_times: Vec<Ticks>,
        observer: &mut O,
    ) -> Result<Self> {
        Error::check_len(ids.len(), burst_times.len())?;

        let processes: Vec<_> = ids
            .into_iter()
            .zip(burst_times)
            .map(|(id, burst_time)| ProcessRecord::new(id, burst_time))
            .collect();

        observer.on_build(processes.len());
        Ok(Self { processes })
    }

    // A process waits for everything ahead of it to finish
    pub fn compute_waiting_times(&self) -> Vec<Ticks> {
        let mut waiting_times = Vec::with_capacity(self.processes.len());
        let mut cum: Ticks = 0;
        for process in &self.processes {
            waiting_times.push(cum);
            cum = cum.saturating_add(process.burst_time());
        }
        waiting_times
    }

    /// Waiting time plus burst time for every process.
    ///
    /// Pass previously computed waiting times to skip recomputing them; the
    /// slice is only read, so it can be reused afterwards. `None` computes
    /// them here.
    pub fn compute_turnaround_times(&self, waiting_times: Option<&[Ticks]>) -> Result<Vec<Ticks>> {
        let computed;
        let waiting_times = match waiting_times {
            Some(waiting_times) => {
                Error::check_len(self.processes.len(), waiting_times.len())?;
                waiting_times
            }
            None => {
                computed = self.compute_waiting_times();
                &computed[..]
            }
        };

        Ok((0..self.processes.len())
            .map(|i| waiting_times[i].saturating_add(self.processes[i].burst_time()))
            .collect())
    }

    pub fn schedule(&self) -> Schedule<'_, I> {
        let waiting_times = self.compute_waiting_times();
        Schedule::new(&self.processes, &waiting_times)
    }

    // Completion time of the last process
    pub fn total_burst_time(&self) -> Ticks {
        self.processes
            .iter()
            .fold(0, |sum: Ticks, p| sum.saturating_add(p.burst_time()))
    }

    pub fn processes(&self) -> &[ProcessRecord<I>] {
        &self.processes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProcessRecord<I>> {
        self.processes.iter()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl<I> fmt::Display for FcfsQueue<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "first-come-first-served-queue:{}", self.processes.len())
    }
}

impl<'a, I> IntoIterator for &'a FcfsQueue<I> {
    type Item = &'a ProcessRecord<I>;
    type IntoIter = std::slice::Iter<'a, ProcessRecord<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
