/// Receives diagnostics emitted while a queue is built.
///
/// Observers only watch: nothing they do can change what the queue computes.
pub trait Observer {
    fn on_build(&mut self, process_count: usize);
}

/// Reports the construction banner through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_build(&mut self, process_count: usize) {
        log::info!(
            target: "fcfs_model",
            "First Come First Served process control block ({process_count} processes)"
        );
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_build(&mut self, _process_count: usize) {}
}

impl<F: FnMut(usize)> Observer for F {
    fn on_build(&mut self, process_count: usize) {
        self(process_count)
    }
}
