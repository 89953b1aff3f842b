use fcfs_model::{FcfsQueue, Pid, Ticks};
use rand::prelude::*;

struct WorkloadConfig {
    num_jobs: usize,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            num_jobs: 8,
            p_short: 0.3,
            short_ticks: 2,
            long_ticks: 6,
            seed: 0,
        }
    }
}

fn main() -> anyhow::Result<()> {
    fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .chain(std::io::stdout())
        .apply()?;

    let (pids, burst_times) = bernoulli_jobs(&WorkloadConfig::default());
    let queue = FcfsQueue::build(pids, burst_times)?;
    let schedule = queue.schedule();

    println!("{queue}");
    print!("{schedule}");
    println!(
        "Average waiting time: {:.2} ticks",
        schedule.average_waiting_time().unwrap_or_default()
    );
    println!(
        "Average turnaround time: {:.2} ticks",
        schedule.average_turnaround_time().unwrap_or_default()
    );
    println!("All jobs done at t={}", queue.total_burst_time());

    Ok(())
}

fn bernoulli_jobs(config: &WorkloadConfig) -> (Vec<Pid>, Vec<Ticks>) {
    let mut rng = StdRng::seed_from_u64(config.seed);

    (0..config.num_jobs)
        .map(|pid| {
            let burst_time = if rng.random::<f64>() < config.p_short {
                config.short_ticks
            } else {
                config.long_ticks
            };
            (pid as Pid, burst_time)
        })
        .unzip()
}
