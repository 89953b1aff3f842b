use std::sync::{Arc, Mutex};

use fcfs_model::{Error, FcfsQueue};

#[test]
fn build_logs_banner_once() -> anyhow::Result<()> {
    let buffer = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&buffer);
    fern::Dispatch::new()
        .level(log::LevelFilter::Trace)
        .chain(fern::Output::call(move |record| {
            sink.lock().expect("Poisoned lock").push(format!(
                "{:7} {} {}",
                format!("[{}]", record.level()),
                record.target(),
                record.args()
            ));
        }))
        .apply()?;

    let queue = FcfsQueue::build(vec![1, 2, 3], vec![4, 3, 1])?;
    assert_eq!(queue.compute_waiting_times(), vec![0, 4, 7]);

    let err = FcfsQueue::build(vec![1, 2], vec![5]).unwrap_err();
    assert_eq!(err, Error::LengthMismatch { expected: 2, actual: 1 });

    let logs: Vec<String> = buffer.lock().expect("Poisoned lock").drain(..).collect();
    assert_eq!(
        logs,
        vec![String::from(
            "[INFO]  fcfs_model First Come First Served process control block (3 processes)"
        )]
    );
    Ok(())
}
