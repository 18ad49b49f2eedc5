
use crossbeam::queue::SegQueue;
use tracing::debug;
use crate::config::ReferenceDirectionsConfig;
use crate::error::{Error, Result};
use crate::factory::ReferenceDirectionsFactory;
use crate::reference_directions::ReferenceDirections;

/// Generates every requested set, one worker thread per CPU.
///
/// Each set is still enumerated on a single thread; only independent
/// requests run side by side. Results keep the order of `factories`, and
/// the first failing request (in that order) is returned as the error.
pub fn generate_batch(factories: &[Box<dyn ReferenceDirectionsFactory>],
                      config: &ReferenceDirectionsConfig) -> Result<Vec<ReferenceDirections>>
{
    config.validate()?;

    if factories.is_empty()
    {
        return Ok(vec![]);
    }

    let workers_count = num_cpus::get().clamp(1, factories.len());

    let jobs_queue = SegQueue::new();
    for index in 0..factories.len()
    {
        jobs_queue.push(index);
    }
    let jobs = &jobs_queue;

    debug!(jobs = factories.len(), workers_count, "batch started");

    let workers_output = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers_count)
            .map(|_| scope.spawn(move |_| {
                let mut output = vec![];

                while let Some(index) = jobs.pop()
                {
                    let factory = &factories[index];

                    debug!(name = factory.name(), "generating reference directions");

                    output.push((index, factory.generate(config)));
                }

                output
            }))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    }).map_err(|_| Error::WorkerPanicked)?;

    let mut results: Vec<Option<Result<ReferenceDirections>>> = (0..factories.len()).map(|_| None).collect();

    for output in workers_output
    {
        for (index, result) in output.map_err(|_| Error::WorkerPanicked)?
        {
            results[index] = Some(result);
        }
    }

    results
        .into_iter()
        .map(|result| result.unwrap_or_else(|| Err(Error::WorkerPanicked)))
        .collect()
}
