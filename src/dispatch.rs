//! Runs the generators away from the caller.
//!
//! Two shapes are provided. The callback shape takes a worker context to run
//! the generator on and a receiver context that the completion handler is
//! invoked on, exactly once, with the finished result. The future shape hands
//! the generator to a rayon pool through `tokio_rayon` and resolves to the
//! result wherever it is awaited.
//!
//! The generators themselves stay synchronous. Nothing here retries, cancels
//! or streams partial results.
//!
//! ```rust
//! use std::sync::mpsc;
//!
//! use combinatorics_rs::dispatch::combinations_on;
//!
//! let worker = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
//! let receiver = tokio::runtime::Builder::new_multi_thread()
//!     .worker_threads(1)
//!     .build()
//!     .unwrap();
//!
//! let (sender, results) = mpsc::channel();
//! combinations_on(vec![1, 2, 3], 2, &worker, receiver.handle().clone(), move |rows| {
//!     sender.send(rows).unwrap();
//! });
//!
//! assert!(results.recv().unwrap() == vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
//! ```

use std::sync::Arc;

use tokio_rayon::AsyncThreadPool;

use crate::{
    combinations::{all_combinations, combinations},
    permutations::permutations,
};

/// Something that can run a job at some later point, possibly on another
/// thread
pub trait ExecutionContext {
    /// Submits `job` without waiting for it to run
    fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static;
}

impl ExecutionContext for rayon::ThreadPool {
    fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.spawn(job);
    }
}

impl ExecutionContext for tokio::runtime::Handle {
    fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        // The task is detached, it always runs to completion
        drop(self.spawn(async move { job() }));
    }
}

impl<E: ExecutionContext + ?Sized> ExecutionContext for Arc<E> {
    fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        (**self).execute(job);
    }
}

impl<E: ExecutionContext + ?Sized> ExecutionContext for &E {
    fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        (**self).execute(job);
    }
}

/// Runs `work` on `worker` and hands its output to `completion` on `receiver`
fn relocate<O, W, R, F, C>(worker: &W, receiver: R, work: F, completion: C)
where
    O: Send + 'static,
    W: ExecutionContext + ?Sized,
    R: ExecutionContext + Send + 'static,
    F: FnOnce() -> O + Send + 'static,
    C: FnOnce(O) + Send + 'static,
{
    log::trace!("submitting work to the worker context");
    worker.execute(move || {
        let output = work();
        log::trace!("work finished, handing the result to the receiver context");
        receiver.execute(move || completion(output));
    });
}

/// Runs [`combinations`] on `worker` and calls `completion` with the rows on
/// `receiver`
pub fn combinations_on<T, W, R, C>(
    elements: Vec<T>,
    k: usize,
    worker: &W,
    receiver: R,
    completion: C,
) where
    T: Clone + Send + 'static,
    W: ExecutionContext + ?Sized,
    R: ExecutionContext + Send + 'static,
    C: FnOnce(Vec<Vec<T>>) + Send + 'static,
{
    relocate(worker, receiver, move || combinations(&elements, k), completion);
}

/// Runs [`all_combinations`] on `worker` and calls `completion` with the rows
/// on `receiver`
pub fn all_combinations_on<T, W, R, C>(elements: Vec<T>, worker: &W, receiver: R, completion: C)
where
    T: Clone + Send + 'static,
    W: ExecutionContext + ?Sized,
    R: ExecutionContext + Send + 'static,
    C: FnOnce(Vec<Vec<T>>) + Send + 'static,
{
    relocate(worker, receiver, move || all_combinations(&elements), completion);
}

/// Runs [`permutations`] on `worker` and calls `completion` with the rows on
/// `receiver`
pub fn permutations_on<T, W, R, C>(elements: Vec<T>, worker: &W, receiver: R, completion: C)
where
    T: Clone + Send + 'static,
    W: ExecutionContext + ?Sized,
    R: ExecutionContext + Send + 'static,
    C: FnOnce(Vec<Vec<T>>) + Send + 'static,
{
    relocate(worker, receiver, move || permutations(&elements), completion);
}

/// Generates the combinations on `pool` and resolves to them once finished
pub async fn combinations_async<T>(
    pool: &rayon::ThreadPool,
    elements: Vec<T>,
    k: usize,
) -> Vec<Vec<T>>
where
    T: Clone + Send + 'static,
{
    pool.spawn_async(move || combinations(&elements, k)).await
}

/// Generates the combinations of every size on `pool` and resolves to them
/// once finished
pub async fn all_combinations_async<T>(
    pool: &rayon::ThreadPool,
    elements: Vec<T>,
) -> Vec<Vec<T>>
where
    T: Clone + Send + 'static,
{
    pool.spawn_async(move || all_combinations(&elements)).await
}

/// Generates the permutations on `pool` and resolves to them once finished
pub async fn permutations_async<T>(pool: &rayon::ThreadPool, elements: Vec<T>) -> Vec<Vec<T>>
where
    T: Clone + Send + 'static,
{
    pool.spawn_async(move || permutations(&elements)).await
}
