//! Combinators over `tokio` channels.
//!
//! [`map_channel`] and [`filter_channel`] each spawn exactly one task that
//! drains the input receiver and forwards results through an output channel
//! of capacity 1, so the producer can run at most one element ahead of the
//! consumer. The task owns the only output sender; when the input closes the
//! task ends and the output closes with it, also for an input that never
//! yields an element. If the consumer drops the output receiver, the task
//! notices on its next send and stops.
//!
//! Both functions must be called from within a tokio runtime.

use futures::stream::{self, Stream};
use tokio::sync::mpsc::{self, Receiver};
use tracing::trace;

const OUTPUT_CAPACITY: usize = 1;

fn spawn_worker<T, R, F>(name: &'static str, mut input: Receiver<T>, mut step: F) -> Receiver<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnMut(T) -> Option<R> + Send + 'static,
{
    let (sender, output) = mpsc::channel(OUTPUT_CAPACITY);
    tokio::spawn(async move {
        trace!(worker = name, "channel worker started");
        let mut forwarded = 0_usize;
        while let Some(value) = input.recv().await {
            let Some(result) = step(value) else {
                continue;
            };
            if sender.send(result).await.is_err() {
                trace!(worker = name, forwarded, "channel consumer went away");
                return;
            }
            forwarded += 1;
        }
        trace!(worker = name, forwarded, "channel worker finished");
    });
    output
}

/// Transforms every value received on `input`.
///
/// ```rust
/// use fpkit::iters::map_channel;
/// use tokio::sync::mpsc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (sender, receiver) = mpsc::channel(3);
/// for n in 1..=3 {
///     sender.send(n).await.unwrap();
/// }
/// drop(sender);
///
/// let mut squares = map_channel(receiver, |n| n * n);
/// let mut received = Vec::new();
/// while let Some(square) = squares.recv().await {
///     received.push(square);
/// }
/// assert_eq!(received, vec![1, 4, 9]);
/// # }
/// ```
pub fn map_channel<T, R, F>(input: Receiver<T>, mut function: F) -> Receiver<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnMut(T) -> R + Send + 'static,
{
    spawn_worker("map_channel", input, move |value| Some(function(value)))
}

/// Forwards the values received on `input` for which `predicate` holds.
pub fn filter_channel<T, P>(input: Receiver<T>, mut predicate: P) -> Receiver<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    spawn_worker("filter_channel", input, move |value| {
        predicate(&value).then_some(value)
    })
}

/// Drains `input` until it closes, reducing every value from the left.
///
/// Runs on the calling task; nothing is spawned.
pub async fn fold_channel<T, A, F>(mut input: Receiver<T>, initial: A, mut function: F) -> A
where
    F: FnMut(A, T) -> A,
{
    let mut accumulator = initial;
    while let Some(value) = input.recv().await {
        accumulator = function(accumulator, value);
    }
    accumulator
}

/// Adapts a receiver into a [`Stream`] that ends when the channel closes.
pub fn into_stream<T>(receiver: Receiver<T>) -> impl Stream<Item = T> {
    stream::unfold(receiver, |mut receiver| async move {
        receiver.recv().await.map(|value| (value, receiver))
    })
}
