//! Preserved callbacks
//!
//! A handler that keeps one stable identity for its whole lifetime while always
//! running the most recently supplied closure.

use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use leptos::{
    callback::{Callable, Callback},
    prelude::*,
};

type Handler<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Holder for the latest handler, shared by every clone.
pub struct PreservedCallback<T> {
    latest: Arc<RwLock<Handler<T>>>,
}

impl<T> PreservedCallback<T> {
    /// Wrap `handler` as the initial latest handler.
    pub fn new(handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            latest: Arc::new(RwLock::new(Arc::new(handler))),
        }
    }

    /// Swap in a new handler; existing clones start forwarding to it immediately.
    pub fn replace(&self, handler: impl Fn(T) + Send + Sync + 'static) {
        let mut latest = self.latest.write().unwrap_or_else(PoisonError::into_inner);

        *latest = Arc::new(handler);
    }

    /// Run the latest handler with `value`.
    pub fn call(&self, value: T) {
        let handler = Arc::clone(&self.latest.read().unwrap_or_else(PoisonError::into_inner));

        handler(value);
    }
}

impl<T> Clone for PreservedCallback<T> {
    fn clone(&self) -> Self {
        Self {
            latest: Arc::clone(&self.latest),
        }
    }
}

impl<T> fmt::Debug for PreservedCallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreservedCallback").finish_non_exhaustive()
    }
}

/// Stable [`Callback`] forwarding to `preserved`.
///
/// The returned callback is created once; later [`PreservedCallback::replace`] calls change
/// what it runs without changing the callback itself.
pub fn forwarding_callback<T>(preserved: &PreservedCallback<T>) -> Callback<T>
where
    T: 'static,
{
    let preserved = preserved.clone();

    Callback::new(move |value: T| preserved.call(value))
}

/// Stable callback that always runs the handler currently held by `handler`.
///
/// An effect swaps the latest handler into the holder whenever `handler` changes; the
/// returned callback is created once and never changes.
pub fn use_preserved_callback<T>(handler: Signal<Callback<T>>) -> Callback<T>
where
    T: Send + Sync + 'static,
{
    let initial = handler.get_untracked();
    let preserved = PreservedCallback::new(move |value: T| initial.run(value));

    Effect::new({
        let preserved = preserved.clone();

        move |_| {
            let latest = handler.get();

            preserved.replace(move |value: T| latest.run(value));
        }
    });

    forwarding_callback(&preserved)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn call_runs_initial_handler() {
        let seen = Arc::new(AtomicUsize::new(0));
        let preserved = PreservedCallback::new({
            let seen = Arc::clone(&seen);
            move |value: usize| seen.store(value, Ordering::SeqCst)
        });

        preserved.call(7);

        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn clones_forward_to_replaced_handler() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let preserved = PreservedCallback::new({
            let first = Arc::clone(&first);
            move |value: usize| {
                first.fetch_add(value, Ordering::SeqCst);
            }
        });
        let handed_out = preserved.clone();

        preserved.replace({
            let second = Arc::clone(&second);
            move |value: usize| {
                second.fetch_add(value, Ordering::SeqCst);
            }
        });

        handed_out.call(3);

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn forwarding_callback_sees_latest_handler() {
        let seen = Arc::new(AtomicUsize::new(0));
        let preserved = PreservedCallback::new(|_: usize| {});
        let callback = forwarding_callback(&preserved);

        preserved.replace({
            let seen = Arc::clone(&seen);
            move |value: usize| seen.store(value, Ordering::SeqCst)
        });

        callback.run(42);

        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn forwarding_callback_keeps_running_after_repeated_replacements() {
        let seen = Arc::new(AtomicUsize::new(0));
        let preserved = PreservedCallback::new(|_: usize| {});
        let callback = forwarding_callback(&preserved);

        for offset in 1..=3 {
            preserved.replace({
                let seen = Arc::clone(&seen);
                move |value: usize| seen.store(value + offset, Ordering::SeqCst)
            });
        }

        callback.run(10);

        assert_eq!(seen.load(Ordering::SeqCst), 13);
    }
}
