//! Cancellable driver for the typing effect.
//!
//! The animation never finishes on its own, so it runs as an
//! [`Abortable`] future and the caller keeps a [`TypingHandle`] to stop it.
//! Rendering and sleeping are injected so the loop runs under any executor:
//! the browser binding passes a text setter and `gloo-timers`, tests pass a
//! recorder and an immediately-ready sleep.

#[cfg(test)]
#[path = "typing_task_test.rs"]
mod typing_task_test;

use std::future::Future;

use futures::future::{AbortHandle, Abortable, Aborted};

use crate::state::typing::TypingState;

/// Stops a running typing loop. Dropping the handle leaves the loop running.
#[derive(Clone, Debug)]
pub struct TypingHandle {
    abort: AbortHandle,
}

impl TypingHandle {
    pub fn stop(&self) {
        self.abort.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Tick `state` forever, rendering each frame and sleeping for its delay.
pub async fn run<R, S, F>(mut state: TypingState, mut render: R, mut sleep: S)
where
    R: FnMut(&str),
    S: FnMut(u32) -> F,
    F: Future<Output = ()>,
{
    loop {
        let frame = state.tick();
        render(&frame.text);
        sleep(frame.delay_ms).await;
    }
}

/// Wrap the loop so it can be stopped. Spawn the returned future on the
/// local executor and keep the handle.
pub fn cancellable<R, S, F>(
    state: TypingState,
    render: R,
    sleep: S,
) -> (TypingHandle, impl Future<Output = Result<(), Aborted>>)
where
    R: FnMut(&str),
    S: FnMut(u32) -> F,
    F: Future<Output = ()>,
{
    let (abort, registration) = AbortHandle::new_pair();
    (TypingHandle { abort }, Abortable::new(run(state, render, sleep), registration))
}
