use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, Waker};

#[derive(Debug, Default)]
struct Shared {
    resolved: bool,
    waker: Option<Waker>,
}

/// Completion future for one animation run.
///
/// Resolves to `()` exactly once, when every unit of its run has settled.
/// There is no error path. If the run is superseded before finishing, the
/// engine drops the resolver side and this future stays pending forever;
/// that abandonment is part of the engine's external contract.
#[derive(Debug)]
pub struct Completion {
    shared: Arc<Mutex<Shared>>,
}

impl Completion {
    /// Synchronous probe for pull-loop callers that never await.
    pub fn is_resolved(&self) -> bool {
        self.shared.lock().map(|s| s.resolved).unwrap_or(false)
    }
}

impl Future for Completion {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let Ok(mut shared) = self.shared.lock() else {
            return Poll::Pending;
        };
        if shared.resolved {
            Poll::Ready(())
        } else {
            shared.waker = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}

/// Engine-side handle. Consumed on resolution; dropped without resolving on
/// supersession, which leaves the paired [`Completion`] pending forever.
#[derive(Debug)]
pub(crate) struct Resolver {
    shared: Arc<Mutex<Shared>>,
}

impl Resolver {
    pub(crate) fn resolve(self) {
        let waker = match self.shared.lock() {
            Ok(mut shared) => {
                shared.resolved = true;
                shared.waker.take()
            }
            Err(_) => None,
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

pub(crate) fn channel() -> (Resolver, Completion) {
    let shared = Arc::new(Mutex::new(Shared::default()));
    (
        Resolver {
            shared: Arc::clone(&shared),
        },
        Completion { shared },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/completion.rs"]
mod tests;
