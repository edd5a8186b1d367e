use super::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::task::Wake;

fn poll(completion: &mut Completion) -> Poll<()> {
    let mut cx = Context::from_waker(Waker::noop());
    Pin::new(completion).poll(&mut cx)
}

#[test]
fn pending_until_resolved_then_ready() {
    let (resolver, mut completion) = channel();
    assert!(matches!(poll(&mut completion), Poll::Pending));
    assert!(!completion.is_resolved());

    resolver.resolve();
    assert!(completion.is_resolved());
    assert!(matches!(poll(&mut completion), Poll::Ready(())));
}

#[test]
fn dropping_the_resolver_abandons_the_future() {
    let (resolver, mut completion) = channel();
    drop(resolver);
    // Never resolves, never errors: stays pending on every poll.
    for _ in 0..3 {
        assert!(matches!(poll(&mut completion), Poll::Pending));
    }
    assert!(!completion.is_resolved());
}

struct Flag(AtomicBool);

impl Wake for Flag {
    fn wake(self: Arc<Self>) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[test]
fn resolution_wakes_a_parked_waker() {
    let (resolver, mut completion) = channel();

    let flag = Arc::new(Flag(AtomicBool::new(false)));
    let waker = Waker::from(Arc::clone(&flag));
    let mut cx = Context::from_waker(&waker);
    assert!(matches!(Pin::new(&mut completion).poll(&mut cx), Poll::Pending));
    assert!(!flag.0.load(Ordering::SeqCst));

    resolver.resolve();
    assert!(flag.0.load(Ordering::SeqCst));
    assert!(matches!(Pin::new(&mut completion).poll(&mut cx), Poll::Ready(())));
}
