//! Completion signal shared between a run and whoever awaits it.
//!
//! `Completer` is the settling side held by the tween/delay; `Completion` is
//! the awaitable side handed to callers. Settlement happens at most once no
//! matter how many call sites race to settle (natural finish vs cancel).
//! Everything here is single-threaded.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState {
    Pending,
    Settled,
}

#[derive(Debug)]
struct Slot {
    state: CompletionState,
    wakers: Vec<Waker>,
}

/// Create a linked settle/await pair in the `Pending` state.
pub fn completion_pair() -> (Completer, Completion) {
    let slot = Rc::new(RefCell::new(Slot {
        state: CompletionState::Pending,
        wakers: Vec::new(),
    }));
    (
        Completer {
            slot: Rc::clone(&slot),
        },
        Completion { slot },
    )
}

#[derive(Debug)]
pub struct Completer {
    slot: Rc<RefCell<Slot>>,
}

impl Completer {
    /// Settle the signal. Returns `true` only for the call that moved it out
    /// of `Pending`.
    pub fn settle(&self) -> bool {
        let wakers = {
            let mut slot = self.slot.borrow_mut();
            if slot.state == CompletionState::Settled {
                return false;
            }
            slot.state = CompletionState::Settled;
            std::mem::take(&mut slot.wakers)
        };
        // Wake outside the borrow; a waker may poll synchronously.
        for w in wakers {
            w.wake();
        }
        true
    }

    pub fn is_settled(&self) -> bool {
        self.slot.borrow().state == CompletionState::Settled
    }
}

/// Awaitable completion of one run. Clones observe the same signal.
#[derive(Debug, Clone)]
pub struct Completion {
    slot: Rc<RefCell<Slot>>,
}

impl Completion {
    /// A signal that is already settled.
    pub fn resolved() -> Self {
        let (completer, completion) = completion_pair();
        completer.settle();
        completion
    }

    pub fn state(&self) -> CompletionState {
        self.slot.borrow().state
    }

    pub fn is_settled(&self) -> bool {
        self.state() == CompletionState::Settled
    }
}

impl Future for Completion {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut slot = self.slot.borrow_mut();
        match slot.state {
            CompletionState::Settled => Poll::Ready(()),
            CompletionState::Pending => {
                if !slot.wakers.iter().any(|w| w.will_wake(cx.waker())) {
                    slot.wakers.push(cx.waker().clone());
                }
                Poll::Pending
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[test]
    fn settle_is_idempotent() {
        let (completer, completion) = completion_pair();
        assert_eq!(completion.state(), CompletionState::Pending);
        assert!(completer.settle());
        assert!(!completer.settle());
        assert!(completion.is_settled());
        assert!(completer.is_settled());
    }

    #[test]
    fn pending_future_does_not_resolve() {
        let (_completer, completion) = completion_pair();
        assert_eq!(completion.now_or_never(), None);
    }

    #[test]
    fn resolved_is_ready_immediately() {
        assert_eq!(Completion::resolved().now_or_never(), Some(()));
    }

    #[test]
    fn clones_share_settlement() {
        let (completer, completion) = completion_pair();
        let other = completion.clone();
        completer.settle();
        assert!(other.is_settled());
        assert_eq!(completion.now_or_never(), Some(()));
    }

    #[test]
    fn dropped_completer_leaves_signal_pending() {
        let (completer, completion) = completion_pair();
        drop(completer);
        assert_eq!(completion.state(), CompletionState::Pending);
    }

    #[test]
    fn block_on_wakes_after_settle() {
        let (completer, completion) = completion_pair();
        let mut pool = futures::executor::LocalPool::new();
        let done = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&done);
        futures::task::LocalSpawnExt::spawn_local(&pool.spawner(), async move {
            completion.await;
            *flag.borrow_mut() = true;
        })
        .unwrap();
        pool.run_until_stalled();
        assert!(!*done.borrow());
        completer.settle();
        pool.run_until_stalled();
        assert!(*done.borrow());
    }
}
