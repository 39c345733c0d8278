//! Per-call context handed to every handler method.
//!
//! Cancellation is cooperative: the transport flips the shared flag when the
//! client cancels or the connection drops, and handlers observe it through
//! [`CallContext::is_cancelled`] or [`CallContext::cancelled`]. The dispatcher
//! never aborts a running handler.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use tokio::sync::watch;

use crate::syntax::SyntaxId;

static NEXT_CALL_ID: AtomicU32 = AtomicU32::new(1);

/// Cooperative cancellation signal shared between a transport and a call.
#[derive(Clone)]
pub struct CancellationHandle {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancellationHandle {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation has been requested.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // wait_for checks the current value first; an error means every
        // sender is gone, which can no longer un-cancel the call.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancellationHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CancellationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Context of one in-flight call.
#[derive(Debug, Clone)]
pub struct CallContext {
    /// Transport-assigned call identifier, used for log correlation.
    pub call_id: u32,
    /// Interface the call was addressed to, when known.
    pub syntax: Option<SyntaxId>,
    cancellation: CancellationHandle,
}

impl CallContext {
    /// Context with a process-unique call id and a fresh cancellation handle.
    pub fn new() -> Self {
        Self::with_cancellation(CancellationHandle::new())
    }

    pub fn with_cancellation(cancellation: CancellationHandle) -> Self {
        Self {
            call_id: NEXT_CALL_ID.fetch_add(1, Ordering::Relaxed),
            syntax: None,
            cancellation,
        }
    }

    pub fn with_call_id(mut self, call_id: u32) -> Self {
        self.call_id = call_id;
        self
    }

    pub fn with_syntax(mut self, syntax: SyntaxId) -> Self {
        self.syntax = Some(syntax);
        self
    }

    pub fn cancellation(&self) -> &CancellationHandle {
        &self.cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub async fn cancelled(&self) {
        self.cancellation.cancelled().await
    }
}

impl Default for CallContext {
    fn default() -> Self {
        Self::new()
    }
}
