//! Deferred, coalesced refresh work.
use serde::{Deserialize, Serialize};

/// Priority of an idle callback relative to the compositor's own work.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IdlePriority {
    High,
    Default,
    #[default]
    Low,
}

/// Identifies one scheduled idle callback.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdleToken(pub u64);

/// The host's one-shot idle callbacks. When a scheduled callback fires, the host hands its
/// token back through [`crate::Coordinator::dispatch_idle`].
pub trait IdleScheduler {
    fn schedule_idle(&mut self, priority: IdlePriority) -> IdleToken;

    fn cancel_idle(&mut self, token: IdleToken);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshRequest {
    /// Also move all-workspace windows along and hand out activation.
    pub check_workspace: bool,
}

/// A single-slot debounced task queue.
///
/// At most one idle callback is outstanding. Requests made while it is pending only OR their
/// flags into it; `check_workspace` is never downgraded.
#[derive(Debug)]
pub struct RefreshQueue<S> {
    scheduler: S,
    priority: IdlePriority,
    pending: Option<(IdleToken, RefreshRequest)>,
}

impl<S: IdleScheduler> RefreshQueue<S> {
    pub fn new(scheduler: S, priority: IdlePriority) -> Self {
        Self {
            scheduler,
            priority,
            pending: None,
        }
    }

    pub fn request(&mut self, check_workspace: bool) {
        if let Some((_, request)) = &mut self.pending {
            request.check_workspace |= check_workspace;
            return;
        }
        let token = self.scheduler.schedule_idle(self.priority);
        tracing::trace!("Scheduled refresh {:?} (check_workspace: {check_workspace})", token);
        self.pending = Some((token, RefreshRequest { check_workspace }));
    }

    /// Claim the pending request if `token` belongs to it. Afterwards a new request schedules
    /// a fresh callback.
    pub fn take(&mut self, token: IdleToken) -> Option<RefreshRequest> {
        match self.pending {
            Some((pending, request)) if pending == token => {
                self.pending = None;
                Some(request)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        if let Some((token, _)) = self.pending.take() {
            tracing::trace!("Cancelled refresh {:?}", token);
            self.scheduler.cancel_idle(token);
        }
    }

    #[must_use]
    pub fn pending(&self) -> Option<RefreshRequest> {
        self.pending.map(|(_, request)| request)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
pub use self::mock::MockScheduler;
