//! In-flight request tracking
//!
//! Every fetch is tagged with a [`RequestToken`]. A response is applied only
//! if its token is still the one in flight; anything else is a stale answer to
//! a request that was superseded or invalidated and gets dropped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestToken(pub u64);

/// Busy flag plus generation counter for one kind of request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTracker {
    issued: u64,
    in_flight: Option<RequestToken>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }

    /// Start a request unless one is already in flight.
    pub fn try_begin(&mut self) -> Option<RequestToken> {
        if self.is_loading() {
            return None;
        }
        Some(self.begin())
    }

    /// Start a request, superseding whatever is in flight.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.in_flight = Some(token);
        token
    }

    /// Complete a request. Returns `false` for a stale token, leaving the
    /// current request untouched.
    pub fn finish(&mut self, token: RequestToken) -> bool {
        if self.in_flight == Some(token) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Forget the in-flight request so its response will be dropped.
    pub fn invalidate(&mut self) {
        self.in_flight = None;
    }
}
