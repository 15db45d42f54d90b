//! Recording call target.

use castellan_types::{Address, CallError, CallTarget, Timestamp};

/// One call as seen by a [`RecordingTarget`].
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub caller: Address,
    pub now: Timestamp,
    pub data: Vec<u8>,
}

/// A call target that records every call it receives.
///
/// Answers with a configurable response, or rejects everything while a
/// failure reason is set — handy for driving the queue's rollback path.
pub struct RecordingTarget {
    address: Address,
    response: Vec<u8>,
    failure: Option<String>,
    calls: Vec<RecordedCall>,
}

impl RecordingTarget {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            response: Vec::new(),
            failure: None,
            calls: Vec::new(),
        }
    }

    pub fn with_response(mut self, response: Vec<u8>) -> Self {
        self.response = response;
        self
    }

    /// While set, every call is rejected with this reason (still recorded).
    pub fn set_failure(&mut self, reason: Option<String>) {
        self.failure = reason;
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }
}

impl CallTarget for RecordingTarget {
    fn address(&self) -> Address {
        self.address
    }

    fn call(
        &mut self,
        caller: Address,
        now: Timestamp,
        data: &[u8],
    ) -> Result<Vec<u8>, CallError> {
        self.calls.push(RecordedCall {
            caller,
            now,
            data: data.to_vec(),
        });
        match &self.failure {
            Some(reason) => Err(CallError::Rejected {
                target: self.address,
                reason: reason.clone(),
            }),
            None => Ok(self.response.clone()),
        }
    }
}
