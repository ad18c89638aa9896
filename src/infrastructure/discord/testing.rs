//! Recording transport for tests

use std::cell::RefCell;

use crate::application::errors::BotError;
use crate::domain::traits::{ApiRequest, ApiResponse, Transport};

/// Records every request and answers with a canned response
pub struct RecordingTransport {
    response: Result<ApiResponse, String>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: Ok(ApiResponse::new(status, body)),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Fails every request as if the network was down
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            response: Err(reason.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// The only request sent; panics unless exactly one was made
    pub fn single(&self) -> ApiRequest {
        let requests = self.requests.borrow();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", *requests);
        requests[0].clone()
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, BotError> {
        self.requests.borrow_mut().push(request);
        self.response.clone().map_err(BotError::Network)
    }
}
