//! In-memory transport used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;

/// Records every request and answers each one with the same canned response.
#[derive(Debug)]
pub struct MockTransport {
    response: HttpResponse,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new(response: HttpResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn json(code: u16, body: &Value) -> Self {
        Self::new(HttpResponse::new(code, HashMap::new(), body.to_string()))
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}
