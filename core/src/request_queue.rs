use crate::document::{DocId, Document, DocumentStatus};
use crate::error::Result;
use crate::server::SearchServer;
use std::collections::VecDeque;

/// Number of most recent requests remembered, one per minute of a day.
pub const REQUEST_WINDOW: usize = 1440;

#[derive(Debug, Clone, Copy)]
struct QueryResult {
    hits: usize,
}

/// Forwards searches to an engine and keeps statistics over a sliding window of requests.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryResult>,
    no_result_requests: usize,
    window: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        Self::with_window(server, REQUEST_WINDOW)
    }

    pub fn with_window(server: &'a SearchServer, window: usize) -> Self {
        let window = window.max(1);
        Self { server, requests: VecDeque::with_capacity(window), no_result_requests: 0, window }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let result = self.server.find_top_documents(raw_query)?;
        self.record(&result);
        Ok(result)
    }

    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let result = self.server.find_top_documents_by_status(raw_query, status)?;
        self.record(&result);
        Ok(result)
    }

    pub fn add_find_request_with<P>(
        &mut self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let result = self.server.find_top_documents_with(raw_query, predicate)?;
        self.record(&result);
        Ok(result)
    }

    /// Requests in the current window that found nothing.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    /// Requests currently held in the window.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn record(&mut self, result: &[Document]) {
        let entry = QueryResult { hits: result.len() };
        if entry.hits == 0 {
            self.no_result_requests += 1;
        }
        self.requests.push_back(entry);
        if self.requests.len() > self.window {
            if let Some(expired) = self.requests.pop_front() {
                if expired.hits == 0 {
                    self.no_result_requests -= 1;
                }
            }
        }
    }
}
