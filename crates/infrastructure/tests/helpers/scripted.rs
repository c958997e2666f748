//! Scripted test doubles for the HTTP executor seam.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::time::Instant;

use ktour_application::ports::TransportReply;
use ktour_domain::KtourError;
use ktour_infrastructure::HttpExecutor;

/// Executor double that replays a scripted sequence of replies.
///
/// Each call to `execute` consumes the next scripted entry and records the
/// instant the attempt started, so tests can assert both how many attempts a
/// transport made and how they were spaced in time.
pub struct ScriptedExecutor {
    replies: Mutex<VecDeque<Result<TransportReply, KtourError>>>,
    attempts: AtomicUsize,
    starts: Mutex<Vec<Instant>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            attempts: AtomicUsize::new(0),
            starts: Mutex::new(Vec::new()),
        }
    }

    pub fn push_ok(&self, status: u16, body: &str) {
        self.replies.lock().unwrap().push_back(Ok(TransportReply {
            status,
            body: Bytes::from(body.to_string()),
        }));
    }

    pub fn push_network_err(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(KtourError::Network(message.to_string())));
    }

    pub fn push_err(&self, error: KtourError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn attempt_starts(&self) -> Vec<Instant> {
        self.starts.lock().unwrap().clone()
    }
}

impl Default for ScriptedExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpExecutor for ScriptedExecutor {
    async fn execute(&self, _url: &str) -> Result<TransportReply, KtourError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.starts.lock().unwrap().push(Instant::now());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(KtourError::Network("script exhausted".to_string())))
    }
}

/// Minimal success envelope with one row per title.
pub fn list_body(titles: &[&str], total_count: u32) -> String {
    let items: Vec<String> = titles
        .iter()
        .enumerate()
        .map(|(index, title)| {
            format!(
                r#"{{"contentid":"{}","contenttypeid":"12","title":"{}"}}"#,
                1000 + index,
                title
            )
        })
        .collect();
    format!(
        r#"{{"response":{{"header":{{"resultCode":"0000","resultMsg":"OK"}},"body":{{"items":{{"item":[{}]}},"numOfRows":{},"pageNo":1,"totalCount":{}}}}}}}"#,
        items.join(","),
        titles.len(),
        total_count
    )
}

/// Envelope whose header carries an upstream application error.
pub fn error_body(code: &str, message: &str) -> String {
    format!(
        r#"{{"response":{{"header":{{"resultCode":"{}","resultMsg":"{}"}},"body":{{"items":"","numOfRows":0,"pageNo":1,"totalCount":0}}}}}}"#,
        code, message
    )
}
