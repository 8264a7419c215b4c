//! Scripted in-process backend. Replies are served in order; once the script
//! runs out every further call reports the backend as unavailable.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{LlmBackend, LlmError, LlmRequest, LlmResponse};

#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// 200 with this candidate text.
    Text(String),
    /// Non-success HTTP status.
    Status(u16),
    /// Per-attempt timeout.
    Timeout,
}

pub struct ScriptedBackend {
    script: Mutex<VecDeque<ScriptedReply>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<LlmRequest>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            script: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of `complete` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request received, oldest first.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl LlmBackend for ScriptedBackend {
    async fn complete(&self, req: LlmRequest) -> Result<LlmResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).push(req);
        let next = self.script.lock().unwrap_or_else(|e| e.into_inner()).pop_front();
        match next {
            Some(ScriptedReply::Text(content)) => Ok(LlmResponse {
                content,
                model: self.model_id().to_string(),
                prompt_tokens: 0,
                completion_tokens: 0,
            }),
            Some(ScriptedReply::Status(status)) => Err(LlmError::from_status(status, "scripted")),
            Some(ScriptedReply::Timeout) => Err(LlmError::Timeout),
            None => Err(LlmError::Unavailable("script exhausted".to_string())),
        }
    }

    fn model_id(&self) -> &str {
        "scripted"
    }

    fn is_local(&self) -> bool {
        true
    }
}
