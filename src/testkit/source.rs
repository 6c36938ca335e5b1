//! Scripted item source.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::item::ItemMap;
use crate::error::{ApiError, Result};
use crate::port::outbound::source::ItemSource;

/// One scripted response.
#[derive(Debug, Clone)]
pub enum Reply {
    Items(ItemMap),
    /// Fails with [`ApiError::Rejected`] carrying this message.
    Fail(String),
}

/// Plays back replies in order; the last reply repeats forever.
#[derive(Debug)]
pub struct ScriptedSource {
    replies: Mutex<VecDeque<Reply>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `replies` is empty.
    pub fn new(replies: Vec<Reply>) -> Self {
        assert!(!replies.is_empty(), "scripted source needs a reply");
        Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always succeeds with `items`.
    pub fn ok(items: ItemMap) -> Self {
        Self::new(vec![Reply::Items(items)])
    }

    /// Always fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self::new(vec![Reply::Fail(reason.to_string())])
    }

    /// Number of fetches so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_reply(&self) -> Reply {
        let mut replies = self.replies.lock();
        if replies.len() > 1 {
            replies.pop_front().unwrap_or(Reply::Fail("exhausted".into()))
        } else {
            replies
                .front()
                .cloned()
                .unwrap_or(Reply::Fail("exhausted".into()))
        }
    }
}

#[async_trait]
impl ItemSource for ScriptedSource {
    async fn fetch_items(&self) -> Result<ItemMap> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next_reply() {
            Reply::Items(items) => Ok(items),
            Reply::Fail(reason) => Err(ApiError::Rejected(reason).into()),
        }
    }

    fn source_name(&self) -> &str {
        "scripted"
    }
}
