//! Recording fakes for the guard's collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use crate::guard::{AuthCheck, Navigator, SessionSink};
use crate::net::api::{ApiError, parse_is_logged_in};
use crate::net::types::IsLoggedInResponse;

#[derive(Clone, Debug)]
pub(crate) enum Reply {
    Body(&'static str),
    Status(u16),
}

/// Answers with `replies` in order, repeating the last one once exhausted.
pub(crate) struct FakeCheck {
    replies: Vec<Reply>,
    pub(crate) calls: Rc<RefCell<usize>>,
}

impl FakeCheck {
    pub(crate) fn new(reply: Reply) -> Self {
        Self::sequence(vec![reply])
    }

    pub(crate) fn sequence(replies: Vec<Reply>) -> Self {
        assert!(!replies.is_empty());
        Self { replies, calls: Rc::default() }
    }
}

impl AuthCheck for FakeCheck {
    async fn is_logged_in(&self) -> Result<IsLoggedInResponse, ApiError> {
        let call = {
            let mut calls = self.calls.borrow_mut();
            *calls += 1;
            *calls - 1
        };
        match self.replies[call.min(self.replies.len() - 1)].clone() {
            Reply::Body(body) => parse_is_logged_in(body),
            Reply::Status(code) => Err(ApiError::Status(code)),
        }
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingSink(Rc<RefCell<Vec<String>>>);

impl RecordingSink {
    pub(crate) fn writes(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl SessionSink for RecordingSink {
    fn set_username(&self, username: &str) {
        self.0.borrow_mut().push(username.to_owned());
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingNavigator(Rc<RefCell<Vec<String>>>);

impl RecordingNavigator {
    pub(crate) fn redirects(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, url: &str) {
        self.0.borrow_mut().push(url.to_owned());
    }
}
