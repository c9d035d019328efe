//! Delivery seam

use std::sync::{Mutex, MutexGuard};

use crate::email::Email;
use crate::error::Result;

/// Hands a finished email to the host's delivery mechanism.
pub trait Transport: Send + Sync {
    fn send(&self, email: &Email) -> Result<()>;
}

/// Transport that keeps every email it is given, for tests and previews
#[derive(Debug, Default)]
pub struct FakeTransport {
    sent: Mutex<Vec<Email>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emails sent so far, oldest first
    pub fn sent(&self) -> Vec<Email> {
        self.records().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.records().len()
    }

    pub fn clear(&self) {
        self.records().clear();
    }

    // A panic in another test thread must not hide what was recorded
    fn records(&self) -> MutexGuard<'_, Vec<Email>> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Transport for FakeTransport {
    fn send(&self, email: &Email) -> Result<()> {
        self.records().push(email.clone());
        Ok(())
    }
}
