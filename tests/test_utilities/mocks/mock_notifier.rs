use infrabot_relay::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock Notifier for testing that captures every notice
#[derive(Default, Clone)]
pub struct MockNotifier {
    pub notices: Arc<Mutex<Vec<Notice>>>,
}

#[allow(dead_code)]
impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.get_notices().into_iter().map(|n| n.title).collect()
    }

    pub fn notice_count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
