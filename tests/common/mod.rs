#![allow(dead_code)]

use consulta_br::domain::ports::Notifier;
use std::sync::Mutex;

/// Collects every alert so tests can assert on call sites.
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.alerts().into_iter().map(|(_, message)| message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, title: &str, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}
