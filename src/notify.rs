use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// User-facing notifications (the toast mechanism of the original host)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Sink for user-visible messages. The app keeps a bounded on-screen list;
/// tests record into a plain vector.
pub trait Notify {
    fn notify(&mut self, severity: Severity, message: String);
}

/// Bounded list of recent notifications, newest first, mirrored to the log.
pub struct Notifications {
    items: VecDeque<Notification>,
    cap: usize,
}

impl Default for Notifications {
    fn default() -> Self {
        Notifications {
            items: VecDeque::new(),
            cap: 5,
        }
    }
}

impl Notifications {
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Notify for Notifications {
    fn notify(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Info => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
        self.items.push_front(Notification { severity, message });
        self.items.truncate(self.cap);
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records every notification for assertions.
    #[derive(Default)]
    pub struct Recorder {
        pub items: Vec<Notification>,
    }

    impl Recorder {
        pub fn count(&self, severity: Severity) -> usize {
            self.items.iter().filter(|n| n.severity == severity).count()
        }
    }

    impl Notify for Recorder {
        fn notify(&mut self, severity: Severity, message: String) {
            self.items.push(Notification { severity, message });
        }
    }
}
