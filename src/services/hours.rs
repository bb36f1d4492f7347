use std::fmt;

/// Receives every assigned-hours value written through [`Ticket::set_assign`].
///
/// [`Ticket::set_assign`]: crate::domain::ticket::Ticket::set_assign
pub trait AssignBehavior: fmt::Debug + Send + Sync {
    fn assign(&self, hours: u32);
}

/// Receives every resolved-hours value written through [`Ticket::set_resolve`].
///
/// [`Ticket::set_resolve`]: crate::domain::ticket::Ticket::set_resolve
pub trait ResolveBehavior: fmt::Debug + Send + Sync {
    fn resolve(&self, hours: u32);
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Keeps every value it is handed, in order.
    #[derive(Debug, Default)]
    pub struct RecordingBehavior {
        assigned: Mutex<Vec<u32>>,
        resolved: Mutex<Vec<u32>>,
    }

    impl RecordingBehavior {
        pub fn assigned(&self) -> Vec<u32> {
            self.assigned.lock().unwrap().clone()
        }

        pub fn resolved(&self) -> Vec<u32> {
            self.resolved.lock().unwrap().clone()
        }
    }

    impl AssignBehavior for RecordingBehavior {
        fn assign(&self, hours: u32) {
            self.assigned.lock().unwrap().push(hours);
        }
    }

    impl ResolveBehavior for RecordingBehavior {
        fn resolve(&self, hours: u32) {
            self.resolved.lock().unwrap().push(hours);
        }
    }
}
