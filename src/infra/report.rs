use crate::services::{AssignBehavior, ResolveBehavior};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAssign;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingResolve;

impl AssignBehavior for TracingAssign {
    fn assign(&self, hours: u32) {
        tracing::info!(hours, "The ticket assign hours left is {hours}.");
    }
}

impl ResolveBehavior for TracingResolve {
    fn resolve(&self, hours: u32) {
        tracing::info!(hours, "The ticket resolve hours left is {hours}.");
    }
}
