use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::factory::{BugReportFactory, RequestFactory, TicketFactory};
use crate::domain::ticket::TicketFamily;
use crate::infra::report::{TracingAssign, TracingResolve};
use crate::services::{AssignBehavior, ResolveBehavior};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub assign: Arc<dyn AssignBehavior>,
    pub resolve: Arc<dyn ResolveBehavior>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        assign: Arc<dyn AssignBehavior>,
        resolve: Arc<dyn ResolveBehavior>,
    ) -> Self {
        Self {
            config,
            assign,
            resolve,
        }
    }

    /// Context whose behaviours only report through `tracing`.
    pub fn with_tracing(config: AppConfig) -> Self {
        Self::new(config, Arc::new(TracingAssign), Arc::new(TracingResolve))
    }

    pub fn factory(&self, family: TicketFamily) -> Box<dyn TicketFactory> {
        match family {
            TicketFamily::BugReport => Box::new(BugReportFactory::new(
                self.assign.clone(),
                self.resolve.clone(),
            )),
            TicketFamily::Request => Box::new(RequestFactory::new(
                self.assign.clone(),
                self.resolve.clone(),
            )),
        }
    }
}
