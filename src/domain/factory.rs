use std::sync::Arc;

use crate::domain::ticket::{RequestType, Ticket, TicketFamily, TicketKind};
use crate::error::{AppError, AppResult};
use crate::services::{AssignBehavior, ResolveBehavior};

pub const ERROR_CODES: &str = "Error Codes";
pub const ERROR_LOGS: &str = "Error Logs";

/// Construction input for a [`TicketFactory`].
///
/// Each factory accepts one variant; handing it the other is rejected
/// before the family gets a chance to refine the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discriminator {
    Text(String),
    Request(RequestType),
}

impl Discriminator {
    fn describe(&self) -> String {
        match self {
            Discriminator::Text(text) => format!("{text:?}"),
            Discriminator::Request(request) => request.as_str().to_string(),
        }
    }
}

impl From<&str> for Discriminator {
    fn from(value: &str) -> Self {
        Discriminator::Text(value.to_string())
    }
}

impl From<String> for Discriminator {
    fn from(value: String) -> Self {
        Discriminator::Text(value)
    }
}

impl From<RequestType> for Discriminator {
    fn from(value: RequestType) -> Self {
        Discriminator::Request(value)
    }
}

impl TicketFamily {
    /// Picks the concrete kind within this family for `input`.
    pub fn refine(&self, input: &Discriminator) -> AppResult<TicketKind> {
        match (self, input) {
            (TicketFamily::BugReport, Discriminator::Text(text)) if text == ERROR_CODES => {
                Ok(TicketKind::ErrorCodesBugReport)
            }
            (TicketFamily::BugReport, Discriminator::Text(text)) if text == ERROR_LOGS => {
                Ok(TicketKind::ErrorLogsBugReport)
            }
            (TicketFamily::Request, Discriminator::Request(RequestType::Information)) => {
                Ok(TicketKind::InformationRequest)
            }
            (TicketFamily::Request, Discriminator::Request(RequestType::Change)) => {
                Ok(TicketKind::ChangeRequest)
            }
            (family, other) => Err(AppError::unrecognized(family.as_str(), other.describe())),
        }
    }
}

pub trait TicketFactory {
    fn family(&self) -> TicketFamily;

    fn make_ticket(&self, input: &Discriminator) -> AppResult<Ticket>;
}

#[derive(Debug, Clone)]
pub struct BugReportFactory {
    assign: Arc<dyn AssignBehavior>,
    resolve: Arc<dyn ResolveBehavior>,
}

impl BugReportFactory {
    pub fn new(assign: Arc<dyn AssignBehavior>, resolve: Arc<dyn ResolveBehavior>) -> Self {
        Self { assign, resolve }
    }
}

impl TicketFactory for BugReportFactory {
    fn family(&self) -> TicketFamily {
        TicketFamily::BugReport
    }

    fn make_ticket(&self, input: &Discriminator) -> AppResult<Ticket> {
        if !matches!(input, Discriminator::Text(_)) {
            return Err(AppError::unrecognized(
                self.family().as_str(),
                input.describe(),
            ));
        }
        let kind = self.family().refine(input)?;
        tracing::debug!(kind = kind.as_str(), "built bug report");
        Ok(Ticket::new(kind, self.assign.clone(), self.resolve.clone()))
    }
}

#[derive(Debug, Clone)]
pub struct RequestFactory {
    assign: Arc<dyn AssignBehavior>,
    resolve: Arc<dyn ResolveBehavior>,
}

impl RequestFactory {
    pub fn new(assign: Arc<dyn AssignBehavior>, resolve: Arc<dyn ResolveBehavior>) -> Self {
        Self { assign, resolve }
    }
}

impl TicketFactory for RequestFactory {
    fn family(&self) -> TicketFamily {
        TicketFamily::Request
    }

    fn make_ticket(&self, input: &Discriminator) -> AppResult<Ticket> {
        if !matches!(input, Discriminator::Request(_)) {
            return Err(AppError::unrecognized(
                self.family().as_str(),
                input.describe(),
            ));
        }
        let kind = self.family().refine(input)?;
        tracing::debug!(kind = kind.as_str(), "built request");
        Ok(Ticket::new(kind, self.assign.clone(), self.resolve.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::report::{TracingAssign, TracingResolve};

    fn bug_reports() -> BugReportFactory {
        BugReportFactory::new(Arc::new(TracingAssign), Arc::new(TracingResolve))
    }

    fn requests() -> RequestFactory {
        RequestFactory::new(Arc::new(TracingAssign), Arc::new(TracingResolve))
    }

    #[test]
    fn builds_bug_report_leaves() {
        let factory = bug_reports();
        let codes = factory.make_ticket(&"Error Codes".into()).unwrap();
        let logs = factory.make_ticket(&"Error Logs".into()).unwrap();

        assert_eq!(codes.kind(), TicketKind::ErrorCodesBugReport);
        assert_eq!(logs.kind(), TicketKind::ErrorLogsBugReport);
    }

    #[test]
    fn rejects_unknown_bug_report_text() {
        let factory = bug_reports();
        for input in ["error codes", "Error Trace", ""] {
            let err = factory.make_ticket(&input.into()).unwrap_err();
            assert!(matches!(
                err,
                AppError::UnrecognizedDiscriminator { family: "bug report", .. }
            ));
        }
    }

    #[test]
    fn bug_report_factory_rejects_request_type() {
        let err = bug_reports()
            .make_ticket(&RequestType::Change.into())
            .unwrap_err();
        assert!(matches!(err, AppError::UnrecognizedDiscriminator { .. }));
    }

    #[test]
    fn builds_request_leaves() {
        let factory = requests();
        let info = factory.make_ticket(&RequestType::Information.into()).unwrap();
        let change = factory.make_ticket(&RequestType::Change.into()).unwrap();

        assert_eq!(info.kind(), TicketKind::InformationRequest);
        assert_eq!(change.kind(), TicketKind::ChangeRequest);
        assert_eq!(change.family(), TicketFamily::Request);
    }

    #[test]
    fn request_factory_rejects_text() {
        let err = requests().make_ticket(&"Information".into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized request discriminator: \"Information\""
        );
    }

    #[test]
    fn refine_matches_only_its_own_family() {
        assert!(
            TicketFamily::Request
                .refine(&ERROR_CODES.into())
                .is_err()
        );
        assert_eq!(
            TicketFamily::BugReport.refine(&ERROR_LOGS.into()).unwrap(),
            TicketKind::ErrorLogsBugReport
        );
    }
}
