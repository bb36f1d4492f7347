use serde::Serialize;

use crate::context::AppContext;
use crate::domain::factory::{Discriminator, ERROR_CODES};
use crate::domain::modifier::{HourModifier, HourReport, HourSource, decorate};
use crate::domain::ticket::{Priority, RequestType, Ticket, TicketFamily, TicketId};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct TicketScenario {
    pub family: TicketFamily,
    pub discriminator: Discriminator,
    pub assign: u32,
    pub resolve: u32,
    pub modifiers: Vec<HourModifier>,
    pub budget: Option<u32>,
    pub name: Option<String>,
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketWorkflowOutcome {
    pub ticket: Ticket,
    pub modifiers: Vec<HourModifier>,
    pub report: HourReport,
}

impl TicketWorkflowOutcome {
    fn with_ticket_id(mut self, id: TicketId) -> Self {
        self.ticket = self.ticket.with_id(id);
        self
    }
}

pub fn build_and_recalculate(
    ctx: &AppContext,
    scenario: TicketScenario,
) -> AppResult<TicketWorkflowOutcome> {
    let factory = ctx.factory(scenario.family);
    let mut ticket = factory
        .make_ticket(&scenario.discriminator)?
        .with_priority(scenario.priority.unwrap_or(ctx.config.default_priority))
        .with_project(ctx.config.project_id);
    if let Some(name) = scenario.name {
        ticket = ticket.with_name(name);
    }
    if let Some(budget) = scenario.budget {
        ticket = ticket.with_hours(budget);
    }

    ticket.set_assign(scenario.assign);
    ticket.set_resolve(scenario.resolve);

    let report = decorate(&ticket, &scenario.modifiers).calculate_time()?;
    tracing::debug!(
        kind = ticket.kind().as_str(),
        layers = scenario.modifiers.len(),
        "recalculated ticket hours"
    );

    Ok(TicketWorkflowOutcome {
        ticket,
        modifiers: scenario.modifiers,
        report,
    })
}

/// The two tickets of the classic walkthrough: an "Error Codes" bug report
/// at 4/16 doubled then tripled, and an information request at 5/10 reissued
/// from the backlog.
pub fn reference_demo(ctx: &AppContext) -> AppResult<Vec<TicketWorkflowOutcome>> {
    let scenarios = [
        TicketScenario {
            family: TicketFamily::BugReport,
            discriminator: ERROR_CODES.into(),
            assign: 4,
            resolve: 16,
            modifiers: vec![HourModifier::TypeBugReport, HourModifier::WhiteGloveClient],
            budget: None,
            name: None,
            priority: None,
        },
        TicketScenario {
            family: TicketFamily::Request,
            discriminator: RequestType::Information.into(),
            assign: 5,
            resolve: 10,
            modifiers: vec![HourModifier::BacklogReissue],
            budget: None,
            name: None,
            priority: None,
        },
    ];

    scenarios
        .into_iter()
        .zip(1..)
        .map(|(scenario, id)| {
            build_and_recalculate(ctx, scenario).map(|outcome| outcome.with_ticket_id(id))
        })
        .collect()
}
