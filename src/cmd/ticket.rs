use clap::Args;

use crate::config::OutputFormat;
use crate::context::AppContext;
use crate::domain::factory::Discriminator;
use crate::domain::modifier::HourModifier;
use crate::domain::ticket::{Priority, RequestType, TicketFamily};
use crate::error::{AppError, AppResult};
use crate::workflow::ticket::{TicketScenario, TicketWorkflowOutcome, build_and_recalculate};

#[derive(Args, Debug, Clone)]
pub struct TicketArgs {
    /// Ticket family: bug-report or request.
    #[arg(short, long, value_parser = parse_family)]
    pub family: TicketFamily,
    /// Leaf selector: "Error Codes" / "Error Logs" for bug reports,
    /// information / change for requests.
    #[arg(short, long)]
    pub kind: String,
    /// Baseline assign hours.
    #[arg(short, long, default_value_t = 0)]
    pub assign: u32,
    /// Baseline resolve hours.
    #[arg(short, long, default_value_t = 0)]
    pub resolve: u32,
    /// Hour modifier to wrap the ticket in; repeat to chain, innermost first.
    #[arg(short, long = "modifier", value_parser = parse_modifier)]
    pub modifiers: Vec<HourModifier>,
    /// Baseline hour budget recorded on the ticket.
    #[arg(short, long)]
    pub budget: Option<u32>,
    /// Ticket name.
    #[arg(long)]
    pub name: Option<String>,
    /// Priority (low/medium/high); falls back to the configured default.
    #[arg(short, long, value_parser = parse_priority)]
    pub priority: Option<Priority>,
    /// Print the outcome as JSON regardless of configuration.
    #[arg(long)]
    pub json: bool,
}

impl TicketArgs {
    pub fn into_scenario(self) -> AppResult<TicketScenario> {
        let discriminator = match self.family {
            TicketFamily::BugReport => Discriminator::Text(self.kind),
            TicketFamily::Request => RequestType::from_str(&self.kind)
                .map(Discriminator::Request)
                .ok_or_else(|| AppError::unrecognized(self.family.as_str(), self.kind))?,
        };

        Ok(TicketScenario {
            family: self.family,
            discriminator,
            assign: self.assign,
            resolve: self.resolve,
            modifiers: self.modifiers,
            budget: self.budget,
            name: self.name,
            priority: self.priority,
        })
    }
}

pub fn run(ctx: &AppContext, args: TicketArgs) -> AppResult<String> {
    let format = if args.json {
        OutputFormat::Json
    } else {
        ctx.config.output
    };
    let outcome = build_and_recalculate(ctx, args.into_scenario()?)?;
    render(std::slice::from_ref(&outcome), format)
}

pub fn render(outcomes: &[TicketWorkflowOutcome], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(outcomes)
            .map_err(|err| AppError::Output(format!("failed to encode report: {err}"))),
        OutputFormat::Text => Ok(outcomes
            .iter()
            .map(|outcome| {
                let chain = if outcome.modifiers.is_empty() {
                    "unmodified".to_string()
                } else {
                    outcome
                        .modifiers
                        .iter()
                        .map(HourModifier::as_str)
                        .collect::<Vec<_>>()
                        .join(" -> ")
                };
                format!(
                    "{} [{}]: {}",
                    outcome.ticket.kind().as_str(),
                    chain,
                    outcome.report
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn parse_family(value: &str) -> Result<TicketFamily, String> {
    TicketFamily::from_str(value).ok_or_else(|| format!("unknown ticket family '{value}'"))
}

fn parse_modifier(value: &str) -> Result<HourModifier, String> {
    HourModifier::from_str(value).ok_or_else(|| format!("unknown hour modifier '{value}'"))
}

fn parse_priority(value: &str) -> Result<Priority, String> {
    Priority::from_str(value).ok_or_else(|| format!("unknown priority '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn args(family: TicketFamily, kind: &str) -> TicketArgs {
        TicketArgs {
            family,
            kind: kind.to_string(),
            assign: 4,
            resolve: 16,
            modifiers: vec![HourModifier::TypeBugReport, HourModifier::WhiteGloveClient],
            budget: None,
            name: None,
            priority: None,
            json: false,
        }
    }

    #[test]
    fn request_kind_is_parsed_into_request_type() {
        let scenario = args(TicketFamily::Request, "Change")
            .into_scenario()
            .unwrap();
        assert_eq!(
            scenario.discriminator,
            Discriminator::Request(RequestType::Change)
        );
    }

    #[test]
    fn unknown_request_kind_is_rejected() {
        let err = args(TicketFamily::Request, "Escalation")
            .into_scenario()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized request discriminator: Escalation"
        );
    }

    #[test]
    fn renders_text_report() {
        let ctx = AppContext::with_tracing(AppConfig::default());
        let output = run(&ctx, args(TicketFamily::BugReport, "Error Codes")).unwrap();
        assert_eq!(
            output,
            "ErrorCodesBugReport [type-bug-report -> white-glove-client]: \
             Assign left hour: 24, Resolve left hour: 96."
        );
    }

    #[test]
    fn renders_json_report() {
        let ctx = AppContext::with_tracing(AppConfig::default());
        let mut ticket_args = args(TicketFamily::BugReport, "Error Logs");
        ticket_args.json = true;

        let output = run(&ctx, ticket_args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["report"]["assign"], 24);
        assert_eq!(value[0]["report"]["resolve"], 96);
        assert_eq!(value[0]["modifiers"][1], "white-glove-client");
        assert_eq!(value[0]["ticket"]["kind"], "ErrorLogsBugReport");
    }

    #[test]
    fn cli_value_parsers_accept_loose_spelling() {
        assert_eq!(parse_family("Bug Report"), Ok(TicketFamily::BugReport));
        assert_eq!(
            parse_modifier("BacklogReissue"),
            Ok(HourModifier::BacklogReissue)
        );
        assert!(parse_priority("asap").is_err());
    }
}
