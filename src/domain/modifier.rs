use std::fmt;

use serde::Serialize;

use crate::domain::ticket::Ticket;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourReport {
    pub assign: u32,
    pub resolve: u32,
}

impl HourReport {
    pub fn new(assign: u32, resolve: u32) -> Self {
        Self { assign, resolve }
    }
}

impl fmt::Display for HourReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Assign left hour: {}, Resolve left hour: {}.",
            self.assign, self.resolve
        )
    }
}

/// A rule that derives new assign/resolve hours from the hours it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HourModifier {
    /// Doubles both values.
    TypeBugReport,
    /// Triples both values.
    WhiteGloveClient,
    /// Adds 100 to both values.
    BacklogReissue,
}

impl HourModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            HourModifier::TypeBugReport => "type-bug-report",
            HourModifier::WhiteGloveClient => "white-glove-client",
            HourModifier::BacklogReissue => "backlog-reissue",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "type-bug-report" | "typebugreport" => Some(HourModifier::TypeBugReport),
            "white-glove-client" | "whiteglove" | "whitegloveclient" => {
                Some(HourModifier::WhiteGloveClient)
            }
            "backlog-reissue" | "backlogreissue" => Some(HourModifier::BacklogReissue),
            _ => None,
        }
    }

    pub fn apply(&self, hours: HourReport) -> AppResult<HourReport> {
        let step = |value: u32| match self {
            HourModifier::TypeBugReport => value.checked_mul(2),
            HourModifier::WhiteGloveClient => value.checked_mul(3),
            HourModifier::BacklogReissue => value.checked_add(100),
        };
        match (step(hours.assign), step(hours.resolve)) {
            (Some(assign), Some(resolve)) => Ok(HourReport { assign, resolve }),
            _ => Err(AppError::HourOverflow { modifier: *self }),
        }
    }
}

impl fmt::Display for HourModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can report remaining assign/resolve hours.
pub trait HourSource {
    fn hours(&self) -> AppResult<HourReport>;

    fn calculate_time(&self) -> AppResult<HourReport> {
        let report = self.hours()?;
        tracing::info!(
            assign = report.assign,
            resolve = report.resolve,
            "{report}"
        );
        Ok(report)
    }

    fn wrap(self, modifier: HourModifier) -> Decorated<Self>
    where
        Self: Sized,
    {
        Decorated {
            inner: self,
            modifier,
        }
    }
}

impl HourSource for Ticket {
    fn hours(&self) -> AppResult<HourReport> {
        Ok(HourReport::new(self.assign_hours(), self.resolve_hours()))
    }
}

impl<S: HourSource + ?Sized> HourSource for &S {
    fn hours(&self) -> AppResult<HourReport> {
        (**self).hours()
    }
}

impl<S: HourSource + ?Sized> HourSource for Box<S> {
    fn hours(&self) -> AppResult<HourReport> {
        (**self).hours()
    }
}

/// Wraps a source and re-derives its hours without touching it.
#[derive(Debug, Clone)]
pub struct Decorated<S> {
    inner: S,
    modifier: HourModifier,
}

impl<S: HourSource> HourSource for Decorated<S> {
    fn hours(&self) -> AppResult<HourReport> {
        let inner = self.inner.hours()?;
        let derived = self.modifier.apply(inner)?;
        tracing::trace!(
            modifier = self.modifier.as_str(),
            from_assign = inner.assign,
            from_resolve = inner.resolve,
            assign = derived.assign,
            resolve = derived.resolve,
            "applied hour modifier"
        );
        Ok(derived)
    }
}

/// Wraps `source` in each modifier in turn; the last one ends up outermost.
pub fn decorate<'a>(
    source: impl HourSource + 'a,
    modifiers: &[HourModifier],
) -> Box<dyn HourSource + 'a> {
    let base: Box<dyn HourSource + 'a> = Box::new(source);
    modifiers.iter().fold(base, |current, modifier| {
        Box::new(current.wrap(*modifier)) as Box<dyn HourSource + 'a>
    })
}
