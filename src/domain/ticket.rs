use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use crate::services::{AssignBehavior, ResolveBehavior};

pub type TicketId = u32;
pub type ProjectId = u32;
pub type UserId = String;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestType {
    Information,
    Change,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Information => "Information",
            RequestType::Change => "Change",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "information" => Some(RequestType::Information),
            "change" => Some(RequestType::Change),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TicketFamily {
    BugReport,
    Request,
}

impl TicketFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketFamily::BugReport => "bug report",
            TicketFamily::Request => "request",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "bug-report" | "bug" => Some(TicketFamily::BugReport),
            "request" => Some(TicketFamily::Request),
            _ => None,
        }
    }
}

/// Concrete ticket variants. Each belongs to exactly one [`TicketFamily`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TicketKind {
    ErrorCodesBugReport,
    ErrorLogsBugReport,
    InformationRequest,
    ChangeRequest,
}

impl TicketKind {
    pub fn family(&self) -> TicketFamily {
        match self {
            TicketKind::ErrorCodesBugReport | TicketKind::ErrorLogsBugReport => {
                TicketFamily::BugReport
            }
            TicketKind::InformationRequest | TicketKind::ChangeRequest => TicketFamily::Request,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketKind::ErrorCodesBugReport => "ErrorCodesBugReport",
            TicketKind::ErrorLogsBugReport => "ErrorLogsBugReport",
            TicketKind::InformationRequest => "InformationRequest",
            TicketKind::ChangeRequest => "ChangeRequest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: usize,
    pub author: UserId,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    pub id: TicketId,
    pub completed: bool,
    pub name: String,
    pub hours: u32,
    pub priority: Priority,
    pub project_id: ProjectId,
    pub developers: BTreeSet<UserId>,
    pub owners: BTreeSet<UserId>,
    pub watchers: BTreeSet<UserId>,
    pub comments: Vec<Comment>,
    kind: TicketKind,
    assign_hours: u32,
    resolve_hours: u32,
    #[serde(skip)]
    assign_behavior: Arc<dyn AssignBehavior>,
    #[serde(skip)]
    resolve_behavior: Arc<dyn ResolveBehavior>,
}

impl Ticket {
    pub fn new(
        kind: TicketKind,
        assign_behavior: Arc<dyn AssignBehavior>,
        resolve_behavior: Arc<dyn ResolveBehavior>,
    ) -> Self {
        Self {
            id: 0,
            completed: false,
            name: String::new(),
            hours: 0,
            priority: Priority::default(),
            project_id: 0,
            developers: BTreeSet::new(),
            owners: BTreeSet::new(),
            watchers: BTreeSet::new(),
            comments: Vec::new(),
            kind,
            assign_hours: 0,
            resolve_hours: 0,
            assign_behavior,
            resolve_behavior,
        }
    }

    pub fn kind(&self) -> TicketKind {
        self.kind
    }

    pub fn family(&self) -> TicketFamily {
        self.kind.family()
    }

    pub fn with_id(mut self, id: TicketId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = project_id;
        self
    }

    /// Stores the remaining assign hours and hands the value to the assign behaviour.
    pub fn set_assign(&mut self, hours: u32) {
        self.assign_hours = hours;
        self.assign_behavior.assign(hours);
    }

    pub fn assign_hours(&self) -> u32 {
        self.assign_hours
    }

    /// Stores the remaining resolve hours and hands the value to the resolve behaviour.
    pub fn set_resolve(&mut self, hours: u32) {
        self.resolve_hours = hours;
        self.resolve_behavior.resolve(hours);
    }

    pub fn resolve_hours(&self) -> u32 {
        self.resolve_hours
    }

    pub fn add_developer(&mut self, user: impl Into<UserId>) -> bool {
        self.developers.insert(user.into())
    }

    pub fn add_owner(&mut self, user: impl Into<UserId>) -> bool {
        self.owners.insert(user.into())
    }

    pub fn add_watcher(&mut self, user: impl Into<UserId>) -> bool {
        self.watchers.insert(user.into())
    }

    /// Appends a comment and returns its id; ids start at 1.
    pub fn add_comment(&mut self, author: impl Into<UserId>, body: impl Into<String>) -> usize {
        let id = self.comments.len() + 1;
        self.comments.push(Comment {
            id,
            author: author.into(),
            body: body.into(),
        });
        id
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }
}
