use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of minor goals a plan always carries.
pub const MINOR_GOAL_COUNT: usize = 3;

/// Separator used when flattening minor goals into the wire format.
pub const MINOR_GOAL_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Impact of the plan on long-term progress.
pub enum Importance {
    Low,
    Medium,
    High,
}

impl Importance {
    pub const ALL: [Importance; 3] = [Importance::Low, Importance::Medium, Importance::High];

    pub fn label(self) -> &'static str {
        match self {
            Importance::Low => "Low",
            Importance::Medium => "Medium",
            Importance::High => "High",
        }
    }

    /// Short explanation shown next to the choice.
    pub fn hint(self) -> &'static str {
        match self {
            Importance::Low => "Nice-to-have; minimal impact this week.",
            Importance::Medium => "Useful; solid progress if completed.",
            Importance::High => "Key milestone; strong impact on outcomes.",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Time pressure on the plan.
pub enum Urgency {
    #[serde(rename = "Not urgent")]
    NotUrgent,
    Soon,
    Urgent,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::NotUrgent, Urgency::Soon, Urgency::Urgent];

    pub fn label(self) -> &'static str {
        match self {
            Urgency::NotUrgent => "Not urgent",
            Urgency::Soon => "Soon",
            Urgency::Urgent => "Urgent",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Urgency::NotUrgent => "No deadline soon; schedule when ready.",
            Urgency::Soon => "Should be done in the near term.",
            Urgency::Urgent => "Deadline is close; prioritize today.",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// In-progress plan owned by the active wizard or edit form.
///
/// Field values persist verbatim across step transitions in both directions;
/// partial validity is the normal state while editing. The importance and
/// urgency slots are `None` when a persisted record carried a label outside
/// the enumerated set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDraft {
    pub task: String,
    pub main_goal: String,
    pub minor_goals: [String; MINOR_GOAL_COUNT],
    pub importance: Option<Importance>,
    pub urgency: Option<Urgency>,
}

impl Default for PlanDraft {
    fn default() -> Self {
        Self {
            task: String::new(),
            main_goal: String::new(),
            minor_goals: Default::default(),
            importance: Some(Importance::Medium),
            urgency: Some(Urgency::Soon),
        }
    }
}

impl PlanDraft {
    /// Flattens the minor goals into the single delimited wire string.
    pub fn joined_minor_goals(&self) -> String {
        self.minor_goals.join(MINOR_GOAL_SEPARATOR)
    }
}

/// Splits a flattened minor-goals string back into display segments.
///
/// Segments are trimmed; fewer than three well-formed segments are tolerated
/// and padded with empty strings.
pub fn split_minor_goals(raw: &str) -> [String; MINOR_GOAL_COUNT] {
    let mut goals: [String; MINOR_GOAL_COUNT] = Default::default();
    for (slot, segment) in goals.iter_mut().zip(raw.split(';')) {
        *slot = segment.trim().to_string();
    }
    goals
}
