use std::fmt;

/// Identifier for one wizard screen. The order of [`PLAN_STEPS`] defines a
/// strict total order; `Review` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Task,
    MainGoal,
    MinorGoals,
    Importance,
    Urgency,
    Review,
}

impl StepId {
    /// Position of the step in the fixed wizard order.
    pub fn index(self) -> usize {
        match self {
            StepId::Task => 0,
            StepId::MainGoal => 1,
            StepId::MinorGoals => 2,
            StepId::Importance => 3,
            StepId::Urgency => 4,
            StepId::Review => 5,
        }
    }

    /// Step that follows this one, or `None` from the terminal step.
    pub fn next(self) -> Option<StepId> {
        match self {
            StepId::Task => Some(StepId::MainGoal),
            StepId::MainGoal => Some(StepId::MinorGoals),
            StepId::MinorGoals => Some(StepId::Importance),
            StepId::Importance => Some(StepId::Urgency),
            StepId::Urgency => Some(StepId::Review),
            StepId::Review => None,
        }
    }

    /// Step that precedes this one, or `None` from the first step.
    pub fn previous(self) -> Option<StepId> {
        match self {
            StepId::Task => None,
            StepId::MainGoal => Some(StepId::Task),
            StepId::MinorGoals => Some(StepId::MainGoal),
            StepId::Importance => Some(StepId::MinorGoals),
            StepId::Urgency => Some(StepId::Importance),
            StepId::Review => Some(StepId::Urgency),
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, StepId::Review)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepId::Task => "task",
            StepId::MainGoal => "main goal",
            StepId::MinorGoals => "minor goals",
            StepId::Importance => "importance",
            StepId::Urgency => "urgency",
            StepId::Review => "review",
        };
        f.write_str(label)
    }
}

/// Immutable metadata for a wizard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanStep {
    pub id: StepId,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// The six wizard screens in visiting order.
pub static PLAN_STEPS: [PlanStep; 6] = [
    PlanStep {
        id: StepId::Task,
        title: "What's the main task?",
        subtitle: "Name the thing you want to complete (keep it clear and specific).",
    },
    PlanStep {
        id: StepId::MainGoal,
        title: "What's the main goal under this task?",
        subtitle: "Define the outcome you're aiming for (what \"done\" looks like).",
    },
    PlanStep {
        id: StepId::MinorGoals,
        title: "Add 3 minor goals",
        subtitle: "Break the task into 3 concrete, actionable chunks.",
    },
    PlanStep {
        id: StepId::Importance,
        title: "How important is this?",
        subtitle: "Importance = impact on your long-term progress.",
    },
    PlanStep {
        id: StepId::Urgency,
        title: "How urgent is this?",
        subtitle: "Urgency = time pressure / deadlines.",
    },
    PlanStep {
        id: StepId::Review,
        title: "Review",
        subtitle: "Check your plan before you move on.",
    },
];

/// Looks up the registry entry for a step id.
pub fn step_for(id: StepId) -> &'static PlanStep {
    &PLAN_STEPS[id.index()]
}
