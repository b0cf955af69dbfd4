//! Conditional choice groups
//!
//! Each scenario pairs a yes/no radio group with a dependent checkbox
//! group. The answer decides whether the dependent group is shown, and for
//! scenario 1 whether it must be non-empty.

use super::field::{Answer, FieldId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    One,
    Two,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::One, Scenario::Two];

    /// Radio field gating this scenario
    pub fn choice_field(&self) -> FieldId {
        match self {
            Self::One => FieldId::ConfirmChoice1,
            Self::Two => FieldId::ConfirmChoice2,
        }
    }

    /// Checkbox field shown when the answer is yes
    pub fn dependent_field(&self) -> FieldId {
        match self {
            Self::One => FieldId::Vehicle,
            Self::Two => FieldId::Destination,
        }
    }

    /// Scenario owning the given radio or checkbox field
    pub fn for_field(field: FieldId) -> Option<Scenario> {
        match field {
            FieldId::ConfirmChoice1 | FieldId::Vehicle => Some(Self::One),
            FieldId::ConfirmChoice2 | FieldId::Destination => Some(Self::Two),
            FieldId::Phone | FieldId::ConfirmPhone => None,
        }
    }

    /// Radio value for an answer (`Yes1`, `No2`, ...)
    pub fn option_value(&self, answer: Answer) -> &'static str {
        match (self, answer) {
            (Self::One, Answer::Yes) => "Yes1",
            (Self::One, Answer::No) => "No1",
            (Self::Two, Answer::Yes) => "Yes2",
            (Self::Two, Answer::No) => "No2",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::One => "---- Scenario-1 ----",
            Self::Two => "---- Scenario-2 ----",
        }
    }
}

/// Answer state of a scenario's radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupState {
    #[default]
    Unanswered,
    Yes,
    No,
}

impl From<Option<Answer>> for GroupState {
    fn from(answer: Option<Answer>) -> Self {
        match answer {
            None => Self::Unanswered,
            Some(Answer::Yes) => Self::Yes,
            Some(Answer::No) => Self::No,
        }
    }
}

/// Visibility change caused by a radio selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Revealed,
    Hidden,
    Unchanged,
}

/// Whether the dependent group is shown
pub fn dependent_visible(state: GroupState) -> bool {
    state == GroupState::Yes
}

/// Whether the dependent group must be non-empty
pub fn dependent_required(scenario: Scenario, state: GroupState) -> bool {
    scenario == Scenario::One && dependent_visible(state)
}

/// Visibility transition of the dependent group when the answer changes
pub fn transition(from: GroupState, to: GroupState) -> Transition {
    match (dependent_visible(from), dependent_visible(to)) {
        (false, true) => Transition::Revealed,
        (true, false) => Transition::Hidden,
        _ => Transition::Unchanged,
    }
}
