//! Submitted form data

use crate::state::forms::{ChoiceOption, FormValues};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A validated snapshot of the form taken at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(flatten)]
    pub values: FormValues,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            submitted_at: Utc::now(),
        }
    }

    /// Confirmation text shown to the user
    pub fn summary(&self) -> String {
        format!(
            "The data entered is: {}, [{}], [{}]",
            self.values.phone,
            join_values(self.values.vehicle.iter()),
            join_values(self.values.destination.iter()),
        )
    }
}

fn join_values<'a, T: ChoiceOption>(options: impl Iterator<Item = &'a T>) -> String {
    options.map(|o| o.value()).collect::<Vec<_>>().join(",")
}
