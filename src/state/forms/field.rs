//! Form field identifiers, option sets and per-field metadata

use serde::Serialize;

/// Identifies one of the six form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Phone,
    ConfirmPhone,
    ConfirmChoice1,
    Vehicle,
    ConfirmChoice2,
    Destination,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 6] = [
        FieldId::Phone,
        FieldId::ConfirmPhone,
        FieldId::ConfirmChoice1,
        FieldId::Vehicle,
        FieldId::ConfirmChoice2,
        FieldId::Destination,
    ];

    /// Field name, also used to derive element ids
    pub fn name(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::ConfirmPhone => "confirmPhone",
            Self::ConfirmChoice1 => "confirmChoice1",
            Self::Vehicle => "vehicle",
            Self::ConfirmChoice2 => "confirmChoice2",
            Self::Destination => "destination",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "Phone Number",
            Self::ConfirmPhone => "Confirm Phone Number",
            Self::ConfirmChoice1 => "Select the Vehicle:",
            Self::Vehicle => "Select at least one vehicle",
            Self::ConfirmChoice2 => "Select the Destination:",
            Self::Destination => "Destination",
        }
    }

    /// Id of the alert region describing this field's error
    pub fn error_id(&self) -> String {
        format!("{}-error", self.name())
    }

    /// Whether the field is a masked text input
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Phone | Self::ConfirmPhone)
    }
}

/// A value in a fixed option set, rendered as a radio or checkbox
pub trait ChoiceOption: Copy + Ord + 'static {
    const ALL: &'static [Self];

    /// Submitted value
    fn value(&self) -> &'static str;

    /// Text shown next to the control
    fn label(&self) -> &'static str;
}

/// Yes/no answer of a scenario radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Answer {
    Yes,
    No,
}

impl ChoiceOption for Answer {
    const ALL: &'static [Self] = &[Answer::Yes, Answer::No];

    fn value(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    fn label(&self) -> &'static str {
        self.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Vehicle {
    Bike,
    Car,
    Plane,
    Boat,
}

impl ChoiceOption for Vehicle {
    const ALL: &'static [Self] = &[Vehicle::Bike, Vehicle::Car, Vehicle::Plane, Vehicle::Boat];

    fn value(&self) -> &'static str {
        match self {
            Self::Bike => "Bike",
            Self::Car => "Car",
            Self::Plane => "Plane",
            Self::Boat => "Boat",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Bike => "I have a bike",
            Self::Car => "I have a car",
            Self::Plane => "I have a plane",
            Self::Boat => "I have a boat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Destination {
    Bali,
    Switzerland,
    Italy,
    Paris,
}

impl ChoiceOption for Destination {
    const ALL: &'static [Self] = &[
        Destination::Bali,
        Destination::Switzerland,
        Destination::Italy,
        Destination::Paris,
    ];

    fn value(&self) -> &'static str {
        match self {
            Self::Bali => "Bali",
            Self::Switzerland => "Switzerland",
            Self::Italy => "Italy",
            Self::Paris => "Paris",
        }
    }

    fn label(&self) -> &'static str {
        self.value()
    }
}

/// Interaction flags tracked per field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldMeta {
    /// Value differs from its default
    pub dirty: bool,
    /// Field was edited or focus has left it
    pub touched: bool,
}

/// Accessibility attributes wired onto a field and its alert region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessibilityAttrs {
    pub invalid: bool,
    pub described_by: Option<String>,
}

impl AccessibilityAttrs {
    /// `aria-invalid` value
    pub fn aria_invalid(&self) -> &'static str {
        if self.invalid {
            "true"
        } else {
            "false"
        }
    }
}
