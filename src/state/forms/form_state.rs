//! Form state container for the phone form

use super::conditional::{self, GroupState, Scenario, Transition};
use super::field::{
    AccessibilityAttrs, Answer, ChoiceOption, Destination, FieldId, FieldMeta, Vehicle,
};
use super::phone;
use super::validation::{self, FieldError};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Trait for focus navigation across a form's controls
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Values held by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub phone: String,
    pub confirm_phone: String,
    pub confirm_choice1: Option<Answer>,
    pub vehicle: BTreeSet<Vehicle>,
    pub confirm_choice2: Option<Answer>,
    pub destination: BTreeSet<Destination>,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            phone: String::new(),
            confirm_phone: String::new(),
            confirm_choice1: None,
            vehicle: BTreeSet::new(),
            confirm_choice2: None,
            destination: BTreeSet::from([Destination::Bali, Destination::Switzerland]),
        }
    }
}

impl FormValues {
    pub fn answer(&self, scenario: Scenario) -> Option<Answer> {
        match scenario {
            Scenario::One => self.confirm_choice1,
            Scenario::Two => self.confirm_choice2,
        }
    }

    pub fn group_state(&self, scenario: Scenario) -> GroupState {
        self.answer(scenario).into()
    }

    /// Whether a single field holds the same value in both records
    fn field_eq(&self, other: &Self, field: FieldId) -> bool {
        match field {
            FieldId::Phone => self.phone == other.phone,
            FieldId::ConfirmPhone => self.confirm_phone == other.confirm_phone,
            FieldId::ConfirmChoice1 => self.confirm_choice1 == other.confirm_choice1,
            FieldId::Vehicle => self.vehicle == other.vehicle,
            FieldId::ConfirmChoice2 => self.confirm_choice2 == other.confirm_choice2,
            FieldId::Destination => self.destination == other.destination,
        }
    }

    /// Human-readable value of a field
    pub fn display_value(&self, field: FieldId) -> String {
        fn join<T: ChoiceOption>(set: &BTreeSet<T>) -> String {
            set.iter().map(|o| o.value()).collect::<Vec<_>>().join(",")
        }

        match field {
            FieldId::Phone => self.phone.clone(),
            FieldId::ConfirmPhone => self.confirm_phone.clone(),
            FieldId::ConfirmChoice1 => self
                .confirm_choice1
                .map(|a| Scenario::One.option_value(a).to_string())
                .unwrap_or_default(),
            FieldId::Vehicle => format!("[{}]", join(&self.vehicle)),
            FieldId::ConfirmChoice2 => self
                .confirm_choice2
                .map(|a| Scenario::Two.option_value(a).to_string())
                .unwrap_or_default(),
            FieldId::Destination => format!("[{}]", join(&self.destination)),
        }
    }
}

/// Focusable control of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Submit,
}

/// Submission was blocked by validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .fields.len())]
pub struct InvalidForm {
    /// Invalid fields in display order
    pub fields: Vec<FieldId>,
}

/// State of the phone form: values, flags, errors and focus
#[derive(Debug, Clone)]
pub struct PhoneForm {
    values: FormValues,
    defaults: FormValues,
    meta: BTreeMap<FieldId, FieldMeta>,
    errors: BTreeMap<FieldId, FieldError>,
    active_field_index: usize,
    /// Highlighted option per radio/checkbox group
    option_cursor: BTreeMap<FieldId, usize>,
    submit_count: u32,
    clear_hidden_selections: bool,
}

impl Default for PhoneForm {
    fn default() -> Self {
        Self::new(false)
    }
}

impl PhoneForm {
    /// Create an empty form.
    ///
    /// With `clear_hidden_selections`, hiding a dependent group restores
    /// its default selections instead of keeping them.
    pub fn new(clear_hidden_selections: bool) -> Self {
        Self {
            values: FormValues::default(),
            defaults: FormValues::default(),
            meta: BTreeMap::new(),
            errors: BTreeMap::new(),
            active_field_index: 0,
            option_cursor: BTreeMap::new(),
            submit_count: 0,
            clear_hidden_selections,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn error(&self, field: FieldId) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn meta(&self, field: FieldId) -> FieldMeta {
        self.meta.get(&field).copied().unwrap_or_default()
    }

    pub fn accessibility(&self, field: FieldId) -> AccessibilityAttrs {
        let invalid = self.errors.contains_key(&field);
        AccessibilityAttrs {
            invalid,
            described_by: invalid.then(|| field.error_id()),
        }
    }

    pub fn is_visible(&self, field: FieldId) -> bool {
        match field {
            FieldId::Vehicle | FieldId::Destination => Scenario::for_field(field)
                .is_some_and(|s| conditional::dependent_visible(self.values.group_state(s))),
            _ => true,
        }
    }

    pub fn is_required(&self, field: FieldId) -> bool {
        match field {
            FieldId::Vehicle | FieldId::Destination => Scenario::for_field(field)
                .is_some_and(|s| conditional::dependent_required(s, self.values.group_state(s))),
            _ => true,
        }
    }

    /// Visible controls in tab order, ending with the submit button
    pub fn focus_order(&self) -> Vec<Focus> {
        FieldId::ALL
            .into_iter()
            .filter(|f| self.is_visible(*f))
            .map(Focus::Field)
            .chain(std::iter::once(Focus::Submit))
            .collect()
    }

    pub fn focus(&self) -> Focus {
        let order = self.focus_order();
        order[self.active_field_index.min(order.len() - 1)]
    }

    /// Move focus to a field if it is currently shown
    pub fn focus_field(&mut self, field: FieldId) {
        if let Some(index) = self
            .focus_order()
            .iter()
            .position(|f| *f == Focus::Field(field))
        {
            self.set_active_field(index);
        }
    }

    /// Highlighted option index of a radio or checkbox group
    pub fn option_cursor(&self, field: FieldId) -> usize {
        if let Some(cursor) = self.option_cursor.get(&field) {
            return *cursor;
        }
        // Radio groups start on the selected answer
        Scenario::for_field(field)
            .filter(|s| s.choice_field() == field)
            .and_then(|s| self.values.answer(s))
            .and_then(|a| Answer::ALL.iter().position(|o| *o == a))
            .unwrap_or(0)
    }

    fn option_count(field: FieldId) -> usize {
        match field {
            FieldId::ConfirmChoice1 | FieldId::ConfirmChoice2 => Answer::ALL.len(),
            FieldId::Vehicle => Vehicle::ALL.len(),
            FieldId::Destination => Destination::ALL.len(),
            FieldId::Phone | FieldId::ConfirmPhone => 0,
        }
    }

    /// Move the option highlight of the focused group, wrapping around
    pub fn move_option(&mut self, forward: bool) {
        let Focus::Field(field) = self.focus() else {
            return;
        };
        let count = Self::option_count(field);
        if count == 0 {
            return;
        }
        let current = self.option_cursor(field);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.option_cursor.insert(field, next);
    }

    /// Select or toggle the highlighted option of the focused group.
    ///
    /// Returns false when focus is not on a group.
    pub fn activate_option(&mut self) -> bool {
        let Focus::Field(field) = self.focus() else {
            return false;
        };
        let cursor = self.option_cursor(field);
        match field {
            FieldId::ConfirmChoice1 => self.select_answer(Scenario::One, Answer::ALL[cursor]),
            FieldId::ConfirmChoice2 => self.select_answer(Scenario::Two, Answer::ALL[cursor]),
            FieldId::Vehicle => self.toggle_vehicle(Vehicle::ALL[cursor]),
            FieldId::Destination => self.toggle_destination(Destination::ALL[cursor]),
            FieldId::Phone | FieldId::ConfirmPhone => return false,
        }
        true
    }

    /// Append typed text to the focused phone field
    pub fn input_str(&mut self, text: &str) {
        if let Focus::Field(field) = self.focus() {
            if field.is_text() {
                let raw = format!("{}{}", self.text_value(field), text);
                self.set_text(field, &raw);
            }
        }
    }

    pub fn input_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.input_str(c.encode_utf8(&mut buf));
    }

    /// Remove the last digit of the focused phone field
    pub fn backspace(&mut self) {
        if let Focus::Field(field) = self.focus() {
            if field.is_text() {
                let popped = phone::pop_digit(self.text_value(field));
                self.set_text(field, &popped);
            }
        }
    }

    fn text_value(&self, field: FieldId) -> &str {
        match field {
            FieldId::ConfirmPhone => &self.values.confirm_phone,
            _ => &self.values.phone,
        }
    }

    /// Set a phone field from raw input: mask, mark and re-validate
    pub fn set_text(&mut self, field: FieldId, raw: &str) {
        let formatted = phone::format_phone(raw);
        match field {
            FieldId::Phone => self.values.phone = formatted,
            FieldId::ConfirmPhone => self.values.confirm_phone = formatted,
            _ => return,
        }
        tracing::debug!("{} changed", field.name());
        self.mark_changed(field);
        self.validate_field(field);

        if field == FieldId::Phone && self.meta(FieldId::ConfirmPhone).dirty {
            self.validate_field(FieldId::ConfirmPhone);
        }
    }

    /// Answer a scenario's radio group and apply the visibility change
    pub fn select_answer(&mut self, scenario: Scenario, answer: Answer) {
        let from = self.values.group_state(scenario);
        match scenario {
            Scenario::One => self.values.confirm_choice1 = Some(answer),
            Scenario::Two => self.values.confirm_choice2 = Some(answer),
        }
        let choice = scenario.choice_field();
        self.option_cursor.remove(&choice);
        self.mark_changed(choice);
        self.validate_field(choice);

        let dependent = scenario.dependent_field();
        match conditional::transition(from, Some(answer).into()) {
            Transition::Hidden => {
                tracing::debug!("{} hidden", dependent.name());
                self.errors.remove(&dependent);
                if self.clear_hidden_selections {
                    self.restore_default(dependent);
                }
            }
            Transition::Revealed => tracing::debug!("{} revealed", dependent.name()),
            Transition::Unchanged => {}
        }
    }

    pub fn toggle_vehicle(&mut self, vehicle: Vehicle) {
        toggle(&mut self.values.vehicle, vehicle);
        self.mark_changed(FieldId::Vehicle);
        self.validate_field(FieldId::Vehicle);
    }

    pub fn toggle_destination(&mut self, destination: Destination) {
        toggle(&mut self.values.destination, destination);
        self.mark_changed(FieldId::Destination);
        self.validate_field(FieldId::Destination);
    }

    fn restore_default(&mut self, field: FieldId) {
        match field {
            FieldId::Vehicle => self.values.vehicle = self.defaults.vehicle.clone(),
            FieldId::Destination => self.values.destination = self.defaults.destination.clone(),
            _ => return,
        }
        self.meta.remove(&field);
        self.option_cursor.remove(&field);
    }

    fn mark_changed(&mut self, field: FieldId) {
        let dirty = !self.values.field_eq(&self.defaults, field);
        let meta = self.meta.entry(field).or_default();
        meta.dirty = dirty;
        meta.touched = true;
    }

    fn check(&self, field: FieldId) -> Result<(), FieldError> {
        match field {
            FieldId::Phone => validation::validate_phone(&self.values.phone),
            FieldId::ConfirmPhone => {
                validation::validate_confirm_phone(&self.values.confirm_phone, &self.values.phone)
            }
            FieldId::ConfirmChoice1 => validation::validate_choice(self.values.confirm_choice1),
            FieldId::ConfirmChoice2 => validation::validate_choice(self.values.confirm_choice2),
            FieldId::Vehicle => {
                validation::validate_vehicle(&self.values.vehicle, self.is_required(field))
            }
            FieldId::Destination => Ok(()),
        }
    }

    /// Re-run one field's validators. Hidden fields never hold errors.
    pub fn validate_field(&mut self, field: FieldId) {
        let result = if self.is_visible(field) {
            self.check(field)
        } else {
            Ok(())
        };
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
    }

    /// Validate every field, returning true when the form is valid
    pub fn validate_all(&mut self) -> bool {
        for field in FieldId::ALL {
            self.validate_field(field);
        }
        self.errors.is_empty()
    }

    /// Attempt to submit.
    ///
    /// On success returns every held value, hidden groups included. On
    /// failure focus moves to the first invalid field.
    pub fn submit(&mut self) -> Result<FormValues, InvalidForm> {
        self.submit_count += 1;
        if self.validate_all() {
            return Ok(self.values.clone());
        }

        let fields: Vec<FieldId> = self.errors.keys().copied().collect();
        if let Some(first) = fields.first() {
            self.focus_field(*first);
        }
        Err(InvalidForm { fields })
    }

    /// Restore defaults and clear flags, errors, focus and submit count
    pub fn reset(&mut self) {
        *self = Self::new(self.clear_hidden_selections);
    }
}

impl Form for PhoneForm {
    fn field_count(&self) -> usize {
        self.focus_order().len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index.min(self.field_count() - 1)
    }
    fn set_active_field(&mut self, index: usize) {
        // Leaving a field marks it touched
        if let Focus::Field(field) = self.focus() {
            self.meta.entry(field).or_default().touched = true;
        }
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, item: T) {
    if !set.remove(&item) {
        set.insert(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_into(form: &mut PhoneForm, field: FieldId, text: &str) {
        form.focus_field(field);
        for c in text.chars() {
            form.input_char(c);
        }
    }

    fn fill_valid_phones(form: &mut PhoneForm) {
        type_into(form, FieldId::Phone, "2345678901");
        type_into(form, FieldId::ConfirmPhone, "2345678901");
    }

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_values() {
            let values = FormValues::default();
            assert_eq!(values.phone, "");
            assert_eq!(values.confirm_choice1, None);
            assert!(values.vehicle.is_empty());
            assert_eq!(
                values.destination,
                BTreeSet::from([Destination::Bali, Destination::Switzerland])
            );
        }

        #[test]
        fn test_new_form_has_no_errors_or_flags() {
            let form = PhoneForm::default();
            assert!(!form.has_errors());
            assert_eq!(form.meta(FieldId::Phone), FieldMeta::default());
            assert_eq!(form.submit_count(), 0);
            assert_eq!(form.focus(), Focus::Field(FieldId::Phone));
        }

        #[test]
        fn test_dependent_groups_hidden_initially() {
            let form = PhoneForm::default();
            assert!(!form.is_visible(FieldId::Vehicle));
            assert!(!form.is_visible(FieldId::Destination));
            assert_eq!(
                form.focus_order(),
                vec![
                    Focus::Field(FieldId::Phone),
                    Focus::Field(FieldId::ConfirmPhone),
                    Focus::Field(FieldId::ConfirmChoice1),
                    Focus::Field(FieldId::ConfirmChoice2),
                    Focus::Submit,
                ]
            );
        }
    }

    mod text_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_masks_progressively() {
            let mut form = PhoneForm::default();
            form.input_char('2');
            assert_eq!(form.values().phone, "(2");
            for c in "34".chars() {
                form.input_char(c);
            }
            assert_eq!(form.values().phone, "(234)-");
        }

        #[test]
        fn test_typing_validates_on_change() {
            let mut form = PhoneForm::default();
            form.input_char('2');
            assert_eq!(form.error(FieldId::Phone), Some(&FieldError::InvalidFormat));
            for c in "345678901".chars() {
                form.input_char(c);
            }
            assert_eq!(form.error(FieldId::Phone), None);
        }

        #[test]
        fn test_letters_are_ignored() {
            let mut form = PhoneForm::default();
            form.input_char('a');
            assert_eq!(form.values().phone, "");
            assert_eq!(form.error(FieldId::Phone), Some(&FieldError::PhoneRequired));
        }

        #[test]
        fn test_backspace_crosses_separator() {
            let mut form = PhoneForm::default();
            type_into(&mut form, FieldId::Phone, "234");
            assert_eq!(form.values().phone, "(234)-");
            form.backspace();
            assert_eq!(form.values().phone, "(23");
        }

        #[test]
        fn test_paste_is_formatted() {
            let mut form = PhoneForm::default();
            form.input_str("234 567 8901 ext 5");
            assert_eq!(form.values().phone, "(234)-567-8901");
        }

        #[test]
        fn test_input_ignored_on_non_text_focus() {
            let mut form = PhoneForm::default();
            form.focus_field(FieldId::ConfirmChoice1);
            form.input_char('5');
            form.backspace();
            assert_eq!(form.values(), &FormValues::default());
        }

        #[test]
        fn test_edit_marks_dirty_and_touched() {
            let mut form = PhoneForm::default();
            form.input_char('2');
            assert_eq!(
                form.meta(FieldId::Phone),
                FieldMeta {
                    dirty: true,
                    touched: true
                }
            );
            form.backspace();
            assert_eq!(
                form.meta(FieldId::Phone),
                FieldMeta {
                    dirty: false,
                    touched: true
                }
            );
        }

        #[test]
        fn test_leaving_field_marks_touched() {
            let mut form = PhoneForm::default();
            form.next_field();
            assert!(form.meta(FieldId::Phone).touched);
            assert!(!form.meta(FieldId::Phone).dirty);
        }
    }

    mod confirm_phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_matching_numbers_have_no_errors() {
            let mut form = PhoneForm::default();
            fill_valid_phones(&mut form);
            assert_eq!(form.error(FieldId::Phone), None);
            assert_eq!(form.error(FieldId::ConfirmPhone), None);
        }

        #[test]
        fn test_mismatch_reported() {
            let mut form = PhoneForm::default();
            type_into(&mut form, FieldId::Phone, "2345678901");
            type_into(&mut form, FieldId::ConfirmPhone, "2345678902");
            assert_eq!(
                form.error(FieldId::ConfirmPhone),
                Some(&FieldError::Mismatch)
            );
        }

        #[test]
        fn test_editing_phone_revalidates_dirty_confirm() {
            let mut form = PhoneForm::default();
            fill_valid_phones(&mut form);
            form.focus_field(FieldId::Phone);
            form.backspace();
            form.input_char('2');
            assert_eq!(
                form.error(FieldId::ConfirmPhone),
                Some(&FieldError::Mismatch)
            );
            form.backspace();
            form.input_char('1');
            assert_eq!(form.error(FieldId::ConfirmPhone), None);
        }

        #[test]
        fn test_editing_phone_leaves_pristine_confirm_alone() {
            let mut form = PhoneForm::default();
            type_into(&mut form, FieldId::Phone, "2345678901");
            assert_eq!(form.error(FieldId::ConfirmPhone), None);
        }

        #[test]
        fn test_leading_one_rejected() {
            let mut form = PhoneForm::default();
            type_into(&mut form, FieldId::Phone, "1345678901");
            assert_eq!(
                form.error(FieldId::Phone),
                Some(&FieldError::InvalidStartDigit)
            );
        }
    }

    mod conditional_groups {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_yes_reveals_vehicle_group() {
            let mut form = PhoneForm::default();
            form.select_answer(Scenario::One, Answer::Yes);
            assert!(form.is_visible(FieldId::Vehicle));
            assert!(form.is_required(FieldId::Vehicle));
            assert!(form
                .focus_order()
                .contains(&Focus::Field(FieldId::Vehicle)));
        }

        #[test]
        fn test_no_keeps_vehicle_hidden() {
            let mut form = PhoneForm::default();
            form.select_answer(Scenario::One, Answer::No);
            assert!(!form.is_visible(FieldId::Vehicle));
            assert!(!form.is_required(FieldId::Vehicle));
        }

        #[test]
        fn test_destination_never_required() {
            let mut form = PhoneForm::default();
            form.select_answer(Scenario::Two, Answer::Yes);
            assert!(form.is_visible(FieldId::Destination));
            assert!(!form.is_required(FieldId::Destination));
        }

        #[test]
        fn test_unchecking_last_vehicle_reports_error() {
            let mut form = PhoneForm::default();
            form.select_answer(Scenario::One, Answer::Yes);
            form.toggle_vehicle(Vehicle::Car);
            assert_eq!(form.error(FieldId::Vehicle), None);
            form.toggle_vehicle(Vehicle::Car);
            assert_eq!(
                form.error(FieldId::Vehicle),
                Some(&FieldError::VehicleRequired)
            );
        }

        #[test]
        fn test_hiding_group_drops_its_error() {
            let mut form = PhoneForm::default();
            form.select_answer(Scenario::One, Answer::Yes);
            form.toggle_vehicle(Vehicle::Car);
            form.toggle_vehicle(Vehicle::Car);
            assert!(form.error(FieldId::Vehicle).is_some());
            form.select_answer(Scenario::One, Answer::No);
            assert_eq!(form.error(FieldId::Vehicle), None);
        }

        #[test]
        fn test_hiding_group_keeps_selections_by_default() {
            let mut form = PhoneForm::default();
            form.select_answer(Scenario::One, Answer::Yes);
            form.toggle_vehicle(Vehicle::Boat);
            form.select_answer(Scenario::One, Answer::No);
            assert_eq!(form.values().vehicle, BTreeSet::from([Vehicle::Boat]));
            form.select_answer(Scenario::One, Answer::Yes);
            assert_eq!(form.error(FieldId::Vehicle), None);
        }

        #[test]
        fn test_hiding_group_clears_selections_when_configured() {
            let mut form = PhoneForm::new(true);
            form.select_answer(Scenario::One, Answer::Yes);
            form.toggle_vehicle(Vehicle::Boat);
            form.select_answer(Scenario::One, Answer::No);
            assert!(form.values().vehicle.is_empty());
            assert!(!form.meta(FieldId::Vehicle).dirty);

            form.select_answer(Scenario::Two, Answer::Yes);
            form.toggle_destination(Destination::Paris);
            form.select_answer(Scenario::Two, Answer::No);
            assert_eq!(form.values().destination, FormValues::default().destination);
        }

        #[test]
        fn test_option_cursor_wraps_and_activates() {
            let mut form = PhoneForm::default();
            form.focus_field(FieldId::ConfirmChoice1);
            assert_eq!(form.option_cursor(FieldId::ConfirmChoice1), 0);
            form.move_option(false);
            assert_eq!(form.option_cursor(FieldId::ConfirmChoice1), 1);
            assert!(form.activate_option());
            assert_eq!(form.values().confirm_choice1, Some(Answer::No));
            assert_eq!(form.option_cursor(FieldId::ConfirmChoice1), 1);
        }

        #[test]
        fn test_activate_toggles_checkbox() {
            let mut form = PhoneForm::default();
            form.select_answer(Scenario::Two, Answer::Yes);
            form.focus_field(FieldId::Destination);
            form.move_option(true);
            form.move_option(true);
            assert!(form.activate_option());
            assert!(form.values().destination.contains(&Destination::Italy));
            assert!(form.meta(FieldId::Destination).dirty);
        }

        #[test]
        fn test_activate_on_text_field_is_not_handled() {
            let mut form = PhoneForm::default();
            assert!(!form.activate_option());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_submit_reports_required_fields() {
            let mut form = PhoneForm::default();
            let err = form.submit().unwrap_err();
            assert_eq!(
                err.fields,
                vec![
                    FieldId::Phone,
                    FieldId::ConfirmPhone,
                    FieldId::ConfirmChoice1,
                    FieldId::ConfirmChoice2
                ]
            );
            assert_eq!(form.error(FieldId::Phone), Some(&FieldError::PhoneRequired));
            assert_eq!(
                form.error(FieldId::ConfirmPhone),
                Some(&FieldError::ConfirmRequired)
            );
            assert_eq!(
                form.error(FieldId::ConfirmChoice1),
                Some(&FieldError::ChoiceRequired)
            );
            assert_eq!(form.submit_count(), 1);
        }

        #[test]
        fn test_failed_submit_focuses_first_invalid_field() {
            let mut form = PhoneForm::default();
            fill_valid_phones(&mut form);
            form.select_answer(Scenario::One, Answer::Yes);
            form.select_answer(Scenario::Two, Answer::No);
            form.focus_field(FieldId::ConfirmChoice2);

            let err = form.submit().unwrap_err();
            assert_eq!(err.fields, vec![FieldId::Vehicle]);
            assert_eq!(
                form.error(FieldId::Vehicle),
                Some(&FieldError::VehicleRequired)
            );
            assert_eq!(form.focus(), Focus::Field(FieldId::Vehicle));
        }

        #[test]
        fn test_scenario_two_no_does_not_block() {
            let mut form = PhoneForm::default();
            fill_valid_phones(&mut form);
            form.select_answer(Scenario::One, Answer::No);
            form.select_answer(Scenario::Two, Answer::No);

            let values = form.submit().unwrap();
            assert_eq!(values.phone, "(234)-567-8901");
            assert!(values.vehicle.is_empty());
            assert_eq!(
                values.destination,
                BTreeSet::from([Destination::Bali, Destination::Switzerland])
            );
        }

        #[test]
        fn test_submitted_values_include_visible_groups() {
            let mut form = PhoneForm::default();
            fill_valid_phones(&mut form);
            form.select_answer(Scenario::One, Answer::Yes);
            form.toggle_vehicle(Vehicle::Car);
            form.select_answer(Scenario::Two, Answer::Yes);
            form.toggle_destination(Destination::Italy);

            let values = form.submit().unwrap();
            assert_eq!(values.vehicle, BTreeSet::from([Vehicle::Car]));
            assert_eq!(
                values.destination,
                BTreeSet::from([
                    Destination::Bali,
                    Destination::Switzerland,
                    Destination::Italy
                ])
            );
        }

        #[test]
        fn test_hidden_selection_is_still_submitted() {
            let mut form = PhoneForm::default();
            fill_valid_phones(&mut form);
            form.select_answer(Scenario::One, Answer::Yes);
            form.toggle_vehicle(Vehicle::Plane);
            form.select_answer(Scenario::One, Answer::No);
            form.select_answer(Scenario::Two, Answer::No);

            let values = form.submit().unwrap();
            assert_eq!(values.vehicle, BTreeSet::from([Vehicle::Plane]));
            assert_eq!(
                values.destination,
                BTreeSet::from([Destination::Bali, Destination::Switzerland])
            );
        }

        #[test]
        fn test_clearing_hidden_selections_drops_stale_choice() {
            let mut form = PhoneForm::new(true);
            fill_valid_phones(&mut form);
            form.select_answer(Scenario::One, Answer::Yes);
            form.toggle_vehicle(Vehicle::Plane);
            form.select_answer(Scenario::One, Answer::No);
            form.select_answer(Scenario::Two, Answer::No);

            let values = form.submit().unwrap();
            assert!(values.vehicle.is_empty());
        }

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = PhoneForm::new(true);
            fill_valid_phones(&mut form);
            form.select_answer(Scenario::Two, Answer::Yes);
            let _ = form.submit();
            form.reset();

            assert_eq!(form.values(), &FormValues::default());
            assert!(!form.has_errors());
            assert_eq!(form.meta(FieldId::Phone), FieldMeta::default());
            assert_eq!(form.submit_count(), 0);
            assert_eq!(form.focus(), Focus::Field(FieldId::Phone));
        }
    }

    mod accessibility {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_field_is_not_invalid() {
            let form = PhoneForm::default();
            let attrs = form.accessibility(FieldId::Phone);
            assert_eq!(attrs.aria_invalid(), "false");
            assert_eq!(attrs.described_by, None);
        }

        #[test]
        fn test_invalid_field_points_at_alert() {
            let mut form = PhoneForm::default();
            let _ = form.submit();
            let attrs = form.accessibility(FieldId::ConfirmPhone);
            assert!(attrs.invalid);
            assert_eq!(attrs.described_by.as_deref(), Some("confirmPhone-error"));
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_wraps_to_phone() {
            let mut form = PhoneForm::default();
            for _ in 0..form.field_count() {
                form.next_field();
            }
            assert_eq!(form.focus(), Focus::Field(FieldId::Phone));
        }

        #[test]
        fn test_prev_from_first_goes_to_submit() {
            let mut form = PhoneForm::default();
            form.prev_field();
            assert_eq!(form.focus(), Focus::Submit);
        }

        #[test]
        fn test_focus_field_ignores_hidden_field() {
            let mut form = PhoneForm::default();
            form.focus_field(FieldId::Vehicle);
            assert_eq!(form.focus(), Focus::Field(FieldId::Phone));
        }

        #[test]
        fn test_display_values() {
            let mut form = PhoneForm::default();
            form.select_answer(Scenario::One, Answer::Yes);
            form.toggle_vehicle(Vehicle::Bike);
            form.toggle_vehicle(Vehicle::Boat);
            let values = form.values();
            assert_eq!(values.display_value(FieldId::ConfirmChoice1), "Yes1");
            assert_eq!(values.display_value(FieldId::ConfirmChoice2), "");
            assert_eq!(values.display_value(FieldId::Vehicle), "[Bike,Boat]");
            assert_eq!(
                values.display_value(FieldId::Destination),
                "[Bali,Switzerland]"
            );
        }
    }
}
