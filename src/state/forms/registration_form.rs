//! Registration form state: selected class, derived student slots and values

use super::field::FieldSlot;
use std::collections::BTreeMap;

/// Program name shared by every class
pub const DEFAULT_PROGRAM_NAME: &str = "Program Name";

/// Value key holding the selected class id
pub const CLASS_KEY: &str = "class";

/// Value key holding the program name
pub const PROGRAM_KEY: &str = "program";

/// Number of rounds in a registration
pub const ROUND_COUNT: u8 = 9;

/// Flat string-to-string map submitted as the request body
pub type FormValues = BTreeMap<String, String>;

/// Number of student slots in a round
fn slots_in_round(round: u8) -> u8 {
    if round == 1 {
        2
    } else {
        1
    }
}

/// Build the slot list in display order: round 1 has two students, the rest one
fn derive_fields() -> Vec<FieldSlot> {
    (1..=ROUND_COUNT)
        .flat_map(|round| (0..slots_in_round(round)).map(move |slot| FieldSlot::new(round, slot)))
        .collect()
}

/// The mutable aggregate behind the registration screen.
///
/// `fields` and `values` are only ever replaced together, so every slot has a
/// value entry (empty string when unfilled) alongside the `class` and
/// `program` keys.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    selected_class_id: Option<u32>,
    program_name: String,
    fields: Vec<FieldSlot>,
    values: FormValues,
}

impl RegistrationForm {
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            selected_class_id: None,
            program_name: program_name.into(),
            fields: Vec::new(),
            values: FormValues::new(),
        }
    }

    /// Select a class (or clear the selection).
    ///
    /// Always a full replace: anything typed under the previous class is
    /// discarded.
    pub fn select_class(&mut self, class_id: Option<u32>) {
        self.selected_class_id = class_id;

        match class_id {
            Some(id) => {
                let fields = derive_fields();
                let mut values = FormValues::new();
                values.insert(CLASS_KEY.to_string(), id.to_string());
                values.insert(PROGRAM_KEY.to_string(), self.program_name.clone());
                for field in &fields {
                    values.insert(field.value_key(), String::new());
                }
                self.fields = fields;
                self.values = values;
                tracing::debug!(class_id = id, "class selected, form reset");
            }
            None => {
                self.fields.clear();
                self.values.clear();
                tracing::debug!("class selection cleared");
            }
        }
    }

    /// Set the text of a field by its value key.
    ///
    /// The text itself is not validated. Keys that do not belong to the
    /// current form are ignored and `false` is returned.
    pub fn set_field_value(&mut self, key: &str, text: impl Into<String>) -> bool {
        match self.values.get_mut(key) {
            Some(value) => {
                *value = text.into();
                true
            }
            None => {
                tracing::warn!(key, "ignoring value for unknown field");
                false
            }
        }
    }

    /// Student slots grouped by round, rounds ascending.
    ///
    /// The returned iterator borrows the form and can be cloned to restart it.
    pub fn group_fields_by_round(&self) -> RoundGroups<'_> {
        RoundGroups {
            fields: &self.fields,
            next_round: 1,
        }
    }

    pub fn selected_class_id(&self) -> Option<u32> {
        self.selected_class_id
    }

    pub fn is_class_selected(&self) -> bool {
        self.selected_class_id.is_some()
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn fields(&self) -> &[FieldSlot] {
        &self.fields
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn student_count(&self) -> usize {
        self.fields.len()
    }

    /// Slots whose value is still empty, in display order
    pub fn missing_fields(&self) -> Vec<&FieldSlot> {
        self.fields
            .iter()
            .filter(|f| self.value(&f.value_key()).map_or(true, str::is_empty))
            .collect()
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_NAME)
    }
}

/// Iterator over `(round, slots in that round)` pairs
#[derive(Debug, Clone)]
pub struct RoundGroups<'a> {
    fields: &'a [FieldSlot],
    next_round: u8,
}

impl<'a> Iterator for RoundGroups<'a> {
    type Item = (u8, &'a [FieldSlot]);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_round <= ROUND_COUNT {
            let round = self.next_round;
            self.next_round += 1;

            let start = self.fields.iter().position(|f| f.round == round);
            if let Some(start) = start {
                let len = self.fields[start..]
                    .iter()
                    .take_while(|f| f.round == round)
                    .count();
                return Some((round, &self.fields[start..start + len]));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form_with_class(id: u32) -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.select_class(Some(id));
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = RegistrationForm::default();
        assert!(!form.is_class_selected());
        assert!(form.fields().is_empty());
        assert!(form.values().is_empty());
        assert_eq!(form.program_name(), "Program Name");
    }

    #[test]
    fn test_select_class_derives_ten_slots_in_order() {
        let form = form_with_class(3);
        let identifiers: Vec<&str> = form.fields().iter().map(|f| f.identifier.as_str()).collect();
        assert_eq!(
            identifiers,
            vec![
                "round1_student1",
                "round1_student2",
                "round2_student1",
                "round3_student1",
                "round4_student1",
                "round5_student1",
                "round6_student1",
                "round7_student1",
                "round8_student1",
                "round9_student1",
            ]
        );
    }

    #[test]
    fn test_select_class_resets_values() {
        let form = form_with_class(3);

        let mut expected = FormValues::new();
        expected.insert("class".to_string(), "3".to_string());
        expected.insert("program".to_string(), "Program Name".to_string());
        expected.insert("round1_student1_name".to_string(), String::new());
        expected.insert("round1_student2_name".to_string(), String::new());
        for round in 2..=9 {
            expected.insert(format!("round{round}_student1_name"), String::new());
        }

        assert_eq!(form.values(), &expected);
    }

    #[test]
    fn test_every_class_has_same_shape() {
        for id in 1..=10 {
            let form = form_with_class(id);
            assert_eq!(form.student_count(), 10);
            assert_eq!(form.values().len(), 12);
            let per_round: Vec<usize> = form
                .group_fields_by_round()
                .map(|(_, slots)| slots.len())
                .collect();
            assert_eq!(per_round, vec![2, 1, 1, 1, 1, 1, 1, 1, 1]);
            assert_eq!(form.values().values().filter(|v| v.is_empty()).count(), 10);
        }
    }

    #[test]
    fn test_clearing_class_empties_form() {
        let mut form = form_with_class(2);
        form.select_class(None);
        assert!(form.fields().is_empty());
        assert!(form.values().is_empty());
        assert_eq!(form.group_fields_by_round().count(), 0);
    }

    #[test]
    fn test_class_change_discards_typed_values() {
        let mut form = form_with_class(1);
        assert!(form.set_field_value("round1_student1_name", "Alice"));
        assert!(form.set_field_value("round5_student1_name", "Bob"));

        form.select_class(Some(2));

        assert_eq!(form.value("round1_student1_name"), Some(""));
        assert_eq!(form.value("round5_student1_name"), Some(""));
        assert_eq!(form.value("class"), Some("2"));
    }

    #[test]
    fn test_reselecting_same_class_also_resets() {
        let mut form = form_with_class(4);
        form.set_field_value("round2_student1_name", "Carol");
        form.select_class(Some(4));
        assert_eq!(form.value("round2_student1_name"), Some(""));
    }

    #[test]
    fn test_set_field_value_accepts_empty_text() {
        let mut form = form_with_class(1);
        form.set_field_value("round1_student1_name", "Alice");
        assert!(form.set_field_value("round1_student1_name", ""));
        assert_eq!(form.value("round1_student1_name"), Some(""));
    }

    #[test]
    fn test_set_field_value_ignores_unknown_key() {
        let mut form = form_with_class(1);
        assert!(!form.set_field_value("round10_student1_name", "Mallory"));
        assert!(form.value("round10_student1_name").is_none());
        assert_eq!(form.values().len(), 12);
    }

    #[test]
    fn test_set_field_value_without_class_is_ignored() {
        let mut form = RegistrationForm::default();
        assert!(!form.set_field_value("round1_student1_name", "Alice"));
        assert!(form.values().is_empty());
    }

    #[test]
    fn test_group_fields_by_round_is_idempotent() {
        let form = form_with_class(5);
        let first: Vec<_> = form.group_fields_by_round().collect();
        let second: Vec<_> = form.group_fields_by_round().collect();
        assert_eq!(first, second);
        let rounds: Vec<u8> = first.iter().map(|(r, _)| *r).collect();
        assert_eq!(rounds, (1..=9u8).collect::<Vec<_>>());
    }

    #[test]
    fn test_group_fields_by_round_restarts_from_clone() {
        let form = form_with_class(5);
        let mut groups = form.group_fields_by_round();
        let restart = groups.clone();
        groups.next();
        groups.next();
        assert_eq!(restart.count(), 9);
        assert_eq!(groups.count(), 7);
    }

    #[test]
    fn test_missing_fields_tracks_empty_values() {
        let mut form = form_with_class(1);
        assert_eq!(form.missing_fields().len(), 10);

        form.set_field_value("round1_student1_name", "Alice");
        let missing = form.missing_fields();
        assert_eq!(missing.len(), 9);
        assert_eq!(missing[0].identifier, "round1_student2");
    }

    #[test]
    fn test_program_name_is_used_for_every_class() {
        let mut form = RegistrationForm::new("Robotics");
        form.select_class(Some(8));
        assert_eq!(form.value(PROGRAM_KEY), Some("Robotics"));
        assert_eq!(form.value(CLASS_KEY), Some("8"));
    }
}
