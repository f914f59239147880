//! Application state definitions

use super::catalog::{ClassCatalog, ClassOption};
use super::forms::{FieldSlot, RegistrationForm};
use super::submit::SubmitFlow;

/// Which control currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    ClassPicker,
    /// Index into the form's field slots
    Field(usize),
    SubmitButton,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: ClassCatalog,
    pub form: RegistrationForm,
    pub submit: SubmitFlow,

    // UI state
    pub focus: Focus,
    pub picker_index: usize,
    /// Presentation-layer notice (e.g. required fields still empty)
    pub notice: Option<String>,
    /// Animation frame for the submitting indicator
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(catalog: ClassCatalog, form: RegistrationForm) -> Self {
        let picker_index = catalog.picker_index_of(form.selected_class_id());
        Self {
            catalog,
            form,
            picker_index,
            ..Default::default()
        }
    }

    /// Number of focus stops: picker, one per field, submit button
    fn focus_stop_count(&self) -> usize {
        self.form.fields().len() + 2
    }

    fn focus_to_stop(&self) -> usize {
        match self.focus {
            Focus::ClassPicker => 0,
            Focus::Field(i) => i + 1,
            Focus::SubmitButton => self.focus_stop_count() - 1,
        }
    }

    fn stop_to_focus(&self, stop: usize) -> Focus {
        let last = self.focus_stop_count() - 1;
        match stop {
            0 => Focus::ClassPicker,
            s if s >= last => Focus::SubmitButton,
            s => Focus::Field(s - 1),
        }
    }

    /// Move focus forward (wraps around)
    pub fn next_focus(&mut self) {
        let next = (self.focus_to_stop() + 1) % self.focus_stop_count();
        self.focus = self.stop_to_focus(next);
    }

    /// Move focus backward (wraps around)
    pub fn prev_focus(&mut self) {
        let current = self.focus_to_stop();
        let prev = if current == 0 {
            self.focus_stop_count() - 1
        } else {
            current - 1
        };
        self.focus = self.stop_to_focus(prev);
    }

    /// Move the picker and select the class under it.
    ///
    /// Every change replaces the form, discarding typed names.
    pub fn select_picker_index(&mut self, index: usize) {
        self.picker_index = index.min(self.catalog.picker_len() - 1);
        let class_id = self.catalog.class_at(self.picker_index).map(|c| c.id);
        self.form.select_class(class_id);
        self.notice = None;
        if matches!(self.focus, Focus::Field(i) if i >= self.form.fields().len()) {
            self.focus = Focus::ClassPicker;
        }
        tracing::info!(?class_id, "class selection changed");
    }

    pub fn picker_next(&mut self) {
        self.select_picker_index(self.catalog.next_index(self.picker_index));
    }

    pub fn picker_prev(&mut self) {
        self.select_picker_index(self.catalog.prev_index(self.picker_index));
    }

    pub fn selected_class(&self) -> Option<&ClassOption> {
        self.form
            .selected_class_id()
            .and_then(|id| self.catalog.find(id))
    }

    /// The field slot under focus, if any
    pub fn focused_field(&self) -> Option<&FieldSlot> {
        match self.focus {
            Focus::Field(i) => self.form.fields().get(i),
            _ => None,
        }
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(key) = self.focused_field().map(FieldSlot::value_key) {
            let mut text = self.form.value(&key).unwrap_or_default().to_string();
            text.push(c);
            self.form.set_field_value(&key, text);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(key) = self.focused_field().map(FieldSlot::value_key) {
            let mut text = self.form.value(&key).unwrap_or_default().to_string();
            text.pop();
            self.form.set_field_value(&key, text);
        }
    }

    /// Focus a field slot by identifier
    pub fn focus_field(&mut self, identifier: &str) {
        if let Some(i) = self
            .form
            .fields()
            .iter()
            .position(|f| f.identifier == identifier)
        {
            self.focus = Focus::Field(i);
        }
    }

    /// Whether the submit affordance is enabled
    pub fn can_submit(&self) -> bool {
        self.submit.can_submit(self.form.is_class_selected())
    }

    /// Advance the submitting indicator
    pub fn tick(&mut self) {
        if self.submit.is_submitting() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_class(id: u32) -> AppState {
        let mut state = AppState::default();
        state.select_picker_index(id as usize);
        state
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.focus, Focus::ClassPicker);
        assert_eq!(state.picker_index, 0);
        assert!(!state.can_submit());
        assert!(state.selected_class().is_none());
    }

    #[test]
    fn test_picker_selects_class() {
        let mut state = AppState::default();
        state.picker_next();
        assert_eq!(state.form.selected_class_id(), Some(1));
        assert_eq!(state.selected_class().map(|c| c.name.as_str()), Some("Class 1"));
        assert!(state.can_submit());
    }

    #[test]
    fn test_picker_wraps_to_placeholder() {
        let mut state = AppState::default();
        state.picker_prev();
        assert_eq!(state.form.selected_class_id(), Some(10));
        state.picker_next();
        assert!(state.form.selected_class_id().is_none());
        assert!(state.form.fields().is_empty());
    }

    #[test]
    fn test_focus_ring_without_class() {
        let mut state = AppState::default();
        state.next_focus();
        assert_eq!(state.focus, Focus::SubmitButton);
        state.next_focus();
        assert_eq!(state.focus, Focus::ClassPicker);
        state.prev_focus();
        assert_eq!(state.focus, Focus::SubmitButton);
    }

    #[test]
    fn test_focus_ring_with_class() {
        let mut state = state_with_class(2);
        state.next_focus();
        assert_eq!(state.focus, Focus::Field(0));
        for _ in 0..9 {
            state.next_focus();
        }
        assert_eq!(state.focus, Focus::Field(9));
        state.next_focus();
        assert_eq!(state.focus, Focus::SubmitButton);
        state.prev_focus();
        assert_eq!(state.focus, Focus::Field(9));
    }

    #[test]
    fn test_input_and_backspace() {
        let mut state = state_with_class(1);
        state.focus = Focus::Field(1);
        for c in "Bob".chars() {
            state.input_char(c);
        }
        assert_eq!(state.form.value("round1_student2_name"), Some("Bob"));
        state.backspace();
        assert_eq!(state.form.value("round1_student2_name"), Some("Bo"));
    }

    #[test]
    fn test_input_ignored_outside_fields() {
        let mut state = state_with_class(1);
        state.focus = Focus::SubmitButton;
        state.input_char('x');
        assert!(state.form.values().values().all(|v| v != "x"));
    }

    #[test]
    fn test_changing_class_discards_input() {
        let mut state = state_with_class(1);
        state.focus = Focus::Field(0);
        state.input_char('A');
        state.picker_next();
        assert_eq!(state.form.value("round1_student1_name"), Some(""));
        assert_eq!(state.form.value("class"), Some("2"));
    }

    #[test]
    fn test_focus_field_by_identifier() {
        let mut state = state_with_class(1);
        state.focus_field("round3_student1");
        assert_eq!(state.focus, Focus::Field(3));
    }

    #[test]
    fn test_tick_only_while_submitting() {
        let mut state = state_with_class(1);
        state.tick();
        assert_eq!(state.spinner_frame, 0);
        state.submit.begin(true).unwrap();
        state.tick();
        assert_eq!(state.spinner_frame, 1);
    }
}
