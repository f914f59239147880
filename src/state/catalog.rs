//! Class catalog backing the class picker

/// Label shown for the "no class selected" picker entry
pub const PLACEHOLDER_LABEL: &str = "-- Choose a Class --";

/// Number of classes in the built-in catalog
const DEFAULT_CLASS_COUNT: u32 = 10;

/// A selectable class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassOption {
    pub id: u32,
    pub name: String,
}

impl ClassOption {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Fixed, ordered list of classes.
///
/// The picker walks over `placeholder + options`: index 0 is the placeholder
/// (no class selected) and index `i` maps to `options[i - 1]`.
#[derive(Debug, Clone)]
pub struct ClassCatalog {
    options: Vec<ClassOption>,
}

impl ClassCatalog {
    pub fn new(options: Vec<ClassOption>) -> Self {
        Self { options }
    }

    /// Look up a class by id
    pub fn find(&self, id: u32) -> Option<&ClassOption> {
        self.options.iter().find(|c| c.id == id)
    }

    /// Number of picker entries, placeholder included
    pub fn picker_len(&self) -> usize {
        self.options.len() + 1
    }

    /// Class at a picker position (`None` for the placeholder or out of range)
    pub fn class_at(&self, picker_index: usize) -> Option<&ClassOption> {
        picker_index
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
    }

    /// Picker position of a class id (0 when absent or unknown)
    pub fn picker_index_of(&self, id: Option<u32>) -> usize {
        id.and_then(|id| self.options.iter().position(|c| c.id == id))
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Next picker position, wrapping back to the placeholder
    pub fn next_index(&self, current: usize) -> usize {
        (current + 1) % self.picker_len()
    }

    /// Previous picker position, wrapping to the last class
    pub fn prev_index(&self, current: usize) -> usize {
        if current == 0 {
            self.picker_len() - 1
        } else {
            current - 1
        }
    }

    /// Display label for a picker position
    pub fn label_at(&self, picker_index: usize) -> &str {
        self.class_at(picker_index)
            .map(|c| c.name.as_str())
            .unwrap_or(PLACEHOLDER_LABEL)
    }
}

impl Default for ClassCatalog {
    fn default() -> Self {
        Self::new(
            (1..=DEFAULT_CLASS_COUNT)
                .map(|id| ClassOption::new(id, format!("Class {id}")))
                .collect(),
        )
    }
}
