//! Student field slot value objects

/// Suffix appended to a slot identifier to form its value key
const VALUE_KEY_SUFFIX: &str = "_name";

/// One named input position for a single student within a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    pub identifier: String,
    pub round: u8,
    pub slot_index_in_round: u8,
}

impl FieldSlot {
    /// Create a slot; the identifier is `round<N>_student<K>` with K 1-based
    pub fn new(round: u8, slot_index_in_round: u8) -> Self {
        Self {
            identifier: format!("round{}_student{}", round, slot_index_in_round + 1),
            round,
            slot_index_in_round,
        }
    }

    /// Key under which this slot's text is stored and submitted
    pub fn value_key(&self) -> String {
        format!("{}{}", self.identifier, VALUE_KEY_SUFFIX)
    }

    /// Label rendered next to the input
    pub fn label(&self) -> String {
        format!("Student {} Name", self.slot_index_in_round + 1)
    }

    /// Human-readable position, e.g. "Round 1 Student 2"
    pub fn display_name(&self) -> String {
        format!(
            "Round {} Student {}",
            self.round,
            self.slot_index_in_round + 1
        )
    }
}
