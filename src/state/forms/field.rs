//! Form field value objects

/// Upper bound on email input length, matching the backend's column width
pub const MAX_EMAIL_LEN: usize = 320;

/// Interview duration choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSlot {
    #[default]
    ThirtyMinute,
    SixtyMinute,
}

impl TimeSlot {
    /// Template id the scheduling backend expects
    pub fn wire_id(&self) -> &'static str {
        match self {
            TimeSlot::ThirtyMinute => "30-min-interview",
            TimeSlot::SixtyMinute => "60-min-interview",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::ThirtyMinute => "30 Minute Interview",
            TimeSlot::SixtyMinute => "60 Minute Interview",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            TimeSlot::ThirtyMinute => TimeSlot::SixtyMinute,
            TimeSlot::SixtyMinute => TimeSlot::ThirtyMinute,
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Slot(TimeSlot),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value),
        }
    }

    /// Create a new time-slot field
    pub fn slot(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Slot(TimeSlot::default()),
        }
    }

    /// Get the text value (returns empty string for slot fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Slot(_) => "",
        }
    }

    /// Get the slot value (returns the default slot for text fields)
    pub fn as_slot(&self) -> TimeSlot {
        match &self.value {
            FieldValue::Slot(slot) => *slot,
            FieldValue::Text(_) => TimeSlot::default(),
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the slot value
    pub fn set_slot(&mut self, slot: TimeSlot) {
        self.value = FieldValue::Slot(slot);
    }

    /// Flip a slot field to the other duration; no-op for text fields
    pub fn toggle_slot(&mut self) {
        if let FieldValue::Slot(slot) = &mut self.value {
            *slot = slot.toggle();
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => {
                if s.chars().count() < MAX_EMAIL_LEN {
                    s.push(c);
                }
            }
            FieldValue::Slot(slot) => match c {
                '3' => *slot = TimeSlot::ThirtyMinute,
                '6' => *slot = TimeSlot::SixtyMinute,
                _ => {}
            },
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Slot(_) => {
                // Slot fields have no character-level editing
            }
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Slot(slot) => *slot = TimeSlot::default(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Slot(slot) => slot.label().to_string(),
        }
    }
}
