//! Interview scheduling form state

use super::field::{FormField, TimeSlot};

/// Hard cap on dynamically added attendee fields. Two primary attendees plus
/// ten extras covers any realistic interview panel.
pub const MAX_ADDITIONAL_ATTENDEES: usize = 10;

/// Number of fixed fields before the dynamic attendee rows (time, myemail, email2)
const FIXED_FIELDS: usize = 3;

/// Buttons available on the form's action row
pub const BUTTON_CANCEL: usize = 0;
pub const BUTTON_SUBMIT: usize = 1;
const BUTTON_COUNT: usize = 2;

/// Trait for common form operations
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
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// State for one open scheduling dialog.
///
/// Field order for navigation: time slot, the two primary email fields, the
/// dynamic attendee fields, then the buttons row.
#[derive(Debug, Clone)]
pub struct InterviewForm {
    pub time: FormField,
    pub my_email: FormField,
    pub email2: FormField,
    pub additional_emails: Vec<FormField>,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Cancel, 1=Begin Scheduling)
    pub selected_button: usize,
    /// Email seeded from the user profile at dialog-open time, restored by reset
    seeded_email: String,
}

impl InterviewForm {
    /// Create a form seeded with the signed-in user's email
    pub fn seeded(profile_email: &str) -> Self {
        Self {
            time: FormField::slot("time", "Interview Length"),
            my_email: FormField::text_with_value(
                "myemail",
                "Email Address",
                profile_email.to_string(),
            ),
            email2: FormField::text("email2", "Email Address"),
            additional_emails: Vec::new(),
            active_field_index: 0,
            selected_button: BUTTON_SUBMIT,
            seeded_email: profile_email.to_string(),
        }
    }

    /// Selected interview duration
    pub fn time_slot(&self) -> TimeSlot {
        self.time.as_slot()
    }

    /// Append one empty attendee field. Silently ignored once the cap is hit.
    pub fn append_email_field(&mut self) {
        if self.additional_emails.len() >= MAX_ADDITIONAL_ATTENDEES {
            return;
        }
        let name = format!("emails[{}]", self.additional_emails.len());
        self.additional_emails
            .push(FormField::text(&name, "Email Address"));
    }

    /// Remove the attendee field at `index`, keeping the order of the rest.
    /// Out-of-range indices are a no-op.
    pub fn remove_email_field(&mut self, index: usize) {
        if index >= self.additional_emails.len() {
            return;
        }
        self.additional_emails.remove(index);
        let count = self.field_count();
        if self.active_field_index >= count {
            self.active_field_index = count - 1;
        }
    }

    /// Restore the seeded defaults captured when the dialog opened
    pub fn reset(&mut self) {
        let seeded = self.seeded_email.clone();
        self.time = FormField::slot("time", "Interview Length");
        self.my_email = FormField::text_with_value("myemail", "Email Address", seeded);
        self.email2 = FormField::text("email2", "Email Address");
        self.additional_emails.clear();
        self.active_field_index = 0;
        self.selected_button = BUTTON_SUBMIT;
    }

    pub fn can_add_attendee(&self) -> bool {
        self.additional_emails.len() < MAX_ADDITIONAL_ATTENDEES
    }

    /// Index of the buttons row (always the last navigation slot)
    pub fn buttons_row_index(&self) -> usize {
        self.field_count() - 1
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.buttons_row_index()
    }

    /// If the active field is a dynamic attendee field, its position in the list
    pub fn active_additional_index(&self) -> Option<usize> {
        let idx = self.active_field_index;
        if idx >= FIXED_FIELDS && idx < FIXED_FIELDS + self.additional_emails.len() {
            Some(idx - FIXED_FIELDS)
        } else {
            None
        }
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }
}

impl Form for InterviewForm {
    fn field_count(&self) -> usize {
        // time, myemail, email2, dynamic attendees, buttons row
        FIXED_FIELDS + self.additional_emails.len() + 1
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }

    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.time,
            1 => &mut self.my_email,
            2 => &mut self.email2,
            idx if idx - FIXED_FIELDS < self.additional_emails.len() => {
                &mut self.additional_emails[idx - FIXED_FIELDS]
            }
            // Buttons row: the slot field stands in, it is never edited from there
            _ => &mut self.time,
        }
    }

    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.time),
            1 => Some(&self.my_email),
            2 => Some(&self.email2),
            idx => self.additional_emails.get(idx - FIXED_FIELDS),
        }
    }
}
