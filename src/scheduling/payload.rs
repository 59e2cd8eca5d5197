//! Interview submission payload

use crate::state::{Candidate, InterviewForm};
use serde::Serialize;

/// Body of the add-interview request. Derived from the form at submit time,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPayload {
    /// Scheduling template id for the chosen duration
    pub xai_template: String,
    /// Primary emails first, then the non-blank dynamic entries in form order
    pub attendees_list: Vec<String>,
    /// Sequential index among the candidate's interviews, derived from a
    /// snapshot of the interview list at submit time
    pub round: u32,
    pub created_by: String,
}

impl InterviewPayload {
    pub fn build(form: &InterviewForm, candidate: &Candidate, created_by: &str) -> Self {
        let mut attendees_list = vec![
            form.my_email.as_text().to_string(),
            form.email2.as_text().to_string(),
        ];
        attendees_list.extend(
            form.additional_emails
                .iter()
                .map(|field| field.as_text())
                .filter(|email| !email.trim().is_empty())
                .map(str::to_string),
        );

        Self {
            xai_template: form.time_slot().wire_id().to_string(),
            attendees_list,
            round: candidate.next_round(),
            created_by: created_by.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Interview, TimeSlot};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn candidate_with_interviews(n: usize) -> Candidate {
        Candidate {
            id: "c1".to_string(),
            name: "Ada".to_string(),
            role: Some("Backend Engineer".to_string()),
            photo_url: None,
            interviews: (0..n)
                .map(|i| Interview {
                    id: format!("i{i}"),
                    round: i as u32 + 1,
                    status: "completed".to_string(),
                    created_at: Utc::now(),
                })
                .collect(),
        }
    }

    fn form_with_extras(extras: &[&str]) -> InterviewForm {
        let mut form = InterviewForm::seeded("a@b.com");
        form.email2.set_text("c@d.com".to_string());
        for extra in extras {
            form.append_email_field();
            form.additional_emails
                .last_mut()
                .unwrap()
                .set_text(extra.to_string());
        }
        form
    }

    #[test]
    fn test_primaries_always_lead_the_attendee_list() {
        let payload = InterviewPayload::build(&form_with_extras(&[]), &candidate_with_interviews(0), "u1");
        assert_eq!(payload.attendees_list, vec!["a@b.com", "c@d.com"]);
    }

    #[test]
    fn test_blank_entries_are_filtered_and_order_kept() {
        let form = form_with_extras(&["", "e@f.com", "  ", "g@h.com"]);
        let payload = InterviewPayload::build(&form, &candidate_with_interviews(0), "u1");
        assert_eq!(
            payload.attendees_list,
            vec!["a@b.com", "c@d.com", "e@f.com", "g@h.com"]
        );
    }

    #[test]
    fn test_round_is_interview_count_plus_one() {
        for count in [0usize, 1, 7] {
            let payload = InterviewPayload::build(
                &form_with_extras(&[]),
                &candidate_with_interviews(count),
                "u1",
            );
            assert_eq!(payload.round, count as u32 + 1);
        }
    }

    #[test]
    fn test_template_follows_selected_slot() {
        let mut form = form_with_extras(&[]);
        form.time.set_slot(TimeSlot::SixtyMinute);
        let payload = InterviewPayload::build(&form, &candidate_with_interviews(0), "u1");
        assert_eq!(payload.xai_template, "60-min-interview");
    }

    #[test]
    fn test_created_by_is_passed_through() {
        let payload =
            InterviewPayload::build(&form_with_extras(&[]), &candidate_with_interviews(0), "u42");
        assert_eq!(payload.created_by, "u42");
    }

    #[test]
    fn test_serializes_to_backend_wire_names() {
        let payload =
            InterviewPayload::build(&form_with_extras(&[]), &candidate_with_interviews(1), "u1");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["xaiTemplate"], "30-min-interview");
        assert_eq!(json["attendeesList"][0], "a@b.com");
        assert_eq!(json["round"], 2);
        assert_eq!(json["createdBy"], "u1");
    }
}
