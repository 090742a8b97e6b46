//! Contact page form state: the draft the inputs edit, the submit status and
//! the embed a draft turns into.

use crate::data::{BUDGET_OPTIONS, TIMELINE_OPTIONS};
use crate::webhook::{Embed, WebhookError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    General,
    Project,
}

impl FormKind {
    pub fn label(self) -> &'static str {
        match self {
            FormKind::General => "General Message",
            FormKind::Project => "Project Request",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Budget,
    Timeline,
    Message,
}

impl Field {
    /// Matches the `name` attribute of the input bound to the field.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
            Field::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        match key {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "company" => Some(Field::Company),
            "budget" => Some(Field::Budget),
            "timeline" => Some(Field::Timeline),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Budget => &self.budget,
            Field::Timeline => &self.timeline,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Budget => self.budget = value,
            Field::Timeline => self.timeline = value,
            Field::Message => self.message = value,
        }
    }

    pub fn missing_required(&self) -> Vec<Field> {
        REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == ContactDraft::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, PartialEq)]
pub enum SubmitRefused {
    AlreadySubmitting,
    MissingFields(Vec<Field>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub kind: FormKind,
    pub draft: ContactDraft,
    pub status: SubmitStatus,
}

impl ContactForm {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            draft: ContactDraft::default(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    /// Shared fields survive a mode switch; a stale success or error banner
    /// does not.
    pub fn switch_kind(&mut self, kind: FormKind) {
        if self.status == SubmitStatus::Submitting {
            return;
        }
        self.kind = kind;
        self.status = SubmitStatus::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Moves to `Submitting` and returns the embed to post. Refuses while a
    /// request is in flight or a required field is blank, so no POST happens.
    pub fn begin_submit(&mut self, timestamp: String) -> Result<Embed, SubmitRefused> {
        if self.is_submitting() {
            return Err(SubmitRefused::AlreadySubmitting);
        }
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            return Err(SubmitRefused::MissingFields(missing));
        }
        self.mark_submitting();
        Ok(build_embed(self.kind, &self.draft, timestamp))
    }

    /// Records that a submission already accepted by `begin_submit` is in
    /// flight. Returns false when one already was.
    pub fn mark_submitting(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    pub fn finish(&mut self, outcome: Result<(), WebhookError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.draft = ContactDraft::default();
            }
            Err(e) => {
                log::error!("Error submitting form: {}", e);
                self.status = SubmitStatus::Error;
            }
        }
    }
}

pub fn budget_display(code: &str) -> String {
    lookup(&BUDGET_OPTIONS, code)
}

pub fn timeline_display(code: &str) -> String {
    lookup(&TIMELINE_OPTIONS, code)
}

fn lookup(options: &[(&str, &str)], code: &str) -> String {
    options
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| code.to_string())
}

fn or_default(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

pub fn build_embed(kind: FormKind, draft: &ContactDraft, timestamp: String) -> Embed {
    let client = format!(
        "**Name:** {}\n\n**Email:** {}",
        or_default(&draft.name, "Not provided"),
        or_default(&draft.email, "Not provided"),
    );

    match kind {
        FormKind::Project => {
            let budget = match draft.budget.trim() {
                "" => "Not specified".to_string(),
                code => budget_display(code),
            };
            let timeline = match draft.timeline.trim() {
                "" => "Not specified".to_string(),
                code => timeline_display(code),
            };
            let details = format!(
                "**Company:** {}\n\n**Budget:** {}\n\n**Timeline:** {}",
                or_default(&draft.company, "Not provided"),
                budget,
                timeline,
            );
            Embed::branded(
                "🚀 New Project Request Received",
                "A new project submission has been received and requires your attention.",
                "Project Submissions",
                timestamp,
            )
            .field("👤 **CLIENT INFORMATION**", &client)
            .field("💼 **PROJECT DETAILS**", &details)
            .field("📝 **PROJECT DESCRIPTION**", &or_default(&draft.message, "No message provided"))
        }
        FormKind::General => Embed::branded(
            "📬 New Contact Message",
            "Someone reached out through the contact page.",
            "Contact Messages",
            timestamp,
        )
        .field("👤 **CONTACT INFORMATION**", &client)
        .field("📝 **MESSAGE**", &or_default(&draft.message, "No message provided")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2026-10-15T12:00:00+00:00";

    fn filled(kind: FormKind) -> ContactForm {
        let mut form = ContactForm::new(kind);
        form.edit(Field::Name, "Jane".to_string());
        form.edit(Field::Email, "jane@x.com".to_string());
        form.edit(Field::Message, "We need a pentest".to_string());
        form
    }

    #[test]
    fn blank_required_fields_block_submit() {
        let mut form = ContactForm::new(FormKind::General);
        form.edit(Field::Name, "Jane".to_string());
        form.edit(Field::Message, "   ".to_string());

        let refused = form.begin_submit(TS.to_string()).unwrap_err();
        assert_eq!(refused, SubmitRefused::MissingFields(vec![Field::Email, Field::Message]));
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn success_clears_the_draft() {
        let mut form = filled(FormKind::Project);
        form.edit(Field::Company, "Acme".to_string());
        form.begin_submit(TS.to_string()).unwrap();
        assert!(form.is_submitting());

        form.finish(Ok(()));
        assert_eq!(form.status, SubmitStatus::Success);
        assert!(form.draft.is_empty());
        for field in [Field::Name, Field::Email, Field::Company, Field::Budget, Field::Timeline, Field::Message] {
            assert_eq!(form.draft.get(field), "");
        }
    }

    #[test]
    fn failure_keeps_the_draft_for_retry() {
        let mut form = filled(FormKind::General);
        let before = form.draft.clone();
        form.begin_submit(TS.to_string()).unwrap();

        form.finish(Err(WebhookError::Status(500)));
        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.draft, before);

        form.begin_submit(TS.to_string()).unwrap();
        form.finish(Err(WebhookError::Network("offline".to_string())));
        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.draft, before);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled(FormKind::General);
        form.begin_submit(TS.to_string()).unwrap();
        assert_eq!(form.begin_submit(TS.to_string()), Err(SubmitRefused::AlreadySubmitting));
    }

    #[test]
    fn marking_an_accepted_submit_reaches_the_same_state() {
        let mut accepted = filled(FormKind::Project);
        accepted.begin_submit(TS.to_string()).unwrap();

        let mut marked = filled(FormKind::Project);
        assert!(marked.mark_submitting());
        assert_eq!(marked, accepted);
        assert!(!marked.mark_submitting());
        assert!(marked.is_submitting());
    }

    #[test]
    fn switching_kind_keeps_shared_fields() {
        let mut form = filled(FormKind::General);
        form.begin_submit(TS.to_string()).unwrap();
        form.finish(Err(WebhookError::MissingUrl));

        form.switch_kind(FormKind::Project);
        assert_eq!(form.kind, FormKind::Project);
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.draft.name, "Jane");
    }

    #[test]
    fn budget_and_timeline_codes_map_to_labels() {
        assert_eq!(budget_display("under-10k"), "Under $10,000");
        assert_eq!(budget_display("50k-100k"), "$50,000 - $100,000");
        assert_eq!(budget_display("custom"), "custom");
        assert_eq!(timeline_display("6-months-plus"), "6+ months");
        assert_eq!(timeline_display("asap"), "ASAP");
        assert_eq!(timeline_display("someday"), "someday");
    }

    #[test]
    fn project_embed_fills_gaps() {
        let form = filled(FormKind::Project);
        let embed = build_embed(FormKind::Project, &form.draft, TS.to_string());

        assert_eq!(embed.title, "🚀 New Project Request Received");
        assert_eq!(embed.timestamp, TS);
        assert_eq!(embed.fields.len(), 3);
        assert_eq!(embed.fields[0].value, "**Name:** Jane\n\n**Email:** jane@x.com");
        assert_eq!(
            embed.fields[1].value,
            "**Company:** Not provided\n\n**Budget:** Not specified\n\n**Timeline:** Not specified"
        );
        assert_eq!(embed.fields[2].value, "We need a pentest");
    }

    #[test]
    fn project_embed_uses_display_labels() {
        let mut form = filled(FormKind::Project);
        form.edit(Field::Budget, "10k-25k".to_string());
        form.edit(Field::Timeline, "1-2-months".to_string());
        let embed = build_embed(FormKind::Project, &form.draft, TS.to_string());
        assert!(embed.fields[1].value.contains("**Budget:** $10,000 - $25,000"));
        assert!(embed.fields[1].value.contains("**Timeline:** 1-2 months"));
    }

    #[test]
    fn general_embed_has_no_project_details() {
        let form = filled(FormKind::General);
        let embed = build_embed(FormKind::General, &form.draft, TS.to_string());
        assert_eq!(embed.title, "📬 New Contact Message");
        assert_eq!(embed.fields.len(), 2);
        assert!(embed.fields.iter().all(|f| !f.name.contains("PROJECT")));
    }

    #[test]
    fn field_keys_round_trip_through_input_names() {
        assert_eq!(Field::from_key("timeline"), Some(Field::Timeline));
        assert_eq!(Field::from_key(Field::Company.key()), Some(Field::Company));
        assert_eq!(Field::from_key("phone"), None);
    }
}
