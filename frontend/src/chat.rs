//! The support chat is a fixed questionnaire, not a conversation: every
//! answer moves the session one step along `transition` until the collected
//! answers are posted to the team webhook.

use crate::data::SITE;
use crate::webhook::{Embed, WebhookError};

pub const GREETING: &str = "Hey I am Byte AI, I am Byte support bot. How can I assist you today?";
pub const ASK_NAME: &str = "I'd love to help! What's your name?";
pub const ASK_DISCORD: &str = "Do you have a Discord account? (yes/no)";
pub const ASK_DISCORD_USERNAME: &str = "What is your Discord username?";
pub const ASK_PROBLEM: &str = "Please describe the problem you need help with.";
pub const SENDING: &str = "Sending your request to the team...";
pub const DELIVERED: &str = "Thank you! Your request has been sent. We'll get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatStep {
    Welcome,
    Name,
    Email,
    Discord,
    DiscordUsername,
    Problem,
    Submitting,
    Complete,
}

/// Next step after the user answers `step` with `input`. `Submitting` and
/// `Complete` take no input and stay where they are.
pub fn transition(step: ChatStep, input: &str) -> ChatStep {
    match step {
        ChatStep::Welcome => ChatStep::Name,
        ChatStep::Name => ChatStep::Email,
        ChatStep::Email => ChatStep::Discord,
        ChatStep::Discord if says_yes(input) => ChatStep::DiscordUsername,
        ChatStep::Discord => ChatStep::Problem,
        ChatStep::DiscordUsername => ChatStep::Problem,
        ChatStep::Problem => ChatStep::Submitting,
        ChatStep::Submitting => ChatStep::Submitting,
        ChatStep::Complete => ChatStep::Complete,
    }
}

fn says_yes(input: &str) -> bool {
    input.to_lowercase().contains("yes")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

impl Sender {
    pub fn class(self) -> &'static str {
        match self {
            Sender::Bot => "bot",
            Sender::User => "user",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatAnswers {
    pub name: String,
    pub email: String,
    pub has_discord: bool,
    pub discord_username: Option<String>,
    pub problem: String,
}

impl ChatAnswers {
    fn record(&mut self, step: ChatStep, input: &str) {
        match step {
            ChatStep::Name => self.name = input.to_string(),
            ChatStep::Email => self.email = input.to_string(),
            ChatStep::Discord => self.has_discord = says_yes(input),
            ChatStep::DiscordUsername => self.discord_username = Some(input.to_string()),
            ChatStep::Problem => self.problem = input.to_string(),
            // the opening message is small talk and is not kept
            ChatStep::Welcome | ChatStep::Submitting | ChatStep::Complete => {}
        }
    }

    pub fn discord_display(&self) -> String {
        match (&self.has_discord, &self.discord_username) {
            (true, Some(username)) => format!("Yes: {}", username),
            (true, None) => "Yes".to_string(),
            (false, _) => "No".to_string(),
        }
    }

    pub fn to_embed(&self, timestamp: String) -> Embed {
        Embed::branded(
            "💬 New Support Request",
            "A visitor asked for help through the chat widget.",
            "Support Chat",
            timestamp,
        )
        .field("Name", &self.name)
        .field("Email", &self.email)
        .field("Discord", &self.discord_display())
        .field("Problem", &self.problem)
    }
}

/// Identifies one submission. `finish` only accepts the ticket of the
/// submission the session is currently waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u32);

#[derive(Debug, PartialEq)]
pub struct Submission {
    pub ticket: Ticket,
    pub answers: ChatAnswers,
}

#[derive(Debug, PartialEq)]
pub enum ChatEffect {
    /// The bot asked the next question, nothing else to do.
    Prompted,
    /// Every answer is in; post these to the webhook and report back through
    /// `ChatSession::finish` with the same ticket.
    Submit(Submission),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    step: ChatStep,
    answers: ChatAnswers,
    transcript: Vec<ChatMessage>,
    // bumped by reset() so results for an abandoned session are rejected
    generation: u32,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            step: ChatStep::Welcome,
            answers: ChatAnswers::default(),
            transcript: vec![ChatMessage {
                text: GREETING.to_string(),
                sender: Sender::Bot,
            }],
            generation: 0,
        }
    }

    pub fn step(&self) -> ChatStep {
        self.step
    }

    pub fn answers(&self) -> &ChatAnswers {
        &self.answers
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn accepts_input(&self) -> bool {
        !matches!(self.step, ChatStep::Submitting | ChatStep::Complete)
    }

    /// Feeds one user answer in. Blank input, or input after the questions are
    /// done, changes nothing and returns `None`.
    pub fn submit(&mut self, input: &str) -> Option<ChatEffect> {
        let input = input.trim();
        if input.is_empty() || !self.accepts_input() {
            return None;
        }

        self.answers.record(self.step, input);
        let next = transition(self.step, input);
        self.push(Sender::User, input.to_string());
        let prompt = self.prompt_for(next);
        self.push(Sender::Bot, prompt);
        self.step = next;

        if next == ChatStep::Submitting {
            Some(ChatEffect::Submit(Submission {
                ticket: Ticket(self.generation),
                answers: self.answers.clone(),
            }))
        } else {
            Some(ChatEffect::Prompted)
        }
    }

    /// Success and failure both end the session; only the closing message
    /// tells them apart. A result for another ticket is dropped.
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<(), WebhookError>) {
        if self.step != ChatStep::Submitting || ticket != Ticket(self.generation) {
            log::warn!("Dropping support request result for a previous session");
            return;
        }
        let text = match outcome {
            Ok(()) => DELIVERED.to_string(),
            Err(e) => {
                log::error!("Error submitting support request: {}", e);
                format!(
                    "Sorry, something went wrong sending your request. Please try again later or email us at {}.",
                    SITE.contact_email
                )
            }
        };
        self.push(Sender::Bot, text);
        self.step = ChatStep::Complete;
    }

    pub fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::new();
        self.generation = generation;
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.transcript.push(ChatMessage { text, sender });
    }

    fn prompt_for(&self, step: ChatStep) -> String {
        match step {
            ChatStep::Name => ASK_NAME.to_string(),
            ChatStep::Email => format!("Thanks, {}! What's your email address?", self.answers.name),
            ChatStep::Discord => ASK_DISCORD.to_string(),
            ChatStep::DiscordUsername => ASK_DISCORD_USERNAME.to_string(),
            ChatStep::Problem => ASK_PROBLEM.to_string(),
            ChatStep::Submitting => SENDING.to_string(),
            // never entered through submit()
            ChatStep::Welcome | ChatStep::Complete => GREETING.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RUN: [&str; 5] = ["hi", "Jane", "jane@x.com", "no", "broken"];

    fn run(session: &mut ChatSession, inputs: &[&str]) -> (Vec<ChatStep>, Option<Submission>) {
        let mut visited = vec![session.step()];
        let mut submitted = None;
        for input in inputs {
            if let Some(ChatEffect::Submit(submission)) = session.submit(input) {
                submitted = Some(submission);
            }
            visited.push(session.step());
        }
        (visited, submitted)
    }

    fn bot_lines(session: &ChatSession) -> Vec<&str> {
        session
            .transcript()
            .iter()
            .filter(|m| m.sender == Sender::Bot)
            .map(|m| m.text.as_str())
            .collect()
    }

    #[test]
    fn without_discord_the_username_step_is_skipped() {
        let mut session = ChatSession::new();
        let (visited, submitted) =
            run(&mut session, &["hi", "Jane", "jane@x.com", "no", "my widget is broken"]);

        assert_eq!(
            visited,
            vec![
                ChatStep::Welcome,
                ChatStep::Name,
                ChatStep::Email,
                ChatStep::Discord,
                ChatStep::Problem,
                ChatStep::Submitting,
            ]
        );
        assert!(!visited.contains(&ChatStep::DiscordUsername));

        let answers = submitted.expect("problem step should trigger a submit").answers;
        assert_eq!(answers.name, "Jane");
        assert_eq!(answers.email, "jane@x.com");
        assert_eq!(answers.problem, "my widget is broken");
        assert_eq!(answers.discord_username, None);

        let embed = answers.to_embed("ts".to_string());
        let discord = embed.fields.iter().find(|f| f.name == "Discord").unwrap();
        assert_eq!(discord.value, "No");
    }

    #[test]
    fn with_discord_one_extra_prompt_and_username_in_payload() {
        let mut without = ChatSession::new();
        run(&mut without, &["hi", "Jane", "jane@x.com", "no", "my widget is broken"]);

        let mut with = ChatSession::new();
        let (visited, submitted) = run(
            &mut with,
            &["hi", "Jane", "jane@x.com", "yes", "jane#1234", "my widget is broken"],
        );

        assert!(visited.contains(&ChatStep::DiscordUsername));
        assert_eq!(bot_lines(&with).len(), bot_lines(&without).len() + 1);
        let asked = bot_lines(&with)
            .into_iter()
            .filter(|line| *line == ASK_DISCORD_USERNAME)
            .count();
        assert_eq!(asked, 1);

        let answers = submitted.unwrap().answers;
        assert_eq!(answers.discord_username.as_deref(), Some("jane#1234"));
        let embed = answers.to_embed("ts".to_string());
        let discord = embed.fields.iter().find(|f| f.name == "Discord").unwrap();
        assert!(discord.value.contains("jane#1234"));
    }

    #[test]
    fn discord_answer_matches_yes_anywhere_ignoring_case() {
        assert_eq!(transition(ChatStep::Discord, "YES"), ChatStep::DiscordUsername);
        assert_eq!(transition(ChatStep::Discord, "oh yes I do"), ChatStep::DiscordUsername);
        assert_eq!(transition(ChatStep::Discord, "yep"), ChatStep::Problem);
        assert_eq!(transition(ChatStep::Discord, "nope"), ChatStep::Problem);
    }

    #[test]
    fn each_answer_adds_one_user_and_one_bot_message() {
        let mut session = ChatSession::new();
        assert_eq!(session.transcript().len(), 1);

        session.submit("hi");
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript()[1].sender, Sender::User);
        assert_eq!(session.transcript()[1].text, "hi");
        assert_eq!(session.transcript()[2].sender, Sender::Bot);
        assert_eq!(session.transcript()[2].text, ASK_NAME);

        session.submit("Jane");
        assert_eq!(session.transcript()[4].text, "Thanks, Jane! What's your email address?");
    }

    #[test]
    fn blank_input_changes_nothing() {
        let mut session = ChatSession::new();
        session.submit("hi");
        let before = session.clone();

        assert_eq!(session.submit(""), None);
        assert_eq!(session.submit("   \t"), None);
        assert_eq!(session, before);
    }

    #[test]
    fn input_is_ignored_once_questions_are_done() {
        let mut session = ChatSession::new();
        let (_, submitted) = run(&mut session, &FULL_RUN);
        assert_eq!(session.step(), ChatStep::Submitting);
        let len = session.transcript().len();

        assert_eq!(session.submit("hello?"), None);
        assert_eq!(session.transcript().len(), len);

        session.finish(submitted.unwrap().ticket, Ok(()));
        assert_eq!(session.submit("anyone?"), None);
        assert_eq!(session.step(), ChatStep::Complete);
    }

    #[test]
    fn success_and_failure_share_the_terminal_step() {
        let mut ok = ChatSession::new();
        let (_, submitted) = run(&mut ok, &FULL_RUN);
        ok.finish(submitted.unwrap().ticket, Ok(()));
        assert_eq!(ok.step(), ChatStep::Complete);
        assert_eq!(ok.transcript().last().unwrap().text, DELIVERED);

        let mut failed = ChatSession::new();
        let (_, submitted) = run(&mut failed, &FULL_RUN);
        failed.finish(submitted.unwrap().ticket, Err(WebhookError::Status(400)));
        assert_eq!(failed.step(), ChatStep::Complete);
        let last = &failed.transcript().last().unwrap().text;
        assert!(last.starts_with("Sorry"));
        assert!(last.contains(SITE.contact_email));
    }

    #[test]
    fn finish_outside_submitting_is_a_no_op() {
        let mut session = ChatSession::new();
        session.finish(Ticket(0), Ok(()));
        assert_eq!(session, ChatSession::new());
    }

    #[test]
    fn reset_restores_the_initial_session() {
        let mut session = ChatSession::new();
        let (_, submitted) = run(&mut session, &["hi", "Jane", "jane@x.com", "yes", "jane#1", "broken"]);
        session.finish(submitted.unwrap().ticket, Ok(()));

        session.reset();
        let fresh = ChatSession::new();
        assert_eq!(session.step(), ChatStep::Welcome);
        assert_eq!(session.transcript(), fresh.transcript());
        assert_eq!(session.answers(), fresh.answers());
        assert!(session.accepts_input());
    }

    #[test]
    fn result_from_before_a_reset_does_not_touch_the_new_session() {
        let mut session = ChatSession::new();
        let (_, first) = run(&mut session, &FULL_RUN);
        let first = first.unwrap();

        session.reset();
        let (_, second) = run(&mut session, &FULL_RUN);
        let second = second.unwrap();
        assert_ne!(first.ticket, second.ticket);

        session.finish(first.ticket, Err(WebhookError::Status(500)));
        assert_eq!(session.step(), ChatStep::Submitting);
        assert_eq!(session.transcript().last().unwrap().text, SENDING);

        session.finish(second.ticket, Ok(()));
        assert_eq!(session.step(), ChatStep::Complete);
        assert_eq!(session.transcript().last().unwrap().text, DELIVERED);
    }

    #[test]
    fn result_arriving_mid_questionnaire_after_reset_is_dropped() {
        let mut session = ChatSession::new();
        let (_, first) = run(&mut session, &FULL_RUN);

        session.reset();
        session.submit("hi");
        let before = session.clone();

        session.finish(first.unwrap().ticket, Ok(()));
        assert_eq!(session, before);
    }
}
