//! In-memory assistant service.

use async_trait::async_trait;
use picturebook_core::{
    ContentPart, ConversationId, MessageId, PersonaId, PersonaSpec, Role, RunId, RunStatus,
    ThreadMessage,
};
use picturebook_error::{ApiError, ApiErrorKind, PicturebookResult};
use picturebook_interface::AssistantBackend;
use std::collections::VecDeque;
use std::sync::Mutex;

/// How each run behaves once started.
#[derive(Debug, Clone)]
pub enum RunBehavior {
    /// Report pending this many times, then complete
    Complete { pending_polls: usize },
    /// End with the given raw status
    Fail(String),
    /// Stay pending forever
    NeverComplete,
}

/// Which setup call should be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFailure {
    Persona,
    Conversation,
}

#[derive(Default)]
struct State {
    /// Oldest first, as the service stores them
    messages: Vec<ThreadMessage>,
    replies: VecDeque<Vec<String>>,
    next_id: usize,
    posted: Vec<String>,
    runs_started: usize,
    polls_for_current_run: usize,
    run_in_flight: bool,
    reads_during_run: usize,
    personas: Vec<PersonaSpec>,
}

/// Assistant service that answers each run with scripted replies.
///
/// A reply is appended to the conversation only when the run reports
/// completion, so reading early shows nothing.
pub struct MockAssistant {
    behavior: RunBehavior,
    setup_failure: Option<SetupFailure>,
    state: Mutex<State>,
}

impl MockAssistant {
    /// Each entry answers one run with a single assistant message.
    pub fn with_replies<I, T>(replies: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::with_multi_replies(replies.into_iter().map(|reply| vec![reply.into()]))
    }

    /// Each entry answers one run with several assistant messages.
    pub fn with_multi_replies<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let state = State {
            replies: replies.into_iter().collect(),
            ..State::default()
        };
        Self {
            behavior: RunBehavior::Complete { pending_polls: 0 },
            setup_failure: None,
            state: Mutex::new(state),
        }
    }

    /// Change how runs behave.
    pub fn with_behavior(mut self, behavior: RunBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Refuse one of the setup calls.
    pub fn with_setup_failure(mut self, failure: SetupFailure) -> Self {
        self.setup_failure = Some(failure);
        self
    }

    /// Append a message directly, as another client of the conversation would.
    pub fn push_message(&self, role: Role, content: Vec<ContentPart>) -> MessageId {
        let mut state = self.state.lock().unwrap();
        push(&mut state, role, content)
    }

    /// Contents of every user turn posted, in order.
    pub fn posted(&self) -> Vec<String> {
        self.state.lock().unwrap().posted.clone()
    }

    /// Number of runs started.
    pub fn runs_started(&self) -> usize {
        self.state.lock().unwrap().runs_started
    }

    /// Times messages were listed while a run was still in flight.
    pub fn reads_during_run(&self) -> usize {
        self.state.lock().unwrap().reads_during_run
    }

    /// Personas created so far.
    pub fn personas(&self) -> Vec<PersonaSpec> {
        self.state.lock().unwrap().personas.clone()
    }

    /// Full conversation, oldest first.
    pub fn messages(&self) -> Vec<ThreadMessage> {
        self.state.lock().unwrap().messages.clone()
    }
}

fn push(state: &mut State, role: Role, content: Vec<ContentPart>) -> MessageId {
    state.next_id += 1;
    let id = MessageId::from(format!("msg_{:03}", state.next_id));
    state.messages.push(ThreadMessage {
        id: id.clone(),
        role,
        content,
    });
    id
}

fn refused(what: &str) -> ApiError {
    ApiError::new(ApiErrorKind::Status {
        status: 500,
        message: format!("{} creation refused", what),
    })
}

#[async_trait]
impl AssistantBackend for MockAssistant {
    async fn create_persona(&self, spec: &PersonaSpec) -> PicturebookResult<PersonaId> {
        if self.setup_failure == Some(SetupFailure::Persona) {
            return Err(refused("assistant").into());
        }
        self.state.lock().unwrap().personas.push(spec.clone());
        Ok(PersonaId::from("asst_mock"))
    }

    async fn create_conversation(&self) -> PicturebookResult<ConversationId> {
        if self.setup_failure == Some(SetupFailure::Conversation) {
            return Err(refused("thread").into());
        }
        Ok(ConversationId::from("thread_mock"))
    }

    async fn post_message(
        &self,
        _conversation: &ConversationId,
        role: Role,
        content: &str,
    ) -> PicturebookResult<MessageId> {
        let mut state = self.state.lock().unwrap();
        assert!(!state.run_in_flight, "message posted while a run is in flight");
        state.posted.push(content.to_string());
        Ok(push(&mut state, role, vec![ContentPart::Text(content.to_string())]))
    }

    async fn start_run(
        &self,
        _conversation: &ConversationId,
        _persona: &PersonaId,
    ) -> PicturebookResult<RunId> {
        let mut state = self.state.lock().unwrap();
        state.runs_started += 1;
        state.polls_for_current_run = 0;
        state.run_in_flight = true;
        Ok(RunId::from(format!("run_{}", state.runs_started)))
    }

    async fn get_run_status(
        &self,
        _conversation: &ConversationId,
        _run: &RunId,
    ) -> PicturebookResult<RunStatus> {
        let mut state = self.state.lock().unwrap();
        state.polls_for_current_run += 1;

        match &self.behavior {
            RunBehavior::NeverComplete => Ok(RunStatus::Pending),
            RunBehavior::Fail(status) => {
                state.run_in_flight = false;
                Ok(RunStatus::Failed(status.clone()))
            }
            RunBehavior::Complete { pending_polls } => {
                if state.polls_for_current_run <= *pending_polls {
                    return Ok(RunStatus::Pending);
                }
                if state.run_in_flight {
                    state.run_in_flight = false;
                    let reply = state.replies.pop_front().unwrap_or_default();
                    for text in reply {
                        push(&mut state, Role::Assistant, vec![ContentPart::Text(text)]);
                    }
                }
                Ok(RunStatus::Completed)
            }
        }
    }

    async fn list_messages(
        &self,
        _conversation: &ConversationId,
    ) -> PicturebookResult<Vec<ThreadMessage>> {
        let mut state = self.state.lock().unwrap();
        if state.run_in_flight {
            state.reads_during_run += 1;
        }
        Ok(state.messages.iter().rev().cloned().collect())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
