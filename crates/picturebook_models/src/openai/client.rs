//! OpenAI HTTP client.

use crate::openai::conversion;
use crate::openai::dto::{
    CreateAssistantRequest, CreateMessageRequest, CreateRunRequest, ErrorEnvelope,
    ImageGenerationRequest, ImageGenerationResponse, MessageList, ObjectRef, RunObject,
};
use async_trait::async_trait;
use picturebook_core::{
    ConversationId, ImageRequest, MessageId, PersonaId, PersonaSpec, Role, RunId, RunStatus,
    ThreadMessage,
};
use picturebook_error::{ApiError, ApiErrorKind, PicturebookResult};
use picturebook_interface::{AssistantBackend, ImageBackend};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Beta header required by the Assistants v2 endpoints.
const ASSISTANTS_BETA: &str = "assistants=v2";

/// Largest page the messages endpoint serves.
const MESSAGE_PAGE_LIMIT: u32 = 100;

/// Client for the OpenAI Assistants v2 and Images APIs.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Creates a client reading the API key from an environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or empty.
    #[instrument(skip_all, fields(api_key_env))]
    pub fn from_env(api_key_env: &str, base_url: impl Into<String>) -> PicturebookResult<Self> {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ApiError::new(ApiErrorKind::MissingApiKey(format!(
                    "{} is not set",
                    api_key_env
                )))
            })?;

        Ok(Self::with_api_key(api_key, base_url))
    }

    /// Creates a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", ASSISTANTS_BETA)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> PicturebookResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(url = %url, "Sending POST request");
        let request = self.authorized(self.client.post(&url)).json(body);
        Self::send(request).await
    }

    async fn get<R>(&self, path: &str) -> PicturebookResult<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(url = %url, "Sending GET request");
        let request = self.authorized(self.client.get(&url));
        Self::send(request).await
    }

    async fn send<R>(request: RequestBuilder) -> PicturebookResult<R>
    where
        R: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::new(ApiErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => error_message(body),
                Err(e) => format!("failed to read error body: {}", e),
            };
            return Err(ApiError::new(ApiErrorKind::Status {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ApiError::new(ApiErrorKind::Decode(e.to_string())).into())
    }
}

/// The service's own error message when the body is an error envelope,
/// otherwise the raw body.
fn error_message(body: String) -> String {
    serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or(body)
}

#[async_trait]
impl AssistantBackend for OpenAIClient {
    #[instrument(skip(self, spec), fields(name = %spec.name(), model = %spec.model()))]
    async fn create_persona(&self, spec: &PersonaSpec) -> PicturebookResult<PersonaId> {
        let body = CreateAssistantRequest {
            name: spec.name().clone(),
            instructions: spec.instructions().clone(),
            model: spec.model().clone(),
        };
        let created: ObjectRef = self.post("assistants", &body).await?;
        debug!(assistant_id = %created.id, "Created assistant");
        Ok(PersonaId::from(created.id))
    }

    #[instrument(skip(self))]
    async fn create_conversation(&self) -> PicturebookResult<ConversationId> {
        let created: ObjectRef = self.post("threads", &serde_json::json!({})).await?;
        debug!(thread_id = %created.id, "Created thread");
        Ok(ConversationId::from(created.id))
    }

    #[instrument(skip(self, content), fields(%conversation, %role, content_len = content.len()))]
    async fn post_message(
        &self,
        conversation: &ConversationId,
        role: Role,
        content: &str,
    ) -> PicturebookResult<MessageId> {
        let body = CreateMessageRequest {
            role,
            content: content.to_string(),
        };
        let created: ObjectRef = self
            .post(&format!("threads/{}/messages", conversation), &body)
            .await?;
        Ok(MessageId::from(created.id))
    }

    #[instrument(skip(self), fields(%conversation, %persona))]
    async fn start_run(
        &self,
        conversation: &ConversationId,
        persona: &PersonaId,
    ) -> PicturebookResult<RunId> {
        let body = CreateRunRequest {
            assistant_id: persona.to_string(),
        };
        let run: RunObject = self
            .post(&format!("threads/{}/runs", conversation), &body)
            .await?;
        debug!(run_id = %run.id(), status = ?run.status(), "Started run");
        Ok(RunId::from(run.id().as_str()))
    }

    #[instrument(skip(self), fields(%conversation, %run))]
    async fn get_run_status(
        &self,
        conversation: &ConversationId,
        run: &RunId,
    ) -> PicturebookResult<RunStatus> {
        let current: RunObject = self
            .get(&format!("threads/{}/runs/{}", conversation, run))
            .await?;
        Ok(conversion::run_status(*current.status()))
    }

    #[instrument(skip(self), fields(%conversation))]
    async fn list_messages(
        &self,
        conversation: &ConversationId,
    ) -> PicturebookResult<Vec<ThreadMessage>> {
        let list: MessageList = self
            .get(&format!(
                "threads/{}/messages?order=desc&limit={}",
                conversation, MESSAGE_PAGE_LIMIT
            ))
            .await?;
        debug!(count = list.data().len(), has_more = list.has_more(), "Listed messages");
        Ok(list.data().iter().map(conversion::thread_message).collect())
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[async_trait]
impl ImageBackend for OpenAIClient {
    #[instrument(skip(self, request), fields(model = %request.model(), size = %request.size()))]
    async fn generate_image(&self, request: &ImageRequest) -> PicturebookResult<Vec<String>> {
        let body = ImageGenerationRequest::builder()
            .model(request.model().clone())
            .prompt(request.prompt().clone())
            .size(request.size().clone())
            .quality(request.quality().clone())
            .n(*request.count())
            .build()
            .map_err(|e| ApiError::new(ApiErrorKind::Request(e.to_string())))?;

        let response: ImageGenerationResponse = self.post("images/generations", &body).await?;
        Ok(response
            .data()
            .iter()
            .filter_map(conversion::image_reference)
            .collect())
    }
}
