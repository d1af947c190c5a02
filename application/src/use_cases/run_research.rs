//! Run Research use case.
//!
//! Drives exactly one agent through one [`ResearchTask`]: a session is
//! created with the agent's persona as system prompt, the task message goes
//! out with the agent's tool declarations, and the native tool-use loop runs
//! until the model produces a final answer.
//!
//! The reasoning itself — whether to search, what to search for, how to
//! synthesize — belongs to the model. This use case only ferries tool calls
//! to the executor and tool results back, and converts the outcome to plain
//! text.

use crate::config::ExecutionParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, ToolResultMessage};
use crate::ports::research_runner::{ExecutionFailed, ResearchRunner};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use async_trait::async_trait;
use scout_domain::util::truncate_str;
use scout_domain::ResearchTask;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a research run.
#[derive(Error, Debug)]
pub enum RunResearchError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("No response from model")]
    EmptyResponse,
}

/// Use case for running one research task.
///
/// Executes the flow:
/// 1. Create session with the agent's model and system prompt
/// 2. Send the task message with the agent's allowed tools
/// 3. Multi-turn tool loop, bounded by `max_tool_turns`
/// 4. Return the final text block as the answer
pub struct RunResearchUseCase {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
    execution: ExecutionParams,
}

impl RunResearchUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            gateway,
            tool_executor,
            tool_schema,
            conversation_logger: Arc::new(NoConversationLogger),
            execution: ExecutionParams::default(),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Create with custom execution parameters.
    pub fn with_execution_params(mut self, execution: ExecutionParams) -> Self {
        self.execution = execution;
        self
    }

    /// Execute the research task and return the final answer text.
    pub async fn execute(&self, task: ResearchTask) -> Result<String, RunResearchError> {
        info!(
            "Starting research run: {}",
            truncate_str(&task.description, 100)
        );

        // Create session with the agent's persona as system prompt
        let session = self
            .gateway
            .create_session_with_system_prompt(&task.agent.model, &task.agent.system_prompt())
            .await?;

        // Declare only the tools this agent is allowed to use
        let tools = self
            .tool_schema
            .allowed_tools_schema(self.tool_executor.tool_spec(), &task.agent.allowed_tools);

        debug!(
            "Research: model {}, {} tools available",
            task.agent.model,
            tools.len()
        );

        // Initial request
        let mut response = session
            .send_with_tools(&task.to_message(), &tools)
            .await
            .map_err(RunResearchError::GatewayError)?;

        let mut all_text = Vec::new();
        let text = response.text_content();
        if !text.is_empty() {
            all_text.push(text);
        }

        // Multi-turn tool loop
        let max_turns = self.execution.max_tool_turns;
        let mut turn_count = 0;

        loop {
            let tool_calls = response.tool_calls();

            if tool_calls.is_empty() {
                break;
            }

            turn_count += 1;
            if turn_count > max_turns {
                warn!("Research tool loop exceeded max_tool_turns ({})", max_turns);
                break;
            }

            // Execute all requested calls concurrently
            let futures: Vec<_> = tool_calls
                .iter()
                .map(|call| self.tool_executor.execute(call))
                .collect();
            let results: Vec<_> = futures::future::join_all(futures).await;

            let mut tool_result_messages = Vec::new();
            for (call, result) in tool_calls.iter().zip(results) {
                let is_error = !result.is_success();
                let output = if is_error {
                    result
                        .error()
                        .map(|e| e.message.clone())
                        .unwrap_or_else(|| "Unknown error".to_string())
                } else {
                    result.output().unwrap_or("").to_string()
                };

                self.conversation_logger.log(ConversationEvent::new(
                    "tool_call",
                    serde_json::json!({
                        "tool": call.tool_name,
                        "args": call.arguments,
                        "ok": !is_error,
                        "bytes": output.len(),
                    }),
                ));

                if let Some(native_id) = call.native_id.clone() {
                    tool_result_messages.push(ToolResultMessage {
                        tool_use_id: native_id,
                        tool_name: call.tool_name.clone(),
                        output,
                        is_error,
                    });
                } else {
                    warn!(
                        "Missing native_id for tool call '{}'; skipping result.",
                        call.tool_name
                    );
                }
            }

            // Send tool results back to the model
            debug!(
                "Research tool turn {}/{}: sending {} tool results",
                turn_count,
                max_turns,
                tool_result_messages.len()
            );

            response = session
                .send_tool_results(&tool_result_messages)
                .await
                .map_err(RunResearchError::GatewayError)?;

            let text = response.text_content();
            if !text.is_empty() {
                all_text.push(text);
            }
        }

        // The last text block is the answer — intermediate texts
        // (e.g. "Let me check...") are discarded.
        let answer = all_text.pop().unwrap_or_default();
        if answer.is_empty() {
            return Err(RunResearchError::EmptyResponse);
        }

        info!("Research completed in {} tool turns", turn_count);

        self.conversation_logger.log(ConversationEvent::new(
            "research_answer",
            serde_json::json!({
                "model": task.agent.model.to_string(),
                "tool_turns": turn_count,
                "bytes": answer.len(),
                "text": answer,
            }),
        ));

        Ok(answer)
    }
}

#[async_trait]
impl ResearchRunner for RunResearchUseCase {
    /// Run the task, flattening every failure into [`ExecutionFailed`].
    async fn run(&self, task: ResearchTask) -> Result<String, ExecutionFailed> {
        self.execute(task)
            .await
            .map_err(|e| ExecutionFailed::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::LlmSession;
    use scout_domain::session::response::{ContentBlock, LlmResponse, StopReason};
    use scout_domain::tool::entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
    use scout_domain::tool::value_objects::{ToolError, ToolResult};
    use scout_domain::{Model, Question, ResearchTask, ResearcherProfile};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockSession {
        model: Model,
        responses: Mutex<VecDeque<LlmResponse>>,
    }

    impl MockSession {
        fn new(responses: Vec<LlmResponse>) -> Self {
            Self {
                model: Model::default(),
                responses: Mutex::new(VecDeque::from(responses)),
            }
        }

        fn next(&self) -> Result<LlmResponse, GatewayError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| GatewayError::Other("No more responses".to_string()))
        }
    }

    #[async_trait]
    impl LlmSession for MockSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, _content: &str) -> Result<String, GatewayError> {
            self.next().map(|r| r.text_content())
        }

        async fn send_with_tools(
            &self,
            _content: &str,
            _tools: &[serde_json::Value],
        ) -> Result<LlmResponse, GatewayError> {
            self.next()
        }

        async fn send_tool_results(
            &self,
            _results: &[ToolResultMessage],
        ) -> Result<LlmResponse, GatewayError> {
            self.next()
        }
    }

    struct MockGateway {
        session: Mutex<Option<Box<dyn LlmSession>>>,
    }

    impl MockGateway {
        fn new(session: impl LlmSession + 'static) -> Self {
            Self {
                session: Mutex::new(Some(Box::new(session))),
            }
        }

        fn failing() -> Self {
            Self {
                session: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn create_session(
            &self,
            model: &Model,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            self.create_session_with_system_prompt(model, "").await
        }

        async fn create_session_with_system_prompt(
            &self,
            _model: &Model,
            _system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            self.session
                .lock()
                .unwrap()
                .take()
                .ok_or_else(|| GatewayError::ConnectionError("gateway down".to_string()))
        }
    }

    struct MockToolExecutor {
        spec: ToolSpec,
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockToolExecutor {
        fn new() -> Self {
            Self {
                spec: ToolSpec::new().register(
                    ToolDefinition::new("web_search", "Search the web")
                        .with_parameter(ToolParameter::new("query", "The search query", true)),
                ),
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ToolExecutorPort for MockToolExecutor {
        fn tool_spec(&self) -> &ToolSpec {
            &self.spec
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                ToolResult::failure(
                    &call.tool_name,
                    ToolError::execution_failed("search provider unreachable"),
                )
            } else {
                ToolResult::success(&call.tool_name, "mock search results")
            }
        }
    }

    struct MockToolSchema;

    impl ToolSchemaPort for MockToolSchema {
        fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
            serde_json::json!({
                "name": tool.name,
                "description": tool.description,
                "input_schema": { "type": "object", "properties": {}, "required": [] }
            })
        }

        fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
            let mut tools: Vec<_> = spec.all().collect();
            tools.sort_by_key(|t| &t.name);
            tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
        }

        fn allowed_tools_schema(
            &self,
            spec: &ToolSpec,
            allowed_names: &[String],
        ) -> Vec<serde_json::Value> {
            let mut tools: Vec<_> = spec.allowed(allowed_names).collect();
            tools.sort_by_key(|t| &t.name);
            tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
        }
    }

    fn text_response(text: &str) -> LlmResponse {
        LlmResponse {
            content: vec![ContentBlock::Text(text.to_string())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    fn search_response(native_id: &str) -> LlmResponse {
        LlmResponse {
            content: vec![ContentBlock::ToolUse {
                id: native_id.to_string(),
                name: "web_search".to_string(),
                input: [("query".to_string(), serde_json::json!("test query"))]
                    .into_iter()
                    .collect(),
            }],
            stop_reason: Some(StopReason::ToolUse),
            model: None,
        }
    }

    fn task(question: &str) -> ResearchTask {
        ResearchTask::for_question(
            &Question::new(question),
            ResearcherProfile::web_researcher(Model::default()),
        )
    }

    fn use_case(
        gateway: MockGateway,
        executor: Arc<MockToolExecutor>,
    ) -> RunResearchUseCase {
        RunResearchUseCase::new(Arc::new(gateway), executor, Arc::new(MockToolSchema))
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_direct_answer_without_search() {
        let session = MockSession::new(vec![text_response("The answer is 4.")]);
        let executor = Arc::new(MockToolExecutor::new());
        let uc = use_case(MockGateway::new(session), executor.clone());

        let answer = uc.execute(task("What is 2+2?")).await.unwrap();

        assert_eq!(answer, "The answer is 4.");
        assert_eq!(executor.call_count(), 0);
    }

    #[tokio::test]
    async fn test_answer_after_search() {
        let session = MockSession::new(vec![
            search_response("call_1"),
            text_response("According to the results, X won."),
        ]);
        let executor = Arc::new(MockToolExecutor::new());
        let uc = use_case(MockGateway::new(session), executor.clone());

        let answer = uc.execute(task("Who won?")).await.unwrap();

        assert_eq!(answer, "According to the results, X won.");
        assert_eq!(executor.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_search_is_returned_to_model() {
        // The tool fails; the model still gets the error back and answers.
        let session = MockSession::new(vec![
            search_response("call_1"),
            text_response("I could not verify this, but the likely answer is Y."),
        ]);
        let executor = Arc::new(MockToolExecutor::failing());
        let uc = use_case(MockGateway::new(session), executor.clone());

        let answer = uc.execute(task("Current status?")).await.unwrap();

        assert_eq!(executor.call_count(), 1);
        assert!(answer.contains("likely answer"));
    }

    #[tokio::test]
    async fn test_respects_max_tool_turns() {
        let mut responses = vec![search_response("call_0")];
        for i in 1..15 {
            responses.push(LlmResponse {
                content: vec![
                    ContentBlock::Text(format!("Still searching ({})...", i)),
                    ContentBlock::ToolUse {
                        id: format!("call_{}", i),
                        name: "web_search".to_string(),
                        input: [("query".to_string(), serde_json::json!("more"))]
                            .into_iter()
                            .collect(),
                    },
                ],
                stop_reason: Some(StopReason::ToolUse),
                model: None,
            });
        }

        let session = MockSession::new(responses);
        let executor = Arc::new(MockToolExecutor::new());
        let uc = use_case(MockGateway::new(session), executor.clone())
            .with_execution_params(ExecutionParams::default().with_max_tool_turns(3));

        let answer = uc.execute(task("Deep question")).await.unwrap();

        // The loop stops after 3 turns; the last text seen is the answer
        assert!(answer.contains("Still searching (3)..."));
    }

    #[tokio::test]
    async fn test_empty_response_is_error() {
        let session = MockSession::new(vec![LlmResponse {
            content: vec![],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }]);
        let executor = Arc::new(MockToolExecutor::new());
        let uc = use_case(MockGateway::new(session), executor);

        let result = uc.execute(task("Hello?")).await;
        assert!(matches!(result, Err(RunResearchError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_gateway_failure_becomes_execution_failed() {
        let executor = Arc::new(MockToolExecutor::new());
        let uc = use_case(MockGateway::failing(), executor);

        let result = ResearchRunner::run(&uc, task("Anything")).await;

        let err = result.unwrap_err();
        assert!(err.message().contains("gateway down"));
    }
}
