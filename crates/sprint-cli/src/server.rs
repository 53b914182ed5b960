use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use sprint_core::generate_plan;

use crate::config::{Config, OutputFormat};
use crate::output::{catalog_output, plan_output};
use crate::request::{PlanRequest, validate_days};

/// MCP server exposing the planner. Stateless apart from configuration:
/// every call builds its plan from scratch.
#[derive(Clone)]
pub struct SprintServer {
    config: Arc<Config>,
    tool_router: ToolRouter<Self>,
}

impl SprintServer {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct GenerateRequest {
    /// What the learner wants to master, e.g. "Rust" or "watercolor painting"
    topic: String,
    /// Sprint length in days, 1 to 365. Defaults to the configured day count.
    days: Option<f64>,
    /// Output format: "json" (default), "markdown" or "text"
    format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PhasesRequest {
    /// Output format: "json" (default), "markdown" or "text"
    format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CheckDaysRequest {
    /// Candidate sprint length in days
    days: f64,
}

#[tool_router]
impl SprintServer {
    #[tool(
        description = "Generate a day-by-day learning plan for a topic. The days are split into four phases (Discover, Practice, Build, Polish) at roughly 25/35/25/15 percent. Each day has a focus sentence, an energy level (Deep, Medium, Light), activities and, on a phase's last day, a milestone. Output is deterministic for the same topic and day count."
    )]
    async fn plan_generate(
        &self,
        Parameters(req): Parameters<GenerateRequest>,
    ) -> Result<CallToolResult, McpError> {
        let days = req.days.unwrap_or(f64::from(self.config.default_days));
        let request = PlanRequest::new(&req.topic, days)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let plan = generate_plan(&request.topic, i64::from(request.days));
        tracing::debug!(
            topic = %plan.topic,
            days = plan.total_days,
            phases = plan.phases.len(),
            "generated plan"
        );

        let text = plan_output(&plan, req.format.unwrap_or(OutputFormat::Json))
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "List the four learning phases with their nominal share of the sprint, summary, milestone and activity pools.")]
    async fn plan_phases(
        &self,
        Parameters(req): Parameters<PhasesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = catalog_output(req.format.unwrap_or(OutputFormat::Json))
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Check whether a day count is accepted (1 to 365) and what it rounds to.")]
    async fn plan_check_days(
        &self,
        Parameters(req): Parameters<CheckDaysRequest>,
    ) -> Result<CallToolResult, McpError> {
        let body = match validate_days(req.days) {
            Ok(days) => serde_json::json!({ "valid": true, "days": days }),
            Err(e) => serde_json::json!({ "valid": false, "error": e.to_string() }),
        };
        let text = serde_json::to_string_pretty(&body)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for SprintServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Learning sprint planner.\n\n\
                 Call plan_generate with the learner's topic and the number of days they have \
                 (1 to 365) to get a phased, day-by-day plan. Call plan_phases to explain the \
                 phase structure. Plans are deterministic: the same topic and day count always \
                 give the same plan, so there is no need to regenerate for consistency."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
