use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result};

pub const MIN_AGENTS: u8 = 1;
pub const MAX_AGENTS: u8 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeGenRequest {
    /// Agent framework, e.g. LangChain, CrewAI, Google ADK
    pub framework: String,
    /// LLM model identifier passed through to the completion API
    pub model: String,
    /// Overall goal or role description for the agent(s)
    pub goal: String,
    #[serde(default = "default_num_agents")]
    pub num_agents: u8,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub memory: Option<String>,
}

fn default_num_agents() -> u8 {
    1
}

impl CodeGenRequest {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_AGENTS..=MAX_AGENTS).contains(&self.num_agents) {
            return Err(PortalError::InvalidRequest(format!(
                "num_agents must be between {} and {}, got {}",
                MIN_AGENTS, MAX_AGENTS, self.num_agents
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeGenResponse {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}
