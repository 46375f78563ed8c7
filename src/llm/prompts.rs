use crate::models::CodeGenRequest;

pub const CODEGEN_SYSTEM: &str = "You write production-quality Python for agent frameworks.";
pub const EXPLAIN_SYSTEM: &str = "You are a helpful educator who explains Python agent code.";

/// Builds the code-generation prompt from the request fields.
pub fn build_codegen_prompt(req: &CodeGenRequest) -> String {
    let tools_text = if req.tools.is_empty() {
        "none".to_string()
    } else {
        req.tools.join(", ")
    };
    let memory_text = req.memory.as_deref().unwrap_or("none");

    format!(
        "You are an expert agentic AI developer educator. \
         Generate clean, idiomatic Python code with inline comments that sets up the requested agent framework. \
         Constraints: No placeholders for API keys other than environment variables, \
         runnable as-is when keys are set, and include a minimal example run.\n\n\
         Framework: {}\n\
         LLM Model: {}\n\
         Goal/Role: {}\n\
         Number of agents: {}\n\
         Tools: {}\n\
         Memory: {}\n\n\
         Output only Python code inside one block; no extra explanations.",
        req.framework, req.model, req.goal, req.num_agents, tools_text, memory_text
    )
}

/// Builds the explanation prompt, fencing the submitted code.
pub fn build_explain_prompt(code: &str) -> String {
    format!(
        "Explain the following Python code for an educational audience. \
         Use clear sections, bullet points, and mention how to run it.\n\n\
         ```python\n{}\n```",
        code
    )
}
