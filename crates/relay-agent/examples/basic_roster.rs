//! Basic roster example
//!
//! This example wires two agents and a calculator tool into a roster, then
//! plays a short scripted conversation through a text sink.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example basic_roster
//! ```

use async_trait::async_trait;
use relay_agent::prelude::*;
use relay_agent::tool::FunctionTool;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy)]
enum Desk {
    Greeter,
    Math,
}

#[async_trait]
impl Agent for Desk {
    fn name(&self) -> &str {
        match self {
            Desk::Greeter => "GreeterAgent",
            Desk::Math => "MathAgent",
        }
    }

    fn description(&self) -> &str {
        match self {
            Desk::Greeter => "I'll say hello and point you to the right desk!",
            Desk::Math => "I'll handle the arithmetic!",
        }
    }

    fn capabilities(&self) -> &'static [&'static str] {
        match self {
            Desk::Greeter => &["hello", "hi"],
            Desk::Math => &["add", "multiply", "sum"],
        }
    }

    fn tools(&self) -> &'static [ToolBinding] {
        match self {
            Desk::Greeter => &[],
            Desk::Math => &[ToolBinding { tool: "calculator", triggers: &["add", "multiply"] }],
        }
    }

    fn tool_args(&self, _tool: &str, text: &str, _history: &History) -> Value {
        let numbers: Vec<f64> = text
            .split_whitespace()
            .filter_map(|w| w.parse().ok())
            .collect();
        let operation = if text.contains("multiply") { "multiply" } else { "add" };
        json!({ "operation": operation, "numbers": numbers })
    }

    async fn handle(&self, _ctx: &AgentContext<'_>, text: &str, _history: &History) -> Result<Reply> {
        Ok(Reply::text(format!("You said: {}", text)))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let calculator = FunctionTool::builder("calculator")
        .description("Adds or multiplies a list of numbers")
        .schema(json!({
            "type": "object",
            "properties": {
                "operation": { "type": "string", "enum": ["add", "multiply"] },
                "numbers": { "type": "array", "items": { "type": "number" } }
            },
            "required": ["operation", "numbers"]
        }))
        .handler(|args| {
            let numbers: Vec<f64> = args["numbers"]
                .as_array()
                .map(|a| a.iter().filter_map(Value::as_f64).collect())
                .unwrap_or_default();
            let result: f64 = match args["operation"].as_str() {
                Some("multiply") => numbers.iter().product(),
                _ => numbers.iter().sum(),
            };
            Ok(result.to_string())
        })
        .build()?;

    let mut tools = ToolRegistry::new();
    tools.register(calculator)?;

    let roster = Roster::builder()
        .agents([Desk::Greeter, Desk::Math])
        .tools(tools)
        .build()?
        .into_shared();

    let mut session = Session::new(roster);
    let mut source = ScriptSource::new(["hello there", "please add 2 3 4", "multiply 6 7", "thanks!"]);
    let mut sink = TextSink::new(std::io::stdout());

    session.run(&mut source, &mut sink).await?;

    println!("\n=== History ===");
    println!("{}", session.history().to_json()?);

    Ok(())
}
