//! Mock tools for the demo rosters
//!
//! Every demo gets its own registry. Tools return canned or randomly drawn
//! data; the adventure tools draw from a seedable RNG so scripted runs can be
//! replayed.

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use relay_agent::tool::{str_arg, FunctionTool};
use relay_agent::{RelayError, Result, ToolRegistry};
use serde_json::{json, Value};

pub const LOOT: [&str; 5] = ["Health Potion", "Magic Sword", "Gold Coins", "Armor", "Treasure Map"];

fn tool_error(tool_name: &str, message: impl Into<String>) -> RelayError {
    RelayError::ToolError {
        tool_name: tool_name.to_string(),
        message: message.into(),
    }
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// `get_flights` and `suggest_hotels`
pub fn travel_tools() -> Result<ToolRegistry> {
    let mut tools = ToolRegistry::new();
    let destination = object_schema(json!({ "destination": { "type": "string" } }), &["destination"]);

    tools.register(
        FunctionTool::builder("get_flights")
            .description("List mock flights to a destination")
            .schema(destination.clone())
            .handler(|args| {
                let destination = str_arg(args, "destination", "your destination");
                Ok(format!(
                    "✈️ Flights to {}:\n- AirX: $300\n- FlyJet: $280\n- SkyHigh: $320",
                    destination
                ))
            })
            .build()?,
    )?;

    tools.register(
        FunctionTool::builder("suggest_hotels")
            .description("List mock hotels in a destination")
            .schema(destination)
            .handler(|args| {
                let destination = str_arg(args, "destination", "your destination");
                Ok(format!(
                    "🏨 Hotels in {}:\n- GrandView Hotel: 4⭐ ($120/night)\n- CozyStay Inn: 3⭐ ($80/night)\n- Luxury Suites: 5⭐ ($200/night)",
                    destination
                ))
            })
            .build()?,
    )?;

    Ok(tools)
}

/// Skill roadmap for a canonical career field
pub fn career_roadmap(field: &str) -> String {
    let field = field.to_lowercase();
    if field.contains("software") {
        "🧑‍💻 Software Engineering Roadmap:\n1. Learn Python or Java\n2. Study Data Structures\n3. Build full-stack apps\n4. Version control (Git)\n5. Interview prep".to_string()
    } else if field.contains("data") {
        "📊 Data Science Roadmap:\n1. Python & Statistics\n2. Pandas, NumPy, Scikit-learn\n3. ML Models\n4. Kaggle projects\n5. Portfolio & Jobs".to_string()
    } else if field.contains("medicine") {
        "🩺 Medical Field Roadmap:\n1. Pre-med subjects\n2. Medical entrance tests\n3. MBBS studies\n4. Clinical rotations\n5. Specialization".to_string()
    } else if field.contains("artificial intelligence") {
        "🤖 AI Roadmap:\n1. Python\n2. Deep Learning\n3. NLP\n4. TensorFlow\n5. Ethics".to_string()
    } else if field.contains("web") {
        "🌐 Web Development Roadmap:\n1. HTML\n2. CSS\n3. JavaScript\n4. React\n5. Backend APIs".to_string()
    } else if field.contains("cyber") {
        "🔐 Cybersecurity Roadmap:\n1. Networking\n2. Linux\n3. Penetration Testing\n4. Cryptography".to_string()
    } else {
        format!("⚠️ No roadmap found for '{}'. Try software, data, or medicine.", field)
    }
}

/// `get_career_roadmap`
pub fn career_tools() -> Result<ToolRegistry> {
    let mut tools = ToolRegistry::new();
    tools.register(
        FunctionTool::builder("get_career_roadmap")
            .description("Show the skills needed for a career field")
            .schema(object_schema(json!({ "field": { "type": "string" } }), &["field"]))
            .handler(|args| Ok(career_roadmap(str_arg(args, "field", "unknown"))))
            .build()?,
    )?;
    Ok(tools)
}

fn random_event(rng: &mut StdRng, context: &str) -> String {
    let events: &[&str] = match context.to_lowercase().as_str() {
        "forest" => &[
            "You hear rustling in the bushes. A goblin appears!",
            "You find an ancient tree with glowing runes.",
            "A traveling merchant offers you a mysterious potion.",
        ],
        "dungeon" => &[
            "A trap triggers beneath your feet!",
            "A skeleton warrior blocks your path.",
            "You discover a chest filled with gold... or is it a mimic?",
        ],
        "village" => &[
            "A child runs up to you, asking for help.",
            "The blacksmith offers to upgrade your weapon.",
            "You overhear talk of a dragon nearby.",
        ],
        _ => &[
            "You enter a dark cave...",
            "You find a hidden chest!",
            "A monster appears!",
            "You meet a wandering trader.",
            "Nothing unusual happens...",
        ],
    };
    events
        .choose(rng)
        .copied()
        .unwrap_or("Nothing unusual happens...")
        .to_string()
}

/// Fresh generator for one draw
///
/// With a seed, the draw depends only on the seed and the call's `turn` and
/// `draw` arguments, so a session replays the same way no matter what other
/// sessions on the roster do.
fn rng_for(seed: Option<u64>, args: &Value) -> StdRng {
    let Some(seed) = seed else {
        return StdRng::from_entropy();
    };
    let turn = args.get("turn").and_then(Value::as_u64).unwrap_or(0);
    let draw = args.get("draw").and_then(Value::as_u64).unwrap_or(0);
    StdRng::seed_from_u64(
        seed ^ turn.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ draw.wrapping_mul(0xBF58_476D_1CE4_E5B9),
    )
}

fn draw_properties(mut properties: Value) -> Value {
    if let Some(map) = properties.as_object_mut() {
        map.insert("turn".to_string(), json!({ "type": "integer", "minimum": 0 }));
        map.insert("draw".to_string(), json!({ "type": "integer", "minimum": 0 }));
    }
    properties
}

/// `roll_dice`, `generate_event` and `find_loot`
///
/// The registry keeps only the seed; every call builds its own generator.
pub fn adventure_tools(seed: Option<u64>) -> Result<ToolRegistry> {
    let mut tools = ToolRegistry::new();

    tools.register(
        FunctionTool::builder("roll_dice")
            .description("Roll a die with the given number of sides (default 20)")
            .schema(object_schema(
                draw_properties(json!({ "sides": { "type": "integer", "minimum": 1 } })),
                &[],
            ))
            .handler(move |args| {
                let sides = args.get("sides").and_then(Value::as_u64).unwrap_or(20);
                if sides == 0 {
                    return Err(tool_error("roll_dice", "a die needs at least one side"));
                }
                Ok(rng_for(seed, args).gen_range(1..=sides).to_string())
            })
            .build()?,
    )?;

    tools.register(
        FunctionTool::builder("generate_event")
            .description("Draw a random event for an area: forest, dungeon or village")
            .schema(object_schema(draw_properties(json!({ "context": { "type": "string" } })), &[]))
            .handler(move |args| {
                Ok(random_event(&mut rng_for(seed, args), str_arg(args, "context", "")))
            })
            .build()?,
    )?;

    tools.register(
        FunctionTool::builder("find_loot")
            .description("Draw a random item reward")
            .schema(object_schema(draw_properties(json!({})), &[]))
            .handler(move |args| {
                Ok(LOOT
                    .choose(&mut rng_for(seed, args))
                    .copied()
                    .unwrap_or("Gold Coins")
                    .to_string())
            })
            .build()?,
    )?;

    Ok(tools)
}

fn parse_date(tool: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| tool_error(tool, "Invalid date format. Please use YYYY-MM-DD."))
}

/// Split `topics` into consecutive study blocks ending by `deadline`
pub fn study_plan(topics: &[String], deadline: &str, today: NaiveDate) -> Result<Vec<(String, NaiveDate, NaiveDate)>> {
    if topics.is_empty() {
        return Err(tool_error("build_study_plan", "No valid topics provided."));
    }
    let deadline = parse_date("build_study_plan", deadline)?;
    let days_remaining = (deadline - today).num_days();
    if days_remaining <= 0 {
        return Err(tool_error("build_study_plan", "The deadline must be a future date."));
    }

    let study_days = (days_remaining / topics.len() as i64).max(1);
    let mut plan = Vec::with_capacity(topics.len());
    let mut current = today;
    for topic in topics {
        let end = current + chrono::Duration::days(study_days - 1);
        plan.push((topic.clone(), current, end));
        current = end + chrono::Duration::days(1);
    }
    Ok(plan)
}

/// Introductory links for a topic
pub fn research_links(topic: &str) -> Vec<String> {
    vec![
        format!("What is {}? - https://en.wikipedia.org/wiki/{}", topic, topic.replace(' ', "_")),
        format!(
            "YouTube intro to {} - https://www.youtube.com/results?search_query=introduction+to+{}",
            topic,
            topic.replace(' ', "+")
        ),
        format!("Benefits and risks of {} - https://medium.com/tag/{}", topic, topic.replace(' ', "-")),
        format!(
            "Research papers on {} - https://scholar.google.com/scholar?q={}",
            topic,
            topic.replace(' ', "+")
        ),
    ]
}

/// `build_study_plan` and `research_links`
pub fn study_tools() -> Result<ToolRegistry> {
    let mut tools = ToolRegistry::new();

    tools.register(
        FunctionTool::builder("build_study_plan")
            .description("Split topics into study blocks that finish by a deadline")
            .schema(object_schema(
                json!({
                    "topics": { "type": "array", "items": { "type": "string" } },
                    "deadline": { "type": "string", "description": "YYYY-MM-DD" },
                    "today": { "type": "string", "description": "YYYY-MM-DD, defaults to the local date" }
                }),
                &["topics", "deadline"],
            ))
            .handler(|args| {
                let topics: Vec<String> = args
                    .get("topics")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::trim)
                            .filter(|t| !t.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                let today = match args.get("today").and_then(Value::as_str) {
                    Some(today) => parse_date("build_study_plan", today)?,
                    None => Local::now().date_naive(),
                };

                let plan = study_plan(&topics, str_arg(args, "deadline", ""), today)?;
                let lines: Vec<String> = plan
                    .iter()
                    .map(|(topic, start, end)| format!("📘 {}: {} → {}", topic, start, end))
                    .collect();
                Ok(format!("🗓️ Study plan:\n{}", lines.join("\n")))
            })
            .build()?,
    )?;

    tools.register(
        FunctionTool::builder("research_links")
            .description("Find introductory resources for a topic")
            .schema(object_schema(json!({ "topic": { "type": "string" } }), &["topic"]))
            .handler(|args| {
                let topic = str_arg(args, "topic", "");
                if topic.is_empty() {
                    return Err(tool_error("research_links", "No topic given."));
                }
                Ok(research_links(topic).join("\n"))
            })
            .build()?,
    )?;

    Ok(tools)
}
