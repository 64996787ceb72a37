// Cross-cutting prompt fragments.
// Mode-specific prompts live in review::prompts alongside their pipeline.

/// System prompt that enforces JSON-only output on every completion call.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
