//! Review pipeline: prompt build → completion call → normalize → typed parse.

use tracing::{error, warn};

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, LlmClient, SamplingParams};
use crate::review::models::{
    AnalysisReport, BuilderResume, Mode, ReviewError, ReviewOutcome, RoastReport,
};
use crate::review::prompts::{
    ANALYZE_PROMPT_TEMPLATE, BUILDER_PROMPT_TEMPLATE, ROAST_PROMPT_TEMPLATE,
};

/// Sampling configuration per mode: roast runs hot for varied output,
/// builder runs cool for deterministic structure.
pub fn sampling_for(mode: Mode) -> SamplingParams {
    match mode {
        Mode::Analyze => SamplingParams {
            temperature: 0.7,
            max_tokens: 1000,
        },
        Mode::Roast => SamplingParams {
            temperature: 0.8,
            max_tokens: 1000,
        },
        Mode::Builder => SamplingParams {
            temperature: 0.4,
            max_tokens: 2000,
        },
    }
}

/// Builds the mode-specific prompt. Pure string templating — the resume text
/// must already be truncated to the endpoint's character cap.
pub fn build_prompt(mode: Mode, resume_text: &str, job_description: &str) -> String {
    let template = match mode {
        Mode::Analyze => ANALYZE_PROMPT_TEMPLATE,
        Mode::Roast => ROAST_PROMPT_TEMPLATE,
        Mode::Builder => BUILDER_PROMPT_TEMPLATE,
    };
    template
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text)
}

/// Runs one review: exactly one completion call, no retry. Every failure past
/// this point is folded into a `ReviewOutcome` so the endpoint can return it
/// with HTTP 200.
pub async fn run_review(
    llm: &LlmClient,
    mode: Mode,
    resume_text: &str,
    job_description: &str,
) -> ReviewOutcome {
    let prompt = build_prompt(mode, resume_text, job_description);

    let raw = match llm.complete(&prompt, JSON_ONLY_SYSTEM, sampling_for(mode)).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Completion call failed: {e}");
            return ReviewOutcome::Error(ReviewError::unavailable(&e));
        }
    };

    parse_completion(mode, &raw)
}

/// Normalizes a raw completion and parses it into the mode's typed report.
/// Fence-stripping is content-neutral; on parse or validation failure the
/// original completion text is preserved unmodified.
pub fn parse_completion(mode: Mode, raw: &str) -> ReviewOutcome {
    let text = strip_json_fences(raw);

    let parsed: Result<ReviewOutcome, serde_json::Error> = match mode {
        Mode::Analyze => serde_json::from_str::<AnalysisReport>(text).map(ReviewOutcome::Analysis),
        Mode::Roast => serde_json::from_str::<RoastReport>(text).map(ReviewOutcome::Roast),
        Mode::Builder => serde_json::from_str::<BuilderResume>(text).map(ReviewOutcome::Builder),
    };

    match parsed {
        Ok(outcome) => match outcome.validate() {
            Ok(()) => outcome,
            Err(reason) => {
                warn!("Completion parsed but failed validation: {reason}");
                ReviewOutcome::Error(ReviewError::malformed(raw))
            }
        },
        Err(e) => {
            warn!("Completion was not valid JSON for {mode:?} mode: {e}");
            ReviewOutcome::Error(ReviewError::malformed(raw))
        }
    }
}
