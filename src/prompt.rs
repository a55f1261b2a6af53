/// Instruction placed ahead of the caller's data.
pub const SUMMARY_INSTRUCTION: &str = "Summarize the following data:";

/// Builds the summarization prompt, embedding `data` verbatim.
#[must_use]
pub fn build_summary_prompt(data: &str) -> String {
    format!("{SUMMARY_INSTRUCTION}\n\n{data}")
}
