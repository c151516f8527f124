//! The augmentation context string.

use torque_search::SearchResult;

/// Fixed instructions opening every context string.
pub const PREAMBLE: &str = "You are an automotive troubleshooting assistant. \
     Help the user diagnose and repair their vehicle with clear, practical, \
     step-by-step guidance, and call out safety precautions where they apply.";

/// Closing instruction appended after the resource list.
const REFERENCE_INSTRUCTION: &str =
    "Reference these resources in your reply where they help answer the question.";

/// Build the context string for a request.
///
/// Without resources (no search, or a search that found nothing) this is the
/// preamble alone.
pub fn build_context(resources: Option<&[SearchResult]>) -> String {
    let mut context = String::from(PREAMBLE);

    let Some(resources) = resources.filter(|r| !r.is_empty()) else {
        return context;
    };

    context.push_str("\n\nResources found:\n");
    for (idx, resource) in resources.iter().enumerate() {
        context.push_str(&format!("\n{}. {} - {}", idx + 1, resource.title, resource.url));
    }
    context.push_str("\n\n");
    context.push_str(REFERENCE_INSTRUCTION);

    context
}
