//! Fixed prompt template for issue-fix suggestions.

const NO_BODY_PLACEHOLDER: &str = "(no description provided)";

/// Builds the generation prompt from an issue's title and body.
///
/// An empty or missing body is replaced by a placeholder so the template
/// always reads coherently.
pub fn issue_fix_prompt(title: &str, body: Option<&str>) -> String {
    let description = match body {
        Some(text) if !text.trim().is_empty() => text,
        _ => NO_BODY_PLACEHOLDER,
    };

    format!(
        "You are a senior software engineer helping triage a repository.\n\
         A GitHub issue is described below.\n\n\
         Title: {title}\n\n\
         Description:\n{description}\n\n\
         Propose a concrete fix for this issue. Keep the suggestion short, \
         actionable and specific to the problem described."
    )
}
