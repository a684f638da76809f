use serde::Serialize;

/// Success payload for the suggest-fix operation.
#[derive(Debug, Serialize)]
pub struct SuggestFixResponse {
    /// URL of the posted comment, when upstream reports one.
    pub comment_url: String,
    /// The suggestion text as posted (or the degraded error placeholder).
    pub suggestion: String,
}
