use serde::Deserialize;

/// JSON body for the suggest-fix operation.
#[derive(Debug, Deserialize)]
pub struct SuggestFixRequest {
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
}
