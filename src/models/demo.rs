use serde::{Deserialize, Serialize};

use crate::intent::Intent;

#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub intent: Intent,
    pub reply: &'static str,
}
