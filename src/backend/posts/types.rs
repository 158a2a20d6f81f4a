//! Post request and response bodies

use serde::{Deserialize, Serialize};

/// Create and edit request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct PostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Comment request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CommentRequest {
    #[serde(default)]
    pub text: String,
}

/// Acknowledgement returned by delete
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Post deleted successfully".to_string(),
        }
    }
}
