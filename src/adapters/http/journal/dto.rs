//! HTTP DTOs for the home, log, and learn endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::worry::{Worry, WorryCategory};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to log a new worry.
#[derive(Debug, Clone, Deserialize)]
pub struct LogWorryRequest {
    pub content: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A worry in its persisted shape, plus the derived category when triaged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorryResponse {
    #[serde(flatten)]
    pub worry: Worry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<WorryCategory>,
}

impl From<&Worry> for WorryResponse {
    fn from(worry: &Worry) -> Self {
        Self {
            worry: worry.clone(),
            category: worry.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_worry_request_deserializes() {
        let req: LogWorryRequest = serde_json::from_str(r#"{"content": "Pay rent"}"#).unwrap();
        assert_eq!(req.content, "Pay rent");
    }

    #[test]
    fn untriaged_worry_has_no_category() {
        let worry = Worry::new("Pay rent").unwrap();
        let json = serde_json::to_value(WorryResponse::from(&worry)).unwrap();

        assert_eq!(json["content"], "Pay rent");
        assert_eq!(json["status"], "new");
        assert_eq!(json["isDealtWith"], false);
        assert!(json.get("category").is_none());
    }
}
