use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Unique identifier for a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[schema(value_type = String)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SubmissionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_id_new_creates_unique_ids() {
        let id1 = SubmissionId::new();
        let id2 = SubmissionId::new();

        assert_ne!(id1, id2, "New SubmissionIds should be unique");
    }

    #[test]
    fn test_submission_id_display_round_trip() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = SubmissionId::from_uuid(uuid);

        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");

        let parsed: SubmissionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_submission_id_from_str_invalid() {
        let invalid = ["", "not-a-uuid", "550e8400-e29b-41d4-a716"];

        for input in invalid {
            assert!(
                input.parse::<SubmissionId>().is_err(),
                "Should fail to parse invalid UUID: {}",
                input
            );
        }
    }
}
