use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::domain::{Competitor, PairingMode};

/// Request to run a draw over a roster snapshot
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DrawRequest {
    #[validate(nested)]
    pub competitors: Vec<CompetitorRequest>,
    #[serde(default)]
    pub mode: Option<PairingMode>,
    #[serde(alias = "max_weight_diff_lb", rename = "maxWeightDiffLb", default)]
    #[validate(range(min = 0.0))]
    pub max_weight_diff_lb: Option<f64>,
}

/// One roster entry as received over the wire
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompetitorRequest {
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "group_id", alias = "galpon", rename = "groupId")]
    pub group_id: String,
    #[serde(alias = "front_name", alias = "frente", rename = "frontName", default)]
    pub front_name: String,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(alias = "weight_lb", alias = "peso_libras", rename = "weightLb")]
    pub weight_lb: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

impl From<CompetitorRequest> for Competitor {
    fn from(value: CompetitorRequest) -> Self {
        Competitor {
            id: value.id.trim().to_string(),
            group_id: value.group_id.trim().to_string(),
            front_name: value.front_name.trim().to_string(),
            weight_lb: value.weight_lb,
            name: value.name.map(|n| n.trim().to_string()),
            owner: value.owner.map(|o| o.trim().to_string()),
        }
    }
}

/// Roster ids arrive either as database integers or as opaque strings
fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids() {
        let body = r#"{
            "competitors": [
                {"id": 7, "groupId": "North", "frontName": "A", "weightLb": 4.5},
                {"id": "x-9", "galpon": "South", "frente": "B", "peso_libras": 4.6}
            ]
        }"#;

        let request: DrawRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.competitors[0].id, "7");
        assert_eq!(request.competitors[1].id, "x-9");
        assert_eq!(request.competitors[1].group_id, "South");
        assert!(request.mode.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let body = r#"{
            "competitors": [
                {"id": 1, "groupId": "North", "weightLb": 0.0}
            ]
        }"#;

        let request: DrawRequest = serde_json::from_str(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_tolerance() {
        let body = r#"{
            "competitors": [],
            "maxWeightDiffLb": -0.5
        }"#;

        let request: DrawRequest = serde_json::from_str(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_conversion_trims_labels() {
        let request = CompetitorRequest {
            id: " 12 ".to_string(),
            group_id: "  North ".to_string(),
            front_name: " Red ".to_string(),
            weight_lb: 4.2,
            name: Some(" Ajax ".to_string()),
            owner: None,
        };

        let competitor = Competitor::from(request);
        assert_eq!(competitor.id, "12");
        assert_eq!(competitor.group_id, "North");
        assert_eq!(competitor.front_name, "Red");
        assert_eq!(competitor.name.as_deref(), Some("Ajax"));
    }
}
