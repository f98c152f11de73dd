use serde::{Deserialize, Serialize};

/// A fair (feira) as returned by the backend. `date` is "yyyy-mm-dd".
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Fair {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "data")]
    pub date: String,
}

/// Write payload for fair create/update. Only the fields that are set are
/// serialized, so a PATCH touches nothing else.
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct FairPayload {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_only_set_fields() {
        let payload = FairPayload {
            name: Some("Feira do Centro".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["nome"], "Feira do Centro");
        assert!(json.get("cidade").is_none());
        assert!(json.get("data").is_none());
    }

    #[test]
    fn fair_deserializes_backend_field_names() {
        let fair: Fair = serde_json::from_str(
            r#"{"id": 3, "nome": "Feira Livre", "cidade": "Sorocaba", "data": "2026-09-12"}"#,
        )
        .unwrap();
        assert_eq!(fair.name, "Feira Livre");
        assert_eq!(fair.city, "Sorocaba");
        assert_eq!(fair.date, "2026-09-12");
    }
}
