use serde::Deserialize;

/// A user row in the moderator panel.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ManagedUser {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl ManagedUser {
    pub fn groups_label(&self) -> String {
        if self.groups.is_empty() {
            "-".to_string()
        } else {
            self.groups.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_label_joins_or_dashes() {
        let user: ManagedUser =
            serde_json::from_str(r#"{"id": 1, "username": "ana", "groups": ["Consumidores"]}"#)
                .unwrap();
        assert_eq!(user.groups_label(), "Consumidores");

        let bare: ManagedUser = serde_json::from_str(r#"{"id": 2, "username": "zé"}"#).unwrap();
        assert_eq!(bare.groups_label(), "-");
    }
}
