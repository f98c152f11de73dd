use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `api-token-auth/` (DRF token endpoint).
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// Account role selected on the signup form. The backend expects the
/// uppercase wire values and creates the matching group membership.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug)]
pub enum SignupRole {
    #[serde(rename = "CONSUMIDOR")]
    Consumer,
    #[serde(rename = "PRODUTOR")]
    Producer,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: SignupRole,
    #[serde(rename = "nome_fazenda", skip_serializing_if = "Option::is_none")]
    pub farm_name: Option<String>,
    #[serde(rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Identity of the logged-in user as reported by `whoami/`.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct WhoAmI {
    pub username: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Which panel the client routes to after login.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Consumer,
    Producer,
    Moderator,
}

impl WhoAmI {
    /// Moderators win over producers; anyone else browses as a consumer.
    pub fn role(&self) -> Role {
        if self.is_superuser || self.groups.iter().any(|g| g == "Moderadores") {
            Role::Moderator
        } else if self.groups.iter().any(|g| g == "Produtores") {
            Role::Producer
        } else {
            Role::Consumer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn who(groups: &[&str], is_superuser: bool) -> WhoAmI {
        WhoAmI {
            username: "ana".into(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            is_superuser,
        }
    }

    #[test]
    fn moderator_group_routes_to_moderator() {
        assert_eq!(who(&["Moderadores"], false).role(), Role::Moderator);
    }

    #[test]
    fn superuser_is_moderator_regardless_of_groups() {
        assert_eq!(who(&["Consumidores"], true).role(), Role::Moderator);
    }

    #[test]
    fn producer_group_routes_to_producer() {
        assert_eq!(who(&["Produtores"], false).role(), Role::Producer);
    }

    #[test]
    fn everyone_else_is_a_consumer() {
        assert_eq!(who(&["Consumidores"], false).role(), Role::Consumer);
        assert_eq!(who(&[], false).role(), Role::Consumer);
    }

    #[test]
    fn producer_signup_includes_farm_fields() {
        let req = RegisterRequest {
            username: "zeca".into(),
            password: "1234".into(),
            role: SignupRole::Producer,
            farm_name: Some("Sítio Boa Vista".into()),
            city: Some("Campinas".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role"], "PRODUTOR");
        assert_eq!(json["nome_fazenda"], "Sítio Boa Vista");
        assert_eq!(json["cidade"], "Campinas");
    }

    #[test]
    fn consumer_signup_omits_farm_fields() {
        let req = RegisterRequest {
            username: "bia".into(),
            password: "1234".into(),
            role: SignupRole::Consumer,
            farm_name: None,
            city: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role"], "CONSUMIDOR");
        assert!(json.get("nome_fazenda").is_none());
        assert!(json.get("cidade").is_none());
    }
}
