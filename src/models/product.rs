use serde::{Deserialize, Serialize};

use super::fair::Fair;
use crate::utils::format_price;

/// Producer details nested in a product (read only).
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ProducerInfo {
    pub id: u32,
    pub username: String,
    #[serde(rename = "nome_fazenda")]
    pub farm_name: String,
    #[serde(rename = "cidade")]
    pub city: String,
}

/// A product as returned by the backend. `price` is a decimal string
/// (DRF DecimalField); it is kept verbatim and only parsed for display.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct Product {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: String,
    #[serde(rename = "feira_detalhes", default)]
    pub fair: Option<Fair>,
    #[serde(rename = "prod", default)]
    pub producer: Option<ProducerInfo>,
}

impl Product {
    pub fn price_label(&self) -> String {
        format_price(&self.price)
    }
}

/// Write payload for product create/update. Unset fields are not serialized,
/// so an update with only `price` set is a genuine partial update.
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct ProductPayload {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "preco", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(rename = "feira", skip_serializing_if = "Option::is_none")]
    pub fair: Option<u32>,
}

/// Catalog filters, mapped to the `nome` / `preco_max` query parameters.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProductFilter {
    pub name: String,
    pub max_price: String,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.max_price.trim().is_empty()
    }

    /// Query pairs for the request builder; blank inputs send nothing.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.name.trim().is_empty() {
            pairs.push(("nome", self.name.trim().to_string()));
        }
        if !self.max_price.trim().is_empty() {
            pairs.push(("preco_max", self.max_price.trim().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_only_payload_is_a_partial_update() {
        let payload = ProductPayload {
            price: Some("9.90".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["preco"], "9.90");
    }

    #[test]
    fn product_deserializes_with_nested_details() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 12,
                "nome": "Tomate",
                "preco": "7.50",
                "feira": 2,
                "feira_detalhes": {"id": 2, "nome": "Feira Central", "cidade": "Campinas", "data": "2026-09-01"},
                "prod": {"id": 5, "username": "zeca", "nome_fazenda": "Sítio Alegre", "cidade": "Campinas"}
            }"#,
        )
        .unwrap();
        assert_eq!(product.price_label(), "R$ 7.50");
        assert_eq!(product.fair.as_ref().unwrap().name, "Feira Central");
        assert_eq!(product.producer.as_ref().unwrap().farm_name, "Sítio Alegre");
    }

    #[test]
    fn blank_filters_produce_no_query_pairs() {
        assert!(ProductFilter::default().query_pairs().is_empty());
        let filter = ProductFilter {
            name: "  ".into(),
            max_price: String::new(),
        };
        assert!(filter.is_empty());
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn filters_map_to_backend_parameter_names() {
        let filter = ProductFilter {
            name: "tomate".into(),
            max_price: "10".into(),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![("nome", "tomate".to_string()), ("preco_max", "10".to_string())]
        );
    }
}
