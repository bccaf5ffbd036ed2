use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of the `customers` table. Unlike products and categories the id is
/// client-supplied (conventionally a 5-character code) and must be unique.
/// Orders and customer types are store-side references, not wire fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub customer_id: String,
    pub company_name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_title: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_company_name_are_required() {
        assert!(serde_json::from_str::<Customer>(r#"{"company_name":"Alfreds"}"#).is_err());
        assert!(serde_json::from_str::<Customer>(r#"{"customer_id":"ALFKI"}"#).is_err());
        let c: Customer =
            serde_json::from_str(r#"{"customer_id":"ALFKI","company_name":"Alfreds Futterkiste"}"#)
                .unwrap();
        assert_eq!(c.customer_id, "ALFKI");
        assert!(c.phone.is_none());
    }
}
