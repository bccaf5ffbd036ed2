use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of the `categories` table. The associated products are reachable
/// through `products.category_id`; they are not part of this payload.
///
/// `category_id` is store-assigned and ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    #[serde(default)]
    pub category_id: i32,
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// BYTEA column carried over the wire as a base64 string.
    #[serde(default, with = "base64_bytes")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub picture: Option<Vec<u8>>,
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(bytes) => s.serialize_some(&STANDARD.encode(bytes)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(s) => STANDARD
                .decode(s.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_is_base64_on_the_wire() {
        let c = Category {
            category_id: 1,
            category_name: "Beverages".into(),
            description: Some("Soft drinks, coffees, teas, beers, and ales".into()),
            picture: Some(vec![0x89, 0x50, 0x4e, 0x47]),
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["picture"], "iVBORw==");
        let back: Category = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn picture_may_be_absent_or_null() {
        let c: Category = serde_json::from_str(r#"{"category_name":"Produce"}"#).unwrap();
        assert!(c.picture.is_none());
        let c: Category =
            serde_json::from_str(r#"{"category_name":"Produce","picture":null}"#).unwrap();
        assert!(c.picture.is_none());
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let res = serde_json::from_str::<Category>(
            r#"{"category_name":"Produce","picture":"not base64!"}"#,
        );
        assert!(res.is_err());
    }
}
