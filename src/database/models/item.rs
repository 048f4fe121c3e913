use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

use crate::database::tenant::TenantId;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// Row of `example_items`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ExampleItem {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection used by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItemSummary {
    pub id: Uuid,
    pub title: String,
    pub status: String,
}

/// Insert payload. Carries no tenant: the owning tenant is taken from the
/// tenant-scoped transaction the insert runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExampleItem {
    pub title: String,
    pub description: Option<String>,
    pub priority: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemInputError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Request body must be valid JSON: {0}")]
    InvalidJson(String),

    #[error("Title is required")]
    MissingTitle,

    #[error("Field '{field}' {reason}")]
    InvalidField { field: &'static str, reason: &'static str },
}

impl NewExampleItem {
    /// Parse and validate a create request body.
    ///
    /// An empty body counts as `{}`. Unknown fields, including any tenant id, are ignored.
    pub fn from_json_bytes(body: &[u8]) -> Result<Self, ItemInputError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::from_json(Value::Object(Map::new()));
        }
        let value: Value =
            serde_json::from_slice(body).map_err(|e| ItemInputError::InvalidJson(e.to_string()))?;
        Self::from_json(value)
    }

    pub fn from_json(value: Value) -> Result<Self, ItemInputError> {
        let Value::Object(fields) = value else {
            return Err(ItemInputError::NotAnObject);
        };

        let title = match fields.get("title") {
            Some(Value::String(title)) if !title.trim().is_empty() => title.clone(),
            None | Some(Value::Null) | Some(Value::String(_)) => return Err(ItemInputError::MissingTitle),
            Some(_) => {
                return Err(ItemInputError::InvalidField {
                    field: "title",
                    reason: "must be a string",
                })
            }
        };

        let description = match fields.get("description") {
            None | Some(Value::Null) => None,
            Some(Value::String(description)) => Some(description.clone()),
            Some(_) => {
                return Err(ItemInputError::InvalidField {
                    field: "description",
                    reason: "must be a string",
                })
            }
        };

        let priority = match fields.get("priority") {
            None | Some(Value::Null) => 0,
            Some(Value::Number(n)) => n
                .as_i64()
                .and_then(|p| i32::try_from(p).ok())
                .ok_or(ItemInputError::InvalidField {
                    field: "priority",
                    reason: "must be a 32-bit integer",
                })?,
            Some(_) => {
                return Err(ItemInputError::InvalidField {
                    field: "priority",
                    reason: "must be an integer",
                })
            }
        };

        Ok(Self {
            title,
            description,
            priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_priority_and_ignores_tenant() {
        let item = NewExampleItem::from_json(json!({
            "title": "Buy milk",
            "tenantId": Uuid::new_v4(),
            "tenant_id": Uuid::new_v4(),
        }))
        .unwrap();
        assert_eq!(
            item,
            NewExampleItem {
                title: "Buy milk".to_string(),
                description: None,
                priority: 0,
            }
        );
    }

    #[test]
    fn keeps_description_and_priority() {
        let item = NewExampleItem::from_json(json!({
            "title": "Buy milk",
            "description": "2 litres",
            "priority": 2,
        }))
        .unwrap();
        assert_eq!(item.description.as_deref(), Some("2 litres"));
        assert_eq!(item.priority, 2);
    }

    #[test]
    fn rejects_missing_or_blank_title() {
        for body in [json!({}), json!({"title": null}), json!({"title": ""}), json!({"title": "   "})] {
            assert_eq!(NewExampleItem::from_json(body), Err(ItemInputError::MissingTitle));
        }
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(matches!(
            NewExampleItem::from_json(json!({"title": 7})),
            Err(ItemInputError::InvalidField { field: "title", .. })
        ));
        assert!(matches!(
            NewExampleItem::from_json(json!({"title": "x", "priority": "high"})),
            Err(ItemInputError::InvalidField { field: "priority", .. })
        ));
        assert!(matches!(
            NewExampleItem::from_json(json!({"title": "x", "priority": 1.5})),
            Err(ItemInputError::InvalidField { field: "priority", .. })
        ));
        assert!(matches!(
            NewExampleItem::from_json(json!({"title": "x", "priority": 1u64 << 40})),
            Err(ItemInputError::InvalidField { field: "priority", .. })
        ));
        assert_eq!(NewExampleItem::from_json(json!(["title"])), Err(ItemInputError::NotAnObject));
    }

    #[test]
    fn empty_body_is_missing_title() {
        assert_eq!(NewExampleItem::from_json_bytes(b""), Err(ItemInputError::MissingTitle));
        assert!(matches!(
            NewExampleItem::from_json_bytes(b"{not json"),
            Err(ItemInputError::InvalidJson(_))
        ));
    }

    #[test]
    fn serializes_camel_case() {
        let now = Utc::now();
        let item = ExampleItem {
            id: Uuid::new_v4(),
            tenant_id: TenantId::new(Uuid::new_v4()),
            title: "Buy milk".to_string(),
            description: None,
            status: STATUS_PENDING.to_string(),
            priority: 2,
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&item).unwrap();
        for key in ["id", "tenantId", "title", "description", "status", "priority", "createdAt", "updatedAt"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }
}
