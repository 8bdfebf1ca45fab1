use medically_data::models::{Row, TableDef, CLINICS, DISEASES, MEDICATIONS, USERS};
use serde::{Deserialize, Serialize};

use super::Entity;

/// A registered user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(utoipa::ToSchema))]
pub struct User {
    /// Assigned by the store; ignored on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "with-api", schema(example = 1))]
    pub id: Option<i64>,
    #[cfg_attr(feature = "with-api", schema(example = "Alice"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "with-api", schema(example = "alice@example.com"))]
    pub email: Option<String>,
    #[cfg_attr(feature = "with-api", schema(example = "555-0100"))]
    pub contact: Option<String>,
}

impl Entity for User {
    const NAME: &'static str = "user";

    fn table() -> &'static TableDef {
        &USERS
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: Option<i64>) -> Self {
        Self { id, ..self }
    }

    fn into_values(self) -> Vec<Option<String>> {
        vec![self.name, self.email, self.contact]
    }

    fn from_row(row: Row) -> Self {
        let mut values = row.values.into_iter();
        Self {
            id: Some(row.id),
            name: values.next().flatten(),
            email: values.next().flatten(),
            contact: values.next().flatten(),
        }
    }
}

/// A medication
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(utoipa::ToSchema))]
pub struct Med {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "with-api", schema(example = 1))]
    pub id: Option<i64>,
    #[cfg_attr(feature = "with-api", schema(example = "ibuprofen"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "with-api", schema(example = "anti-inflammatory"))]
    pub desc: Option<String>,
}

/// A disease
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(utoipa::ToSchema))]
pub struct Disease {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "with-api", schema(example = 1))]
    pub id: Option<i64>,
    #[cfg_attr(feature = "with-api", schema(example = "influenza"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "with-api", schema(example = "viral respiratory infection"))]
    pub desc: Option<String>,
}

/// A clinic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(utoipa::ToSchema))]
pub struct Clinic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "with-api", schema(example = 1))]
    pub id: Option<i64>,
    #[cfg_attr(feature = "with-api", schema(example = "Northside"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "with-api", schema(example = "walk-in clinic"))]
    pub desc: Option<String>,
}

// Med, Disease and Clinic share the (name, desc) layout
macro_rules! named_entity {
    ($ty:ident, $name:literal, $table:ident) => {
        impl Entity for $ty {
            const NAME: &'static str = $name;

            fn table() -> &'static TableDef {
                &$table
            }

            fn id(&self) -> Option<i64> {
                self.id
            }

            fn with_id(self, id: Option<i64>) -> Self {
                Self { id, ..self }
            }

            fn into_values(self) -> Vec<Option<String>> {
                vec![self.name, self.desc]
            }

            fn from_row(row: Row) -> Self {
                let mut values = row.values.into_iter();
                Self {
                    id: Some(row.id),
                    name: values.next().flatten(),
                    desc: values.next().flatten(),
                }
            }
        }
    };
}

named_entity!(Med, "med", MEDICATIONS);
named_entity!(Disease, "disease", DISEASES);
named_entity!(Clinic, "clinic", CLINICS);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_values_follow_table_columns() {
        let user = User {
            id: Some(3),
            name: Some("Alice".into()),
            email: Some("a@x.com".into()),
            contact: Some("123".into()),
        };
        let columns: Vec<_> = User::table().column_names().collect();
        assert_eq!(columns, vec!["name", "email", "contact"]);

        let values = user.clone().into_values();
        assert_eq!(values, vec![Some("Alice".into()), Some("a@x.com".into()), Some("123".into())]);
        assert_eq!(User::from_row(Row::new(3, values)), user);
    }

    #[test]
    fn test_id_is_omitted_when_absent() {
        let med = Med {
            id: None,
            name: Some("aspirin".into()),
            desc: None,
        };
        assert_eq!(serde_json::to_value(&med).unwrap(), json!({"name": "aspirin", "desc": null}));

        let stored = med.with_id(Some(9));
        assert_eq!(serde_json::to_value(&stored).unwrap()["id"], json!(9));
    }

    #[test]
    fn test_missing_fields_decode_to_none() {
        let clinic: Clinic = serde_json::from_value(json!({"desc": "walk-in"})).unwrap();
        assert_eq!(clinic.id, None);
        assert_eq!(clinic.name, None);
        assert_eq!(clinic.desc.as_deref(), Some("walk-in"));
    }

    #[test]
    fn test_disease_rejects_wrongly_typed_fields() {
        let result = serde_json::from_value::<Disease>(json!({"name": 42}));
        assert!(result.is_err());
    }

    #[test]
    fn test_short_rows_leave_fields_empty() {
        let disease = Disease::from_row(Row::new(1, vec![Some("flu".into())]));
        assert_eq!(disease.name.as_deref(), Some("flu"));
        assert_eq!(disease.desc, None);
    }
}
