//! Table layouts known to the store.
//!
//! Every table is flat: an optional serial `id` followed by text columns.

/// How rows of a table are identified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKey {
    /// Integer `id` column assigned by the store on insert
    Serial,
    /// The first column is the primary key
    Natural,
}

/// A text column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub not_null: bool,
}

impl Column {
    const fn required(name: &'static str) -> Self {
        Self { name, not_null: true }
    }
}

/// Static description of one table
#[derive(Debug, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub key: TableKey,
    pub columns: &'static [Column],
}

impl TableDef {
    /// Column names in table order
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// Name of the first `NOT NULL` column whose value is missing
    pub fn first_null_violation(&self, values: &[Option<String>]) -> Option<&'static str> {
        self.columns
            .iter()
            .zip(values.iter().map(Some).chain(std::iter::repeat(None)))
            .find(|(column, value)| column.not_null && value.map_or(true, Option::is_none))
            .map(|(column, _)| column.name)
    }
}

pub static USERS: TableDef = TableDef {
    name: "users",
    key: TableKey::Serial,
    columns: &[
        Column::required("name"),
        Column::required("email"),
        Column::required("contact"),
    ],
};

pub static MEDICATIONS: TableDef = TableDef {
    name: "medications",
    key: TableKey::Serial,
    columns: &[Column::required("name"), Column::required("desc")],
};

pub static DISEASES: TableDef = TableDef {
    name: "diseases",
    key: TableKey::Serial,
    columns: &[Column::required("name"), Column::required("desc")],
};

pub static CLINICS: TableDef = TableDef {
    name: "clinics",
    key: TableKey::Serial,
    columns: &[Column::required("name"), Column::required("desc")],
};

pub static MESSAGES: TableDef = TableDef {
    name: "message",
    key: TableKey::Natural,
    columns: &[Column::required("value")],
};

/// Every table the migrations create
pub static ALL_TABLES: [&TableDef; 5] = [&USERS, &MEDICATIONS, &DISEASES, &CLINICS, &MESSAGES];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_null_violation() {
        let values = vec![Some("Alice".to_string()), None, Some("123".to_string())];
        assert_eq!(USERS.first_null_violation(&values), Some("email"));

        let complete = vec![Some("a".to_string()), Some("b".to_string()), Some("c".to_string())];
        assert_eq!(USERS.first_null_violation(&complete), None);

        // Short value lists count as NULL for the missing columns
        assert_eq!(MEDICATIONS.first_null_violation(&[Some("aspirin".to_string())]), Some("desc"));
    }

    #[test]
    fn test_column_names_follow_table_order() {
        let names: Vec<_> = USERS.column_names().collect();
        assert_eq!(names, vec!["name", "email", "contact"]);
    }
}
