use crate::statics;

/// One inventory record stored in a slot.
/// All fields are plain strings; quantities and dates are never coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryItem {
    pub coordinate: String,
    pub code: String,
    pub description: String,
    pub carton: String,
    pub single: String,
    pub date: String,
    pub notes: String,
}

impl InventoryItem {
    pub fn new(coordinate: impl Into<String>) -> Self {
        Self {
            coordinate: coordinate.into(),
            ..Default::default()
        }
    }

    pub fn field(&self, field: ItemField) -> &str {
        match field {
            ItemField::Coordinate => &self.coordinate,
            ItemField::Code => &self.code,
            ItemField::Description => &self.description,
            ItemField::Carton => &self.carton,
            ItemField::Single => &self.single,
            ItemField::Date => &self.date,
            ItemField::Notes => &self.notes,
        }
    }

    pub fn field_mut(&mut self, field: ItemField) -> &mut String {
        match field {
            ItemField::Coordinate => &mut self.coordinate,
            ItemField::Code => &mut self.code,
            ItemField::Description => &mut self.description,
            ItemField::Carton => &mut self.carton,
            ItemField::Single => &mut self.single,
            ItemField::Date => &mut self.date,
            ItemField::Notes => &mut self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Coordinate,
    Code,
    Description,
    Carton,
    Single,
    Date,
    Notes,
}

impl ItemField {
    /// Fields a user can edit through the slot form, in display order.
    /// The coordinate always comes from the slot the form belongs to.
    pub const EDITABLE: [ItemField; 6] = [
        ItemField::Code,
        ItemField::Description,
        ItemField::Carton,
        ItemField::Single,
        ItemField::Date,
        ItemField::Notes,
    ];

    pub fn csv_header(self) -> &'static str {
        match self {
            ItemField::Coordinate => statics::CSV_COL_COORDINATE,
            ItemField::Code => statics::CSV_COL_CODE,
            ItemField::Description => statics::CSV_COL_DESCRIPTION,
            ItemField::Carton => statics::CSV_COL_CARTON,
            ItemField::Single => statics::CSV_COL_SINGLE,
            ItemField::Date => statics::CSV_COL_DATE,
            ItemField::Notes => statics::CSV_COL_NOTES,
        }
    }

    pub fn form_label(self) -> &'static str {
        match self {
            ItemField::Coordinate => statics::CSV_COL_COORDINATE,
            ItemField::Code => statics::EN_FIELD_CODE,
            ItemField::Description => statics::EN_FIELD_DESCRIPTION,
            ItemField::Carton => statics::EN_FIELD_CARTON,
            ItemField::Single => statics::EN_FIELD_SINGLE,
            ItemField::Date => statics::EN_FIELD_DATE,
            ItemField::Notes => statics::EN_FIELD_NOTES,
        }
    }
}
