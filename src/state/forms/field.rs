//! Form field identifiers and the value set they key into

use serde::{Deserialize, Serialize};

/// Input flavour passed to the field renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Phone,
}

impl InputType {
    /// Placeholder shown in an empty, unfocused input
    pub fn placeholder(&self) -> &'static str {
        match self {
            InputType::Text => "(empty)",
            InputType::Email => "(name@example.com)",
            InputType::Phone => "(10 digits)",
        }
    }
}

/// Every field of the user details form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    AddressLine1,
    AddressLine2,
    City,
    State,
    ZipCode,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::AddressLine1,
        Field::AddressLine2,
        Field::City,
        Field::State,
        Field::ZipCode,
    ];

    /// Key used in the persisted JSON object
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::AddressLine1 => "addressLine1",
            Field::AddressLine2 => "addressLine2",
            Field::City => "city",
            Field::State => "state",
            Field::ZipCode => "zipCode",
        }
    }

    /// Label on the input box; required fields carry a `*`
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name*",
            Field::Email => "Email*",
            Field::Phone => "Phone*",
            Field::AddressLine1 => "Address Line 1*",
            Field::AddressLine2 => "Address Line 2",
            Field::City => "City*",
            Field::State => "State*",
            Field::ZipCode => "ZIP Code*",
        }
    }

    /// Label on the review summary
    pub fn review_label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::AddressLine1 => "Address Line 1",
            Field::AddressLine2 => "Address Line 2",
            Field::City => "City",
            Field::State => "State",
            Field::ZipCode => "ZIP Code",
        }
    }

    pub fn input_type(&self) -> InputType {
        match self {
            Field::Email => InputType::Email,
            Field::Phone => InputType::Phone,
            _ => InputType::Text,
        }
    }
}

/// The complete set of user-entered values for one session.
///
/// Serializes to a flat JSON object with exactly the eight camelCase keys.
/// Keys missing from a stored object read back as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::AddressLine1 => &self.address_line1,
            Field::AddressLine2 => &self.address_line2,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::ZipCode => &self.zip_code,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::AddressLine1 => &mut self.address_line1,
            Field::AddressLine2 => &mut self.address_line2,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::ZipCode => &mut self.zip_code,
        }
    }

    /// Replace a field value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// True when every field is the empty string
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Clear every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
