use serde::Serialize;

/// The draft the operator is editing. Serialized as the creation payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub event_name: String,
    pub description: String,
    pub image_url: String,
    pub is_checked: bool,
    pub date: String,
    pub price: String,
    pub location: String,
    pub organizer_name: String,
    pub category_id: String,
}

/// Wire name and label of every text field, in form order.
pub const TEXT_FIELDS: [(&str, &str); 8] = [
    ("eventName", "Event Name"),
    ("description", "Description"),
    ("imageUrl", "Image URL"),
    ("date", "Date"),
    ("price", "Price"),
    ("location", "Location"),
    ("organizerName", "Organizer Name"),
    ("categoryId", "Category ID"),
];

impl EventForm {
    pub fn reset(&mut self) {
        *self = EventForm::default();
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "eventName" => &self.event_name,
            "description" => &self.description,
            "imageUrl" => &self.image_url,
            "date" => &self.date,
            "price" => &self.price,
            "location" => &self.location,
            "organizerName" => &self.organizer_name,
            "categoryId" => &self.category_id,
            _ => return None,
        };
        Some(value)
    }

    /// Sets a text field by wire name. Returns false for unknown names.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            "eventName" => &mut self.event_name,
            "description" => &mut self.description,
            "imageUrl" => &mut self.image_url,
            "date" => &mut self.date,
            "price" => &mut self.price,
            "location" => &mut self.location,
            "organizerName" => &mut self.organizer_name,
            "categoryId" => &mut self.category_id,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn set_promoted(&mut self, promoted: bool) {
        self.is_checked = promoted;
    }
}

/// Shared static password in front of the submit button. Not tied to any
/// identity and never sent to the server.
pub struct PasswordGate {
    secret: String,
}

impl PasswordGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn verify(&self, input: &str) -> bool {
        input == self.secret
    }
}
