use crate::payload::RecordPayload;
use serde::{Deserialize, Serialize};

/// Fields of the record logger form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordForm {
    pub first_name: String,
    pub last_name: String,
    /// Free text, conventionally `HH:MM`
    pub time_in: String,
    pub time_out: String,
    pub notes: String,
}

impl RecordForm {
    /// Builds the request body, strings verbatim.
    pub fn to_payload(&self, resource: Option<String>) -> RecordPayload {
        RecordPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            time_in: self.time_in.clone(),
            time_out: self.time_out.clone(),
            notes: self.notes.clone(),
            resource,
        }
    }

    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
