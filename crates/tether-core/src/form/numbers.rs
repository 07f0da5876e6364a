use crate::parse::{float_or_default, int_or_default};
use crate::payload::AddPayload;
use serde::{Deserialize, Serialize};

/// The two-number form shared by the calculators and the remote add client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPairForm {
    pub number_a: String,
    pub number_b: String,
}

impl NumberPairForm {
    pub fn new(number_a: impl Into<String>, number_b: impl Into<String>) -> Self {
        Self {
            number_a: number_a.into(),
            number_b: number_b.into(),
        }
    }

    /// Integer sum computed locally; unparseable operands count as 0.
    pub fn add_locally(&self) -> i64 {
        int_or_default(&self.number_a).saturating_add(int_or_default(&self.number_b))
    }

    /// Operands for `/add`; unparseable operands count as 0.
    pub fn to_payload(&self) -> AddPayload {
        AddPayload {
            a: float_or_default(&self.number_a),
            b: float_or_default(&self.number_b),
        }
    }
}
