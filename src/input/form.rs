use crate::input::{InputError, parse_fields};
use crate::model::features::{Feature, N_FEATURES, feature_order};
use crate::model::risk::ClinicalInput;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub fields: [String; N_FEATURES],
}

impl Default for FormState {
    fn default() -> Self {
        Self::defaults()
    }
}

impl FormState {
    pub fn defaults() -> Self {
        Self {
            fields: std::array::from_fn(|i| feature_order()[i].default_text().to_string()),
        }
    }

    pub fn field_mut(&mut self, feature: Feature) -> &mut String {
        &mut self.fields[feature.index()]
    }

    pub fn reset(&mut self) {
        *self = Self::defaults();
    }

    pub fn parse(&self) -> Result<ClinicalInput, InputError> {
        parse_fields(&self.fields)
    }
}
