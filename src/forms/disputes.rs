use super::{id_list, optional, optional_id, required, FormData, FormErrors};
use validator::Validate;

/// Validated dispute submission. Linked returns are associated in a second
/// step once the case row exists, since the join rows need its primary key.
#[derive(Debug, Clone, Validate)]
pub struct DisputePayload {
    #[validate(length(max = 255, message = "Ensure this value has at most 255 characters."))]
    pub title: String,
    pub description: String,
    pub linked_order: Option<i32>,
    pub linked_returns: Vec<i32>,
    pub resolution_notes: Option<String>,
}

pub fn bind(data: &FormData) -> Result<DisputePayload, FormErrors> {
    let mut errors = FormErrors::default();

    let title = required(data, "title", &mut errors);
    let description = required(data, "description", &mut errors);
    let linked_order = optional_id(data, "linked_order", &mut errors);
    let linked_returns = id_list(data, "linked_returns", &mut errors);

    let payload = DisputePayload {
        title,
        description,
        linked_order,
        linked_returns,
        resolution_notes: optional(data, "resolution_notes"),
    };

    if let Err(validation) = payload.validate() {
        errors.absorb(&validation);
    }

    if errors.is_empty() {
        Ok(payload)
    } else {
        Err(errors)
    }
}
