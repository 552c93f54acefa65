use super::{datetime_or_now, optional, required, FormData, FormErrors};
use chrono::{DateTime, Utc};
use validator::Validate;

/// Validated return submission. The referenced order must exist; the create
/// handler verifies that and reports it on the `order` field.
#[derive(Debug, Clone, Validate)]
pub struct ReturnPayload {
    pub order_id: i32,
    #[validate(length(max = 255, message = "Ensure this value has at most 255 characters."))]
    pub return_reason: String,
    #[validate(length(max = 128, message = "Ensure this value has at most 128 characters."))]
    pub tracking_number: Option<String>,
    pub return_date: DateTime<Utc>,
    pub condition_on_return: Option<String>,
    pub notes: Option<String>,
}

pub fn bind(data: &FormData) -> Result<ReturnPayload, FormErrors> {
    let mut errors = FormErrors::default();

    let order_id = match data.first("order") {
        Some(raw) if !raw.is_empty() => raw.parse::<i32>().unwrap_or_else(|_| {
            errors.add("order", "Select a valid order.");
            0
        }),
        _ => {
            errors.add("order", "This field is required.");
            0
        }
    };

    let return_reason = required(data, "return_reason", &mut errors);
    let return_date = datetime_or_now(data, "return_date", &mut errors);

    let payload = ReturnPayload {
        order_id,
        return_reason,
        tracking_number: optional(data, "tracking_number"),
        return_date,
        condition_on_return: optional(data, "condition_on_return"),
        notes: optional(data, "notes"),
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
