use super::{datetime_or_now, optional, required, FormData, FormErrors};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::Validate;

/// Validated order submission, ready to persist. Uniqueness of
/// `amazon_order_id` is checked against the database by the create handler
/// and reported as a field error on collision.
#[derive(Debug, Clone, Validate)]
pub struct OrderPayload {
    #[validate(length(max = 64, message = "Ensure this value has at most 64 characters."))]
    pub amazon_order_id: String,
    #[validate(length(max = 128, message = "Ensure this value has at most 128 characters."))]
    pub sku: Option<String>,
    #[validate(length(max = 255, message = "Ensure this value has at most 255 characters."))]
    pub title: String,
    #[validate(length(max = 255, message = "Ensure this value has at most 255 characters."))]
    pub customer_name: Option<String>,
    #[validate(email(message = "Enter a valid email address."))]
    pub customer_email: Option<String>,
    pub order_date: DateTime<Utc>,
    pub amount: Decimal,
}

/// First value the amounts column cannot hold: 8 integer digits plus the
/// 2 fractional ones exhaust its precision.
const AMOUNT_DIGIT_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

pub fn bind(data: &FormData) -> Result<OrderPayload, FormErrors> {
    let mut errors = FormErrors::default();

    let amazon_order_id = required(data, "amazon_order_id", &mut errors);
    let title = required(data, "title", &mut errors);
    let order_date = datetime_or_now(data, "order_date", &mut errors);

    let amount = match data.first("amount") {
        Some(raw) if !raw.is_empty() => match raw.parse::<Decimal>() {
            Ok(value) => {
                let value = value.round_dp(2);
                // The column is decimal(10, 2), so 99999999.99 is the ceiling.
                if value.abs() >= AMOUNT_DIGIT_LIMIT {
                    errors.add(
                        "amount",
                        "Ensure that there are no more than 10 digits in total.",
                    );
                    Decimal::ZERO
                } else {
                    value
                }
            }
            Err(_) => {
                errors.add("amount", "Enter a valid amount.");
                Decimal::ZERO
            }
        },
        _ => Decimal::ZERO,
    };

    let payload = OrderPayload {
        amazon_order_id,
        sku: optional(data, "sku"),
        title,
        customer_name: optional(data, "customer_name"),
        customer_email: optional(data, "customer_email"),
        order_date,
        amount,
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
