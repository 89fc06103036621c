use crate::directory::CustomerDirectory;
use crate::domain::customer::Customer;
use crate::domain::customer_id::is_valid_customer_id;
use crate::domain::notification::Notification;
use crate::domain::price::Price;

/// Orders strictly above this total come with a free gift.
pub const FREE_GIFT_THRESHOLD: Price = Price::from_cents(12000);

#[derive(thiserror::Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("The customer id {0} is invalid.")]
    InvalidCustomerId(String),
    #[error("Customer with id {0} not found.")]
    CustomerNotFound(String),
}

impl std::fmt::Debug for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

/// Builds delivery notifications out of a customer directory.
///
/// The directory is owned by the notifier and never mutated, so every
/// notification is computed from one consistent customer snapshot.
#[derive(Debug, Clone)]
pub struct DeliveryNotifier {
    directory: CustomerDirectory,
}

impl DeliveryNotifier {
    pub fn new(directory: CustomerDirectory) -> DeliveryNotifier {
        DeliveryNotifier { directory }
    }

    pub fn directory(&self) -> &CustomerDirectory {
        &self.directory
    }

    #[tracing::instrument(name = "Generating delivery notification", skip(self))]
    pub fn generate(&self, customer_id: &str) -> Result<Notification, DeliveryError> {
        let customer = resolve_customer(&self.directory, customer_id)?;
        let names = format_active_names(customer);
        let total_price = calculate_total_price(customer);

        Ok(Notification {
            title: create_title(names.as_deref()),
            message: create_message(customer, names.as_deref()),
            total_price,
            free_gift: is_eligible_for_free_gift(total_price),
        })
    }
}

/// Validates the id shape before looking the customer up, so a malformed id
/// never reaches the directory.
pub fn resolve_customer<'a>(
    directory: &'a CustomerDirectory,
    customer_id: &str,
) -> Result<&'a Customer, DeliveryError> {
    if !is_valid_customer_id(customer_id) {
        return Err(DeliveryError::InvalidCustomerId(customer_id.to_string()));
    }

    directory
        .find(customer_id)
        .ok_or_else(|| DeliveryError::CustomerNotFound(customer_id.to_string()))
}

/// Names of the active subscriptions as a readable list, e.g.
/// "Cristina, Mariah and Rebekah". `None` when nothing is active.
pub fn format_active_names(customer: &Customer) -> Option<String> {
    let names: Vec<&str> = customer
        .active_subscriptions()
        .map(|subscription| subscription.name.as_str())
        .collect();

    match names.as_slice() {
        [] => None,
        [name] => Some(name.to_string()),
        [rest @ .., last] => Some(format!("{} and {}", rest.join(", "), last)),
    }
}

pub fn create_title(names: Option<&str>) -> Option<String> {
    names.map(|names| format!("Your next delivery for {}", names))
}

pub fn create_message(customer: &Customer, names: Option<&str>) -> Option<String> {
    names.map(|names| {
        format!(
            "Hey {}! In two days' time, we'll be charging you for your next order for {}'s fresh food.",
            customer.first_name, names
        )
    })
}

/// Sum of the pouch prices of the active subscriptions.
/// Unknown pouch sizes are counted as free.
pub fn calculate_total_price(customer: &Customer) -> Price {
    customer
        .active_subscriptions()
        .map(|subscription| {
            if !subscription.pouch_size.is_known() {
                tracing::warn!(
                    "Unknown pouch size {} for {}, priced at 0",
                    subscription.pouch_size.as_ref(),
                    subscription.name
                );
            }
            subscription.pouch_size.price()
        })
        .sum()
}

pub fn is_eligible_for_free_gift(total_price: Price) -> bool {
    total_price > FREE_GIFT_THRESHOLD
}
