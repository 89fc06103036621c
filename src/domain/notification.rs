use crate::domain::price::Price;

/// Delivery notification sent back for a single customer.
///
/// `title` and `message` are `None` when the customer has no active
/// subscriptions, so no half-formed sentence is ever produced.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: Option<String>,
    pub message: Option<String>,
    pub total_price: Price,
    pub free_gift: bool,
}
