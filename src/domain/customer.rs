use serde::Deserialize;

use crate::domain::customer_email::CustomerEmail;
use crate::domain::customer_id::CustomerId;
use crate::domain::pouch_size::PouchSize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: CustomerEmail,
    #[serde(rename = "cats")]
    pub subscriptions: Vec<Subscription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub name: String,
    #[serde(rename = "subscriptionActive")]
    pub active: bool,
    pub breed: String,
    pub pouch_size: PouchSize,
}

impl Customer {
    /// Active subscriptions in their original order.
    pub fn active_subscriptions(&self) -> impl Iterator<Item = &Subscription> {
        self.subscriptions
            .iter()
            .filter(|subscription| subscription.active)
    }
}
