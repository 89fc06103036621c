pub mod customer;
pub mod customer_email;
pub mod customer_id;
pub mod notification;
pub mod pouch_size;
pub mod price;
