use once_cell::sync::Lazy;
use regex::Regex;

// Lowercase hex only, grouped 8-4-4-4-12
static CUSTOMER_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("Customer id pattern is not a valid regex")
});

/// Returns `true` if the input has the canonical customer identifier shape.
pub fn is_valid_customer_id(value: &str) -> bool {
    CUSTOMER_ID_REGEX.is_match(value)
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn parse(id: String) -> Result<CustomerId, String> {
        if !is_valid_customer_id(&id) {
            return Err(format!("{} is not a valid customer id", id));
        }

        Ok(Self(id))
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> serde::Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;

        CustomerId::parse(id).map_err(serde::de::Error::custom)
    }
}
