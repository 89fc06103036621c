use secrecy::{ExposeSecret, Secret};
use validator::validate_email;

/// Customer email as loaded from the directory. Kept secret so it never ends up in logs.
#[derive(Debug, Clone)]
pub struct CustomerEmail(Secret<String>);

impl CustomerEmail {
    pub fn parse(email: String) -> Result<CustomerEmail, String> {
        let is_valid_email = validate_email(&email);

        if !is_valid_email {
            return Err(format!("{} email is not valid", email));
        }

        Ok(Self(Secret::new(email)))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<'de> serde::Deserialize<'de> for CustomerEmail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let email = String::deserialize(deserializer)?;

        CustomerEmail::parse(email).map_err(serde::de::Error::custom)
    }
}
