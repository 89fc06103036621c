use std::path::Path;

use crate::domain::customer::Customer;

/// Read-only customer lookup table, built once at start-up.
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

#[derive(thiserror::Error)]
pub enum DirectoryError {
    #[error("Failed to read the customer directory file.")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse the customer directory file.")]
    ParseError(#[from] serde_json::Error),
}

impl std::fmt::Debug for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::ReadError(err) => write!(f, "{}\nCaused by:\n\t{}", self, err),
            DirectoryError::ParseError(err) => write!(f, "{}\nCaused by:\n\t{}", self, err),
        }
    }
}

impl CustomerDirectory {
    pub fn new(customers: Vec<Customer>) -> CustomerDirectory {
        CustomerDirectory { customers }
    }

    #[tracing::instrument(name = "Loading the customer directory", skip(path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<CustomerDirectory, DirectoryError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let directory = CustomerDirectory::from_json(&raw)?;

        tracing::info!("Loaded {} customers", directory.len());

        Ok(directory)
    }

    pub fn from_json(raw: &str) -> Result<CustomerDirectory, DirectoryError> {
        let customers: Vec<Customer> = serde_json::from_str(raw)?;

        Ok(CustomerDirectory::new(customers))
    }

    /// First customer whose id equals `id`. Duplicates are not detected.
    pub fn find(&self, id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.id.as_ref() == id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
