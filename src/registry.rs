// 📇 Client Registry - owns every client of the session
//
// Invariant: at most one client per id, at any time.
//
// The collection is a plain Vec in insertion order. Lookups are linear scans,
// which is fine for a single interactive session. Callers never get the Vec
// itself, only borrowed iterators and `Option<&Client>`.

use crate::entities::{Category, Client};
use crate::error::{RegistryError, Result};
use tracing::{debug, warn};

// ============================================================================
// OPERATION REPORTS
// ============================================================================

/// Outcome of a successful email update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailChange {
    pub id: u32,
    pub old_email: String,
    pub new_email: String,
}

/// Outcome of a successful category assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryChange {
    pub id: u32,
    pub previous: Category,
    pub current: Category,
}

// ============================================================================
// CLIENT REGISTRY
// ============================================================================

#[derive(Debug, Default)]
pub struct ClientRegistry {
    clients: Vec<Client>,
}

impl ClientRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        ClientRegistry {
            clients: Vec::new(),
        }
    }

    /// Store a client unless its id is already taken.
    ///
    /// On `DuplicateId` the new client is dropped and the stored one is left as is.
    pub fn add_client(&mut self, client: Client) -> Result<&Client> {
        if self.contains(client.id()) {
            warn!(id = client.id(), "rejected client with duplicate id");
            return Err(RegistryError::DuplicateId { id: client.id() });
        }

        debug!(id = client.id(), name = client.name(), vip = client.is_vip(), "client added");
        self.clients.push(client);

        let index = self.clients.len() - 1;
        Ok(&self.clients[index])
    }

    /// All clients in insertion order.
    ///
    /// The iterator is lazy and can be cloned to walk the clients again.
    pub fn list_clients(&self) -> Result<impl Iterator<Item = &Client> + Clone> {
        if self.clients.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }

        Ok(self.clients.iter())
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Client> {
        self.clients.iter().find(|client| client.id() == id)
    }

    fn find_by_id_mut(&mut self, id: u32) -> Result<&mut Client> {
        self.clients
            .iter_mut()
            .find(|client| client.id() == id)
            .ok_or_else(|| {
                warn!(id, "client not found");
                RegistryError::NotFound { id }
            })
    }

    /// Replace a client's email in place (no format validation)
    pub fn update_email(&mut self, id: u32, new_email: impl Into<String>) -> Result<EmailChange> {
        let new_email = new_email.into();
        let client = self.find_by_id_mut(id)?;
        let old_email = client.replace_email(new_email.clone());

        debug!(id, %old_email, %new_email, "email updated");
        Ok(EmailChange {
            id,
            old_email,
            new_email,
        })
    }

    /// Remove a client, handing it back to the caller. The id becomes free again.
    pub fn delete_client(&mut self, id: u32) -> Result<Client> {
        let Some(position) = self.clients.iter().position(|client| client.id() == id) else {
            warn!(id, "client not found");
            return Err(RegistryError::NotFound { id });
        };

        let removed = self.clients.remove(position);
        debug!(id, name = removed.name(), "client deleted");
        Ok(removed)
    }

    /// Assign a category through the client's own `set_category`
    pub fn assign_category(&mut self, id: u32, category: Category) -> Result<CategoryChange> {
        let client = self.find_by_id_mut(id)?;
        let previous = client.set_category(category).inspect_err(|err| {
            warn!(id, %category, %err, "category assignment rejected");
        })?;

        debug!(id, %previous, current = %category, "category assigned");
        Ok(CategoryChange {
            id,
            previous,
            current: category,
        })
    }

    /// Assign a category given as a raw label (console input).
    ///
    /// Unknown ids are reported before unknown labels.
    pub fn assign_category_label(&mut self, id: u32, label: &str) -> Result<CategoryChange> {
        if !self.contains(id) {
            warn!(id, "client not found");
            return Err(RegistryError::NotFound { id });
        }

        let category: Category = label.parse()?;
        self.assign_category(id, category)
    }

    /// Clients in the given category, in insertion order
    pub fn list_by_category(
        &self,
        category: Category,
    ) -> Result<impl Iterator<Item = &Client> + Clone> {
        let matches = self
            .clients
            .iter()
            .filter(move |client| client.category() == category);

        if matches.clone().next().is_none() {
            return Err(RegistryError::EmptyResult { category });
        }

        Ok(matches)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Number of clients per category, in `Category::ALL` order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let count = self
                    .clients
                    .iter()
                    .filter(|client| client.category() == category)
                    .count();
                (category, count)
            })
            .collect()
    }

    /// Pretty JSON snapshot of every client, in insertion order
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.clients)?)
    }
}

// ============================================================================
// TESTS
// ============================================================================
