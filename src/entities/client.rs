// 👤 Client Entity - identity + profile data
//
// "The id is IDENTITY (assigned by the caller, never changes),
//  name/email/category are VALUES (email and category change through the registry)"
//
// VIP clients are not a separate type: they are a Client whose kind carries
// the discount rate. Rendering switches on the kind.

use crate::entities::Category;
use crate::error::{RegistryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discount applied to VIP clients unless another rate is given
pub const DEFAULT_VIP_DISCOUNT: f64 = 0.20;

// ============================================================================
// CLIENT KIND
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClientKind {
    Standard,

    /// Fraction in [0, 1)
    Vip { discount_rate: f64 },
}

// ============================================================================
// CLIENT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawClient")]
pub struct Client {
    // ========================================================================
    // IDENTITY (never changes)
    // ========================================================================
    id: u32,

    // ========================================================================
    // VALUES
    // ========================================================================
    name: String,
    email: String,
    category: Category,
    #[serde(flatten)]
    kind: ClientKind,

    // ========================================================================
    // METADATA
    // ========================================================================
    registered_at: DateTime<Utc>,
}

/// Wire shape of a client before the VIP rules are checked
#[derive(Deserialize)]
struct RawClient {
    id: u32,
    name: String,
    email: String,
    category: Category,
    #[serde(flatten)]
    kind: ClientKind,
    registered_at: DateTime<Utc>,
}

impl TryFrom<RawClient> for Client {
    type Error = RegistryError;

    fn try_from(raw: RawClient) -> Result<Self> {
        if let ClientKind::Vip { discount_rate } = raw.kind {
            check_discount(discount_rate)?;

            if raw.category != Category::Vip {
                return Err(RegistryError::CategoryLocked {
                    id: raw.id,
                    requested: raw.category,
                });
            }
        }

        Ok(Client {
            id: raw.id,
            name: raw.name,
            email: raw.email,
            category: raw.category,
            kind: raw.kind,
            registered_at: raw.registered_at,
        })
    }
}

fn check_discount(discount_rate: f64) -> Result<()> {
    // NaN fails both comparisons
    if !(0.0..1.0).contains(&discount_rate) {
        return Err(RegistryError::InvalidDiscount {
            rate: discount_rate,
        });
    }

    Ok(())
}

impl Client {
    /// Create a standard client; category starts as `Unassigned`
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Client {
            id,
            name: name.into(),
            email: email.into(),
            category: Category::Unassigned,
            kind: ClientKind::Standard,
            registered_at: Utc::now(),
        }
    }

    /// Create a VIP client with the default 20% discount
    pub fn vip(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Client {
            category: Category::Vip,
            kind: ClientKind::Vip {
                discount_rate: DEFAULT_VIP_DISCOUNT,
            },
            ..Client::new(id, name, email)
        }
    }

    /// Create a VIP client with an explicit discount rate in [0, 1)
    pub fn vip_with_discount(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        discount_rate: f64,
    ) -> Result<Self> {
        check_discount(discount_rate)?;

        let mut client = Client::vip(id, name, email);
        client.kind = ClientKind::Vip { discount_rate };
        Ok(client)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn kind(&self) -> &ClientKind {
        &self.kind
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn is_vip(&self) -> bool {
        matches!(self.kind, ClientKind::Vip { .. })
    }

    pub fn discount_rate(&self) -> Option<f64> {
        match self.kind {
            ClientKind::Standard => None,
            ClientKind::Vip { discount_rate } => Some(discount_rate),
        }
    }

    /// Replace the category, returning the previous one.
    ///
    /// VIP clients only accept `Category::Vip`.
    pub fn set_category(&mut self, category: Category) -> Result<Category> {
        if self.is_vip() && category != Category::Vip {
            return Err(RegistryError::CategoryLocked {
                id: self.id,
                requested: category,
            });
        }

        Ok(std::mem::replace(&mut self.category, category))
    }

    /// Replace the email, returning the previous one
    pub(crate) fn replace_email(&mut self, email: String) -> String {
        std::mem::replace(&mut self.email, email)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} | category: {}",
            self.id, self.name, self.email, self.category
        )?;

        match self.kind {
            ClientKind::Standard => Ok(()),
            ClientKind::Vip { discount_rate } => {
                // Whole percent, truncated. Basis points are rounded first so
                // 0.29 shows as 29%; rates are below 1 so this never reaches 100%.
                let basis_points = ((discount_rate * 10_000.0).round() as u32).min(9_999);
                write!(f, " | discount: {}%", basis_points / 100)
            }
        }
    }
}
