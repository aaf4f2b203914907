use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable key identifying one payment provider and its slot in the response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProviderId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProviderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProviderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Account profile reported by a single provider.
///
/// The balance is kept as text so that no precision or formatting is imposed on
/// what the upstream reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOption {
    pub account: String,
    pub status: String,
    pub balance: String,
    pub icon: String,
}

impl PaymentOption {
    pub fn new(
        account: impl Into<String>,
        status: impl Into<String>,
        balance: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            status: status.into(),
            balance: balance.into(),
            icon: icon.into(),
        }
    }
}
