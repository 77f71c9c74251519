//! Shared-secret access control.
//!
//! A credential is an opaque password drawn from a fixed allowlist. There are
//! no users and no sessions: possessing a listed password is the whole check.

use std::collections::HashSet;

use crate::error::{DiscloError, DiscloResult};

/// Header (and query parameter) carrying the credential.
pub const PASSWORD_HEADER: &str = "X-Password";

/// Immutable allowlist of accepted passwords.
#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
    passwords: HashSet<String>,
}

impl CredentialSet {
    /// Build a set from any iterator of passwords. Blank entries are dropped.
    pub fn new<I, S>(passwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let passwords = passwords
            .into_iter()
            .map(Into::into)
            .map(|p: String| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self { passwords }
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.passwords.contains(candidate)
    }

    /// Check a candidate credential, returning it back on success.
    pub fn verify<'a>(&self, candidate: Option<&'a str>) -> DiscloResult<&'a str> {
        match candidate {
            Some(c) if self.contains(c) => Ok(c),
            _ => Err(DiscloError::InvalidCredential),
        }
    }
}

/// Pick the credential from the header or the query string.
///
/// The header wins when both are supplied, even if it is the wrong one.
pub fn select_credential<'a>(header: Option<&'a str>, query: Option<&'a str>) -> Option<&'a str> {
    header.or(query)
}
