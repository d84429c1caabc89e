//! Validation functionality
//!
//! Optional checks run over decoded interfaces:
//! - Duplicate names within a scope
//! - DTMI syntax of declared and referenced identifiers
//!
//! Findings are warnings. Decoding never depends on them.

pub mod identifiers;
pub mod names;

pub use identifiers::{IdentifierValidator, InvalidIdentifier, is_valid_dtmi};
pub use names::{DuplicateName, NameValidator};

use crate::models::Interface;

/// Result of validating one interface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Interface DTMI
    pub interface: String,
    pub duplicate_names: Vec<DuplicateName>,
    pub invalid_identifiers: Vec<InvalidIdentifier>,
}

impl ValidationReport {
    /// Run every check over an interface
    pub fn for_interface(interface: &Interface) -> Self {
        Self {
            interface: interface.id.clone(),
            duplicate_names: NameValidator::new().check_interface(interface),
            invalid_identifiers: IdentifierValidator::new().check_interface(interface),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.duplicate_names.is_empty() && self.invalid_identifiers.is_empty()
    }

    /// Human readable messages, one per finding
    pub fn messages(&self) -> Vec<String> {
        let names = self.duplicate_names.iter().map(|d| {
            format!(
                "{}: name '{}' used {} times in {}",
                self.interface, d.name, d.occurrences, d.scope
            )
        });
        let ids = self.invalid_identifiers.iter().map(|i| {
            format!(
                "{}: invalid DTMI '{}' at {}",
                self.interface, i.value, i.location
            )
        });
        names.chain(ids).collect()
    }
}
