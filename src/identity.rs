//! Identifier generation for new records

use uuid::Uuid;

/// Entity prefixes keep stored ids recognizable when inspecting raw
/// collections, while the UUID suffix keeps them unique without
/// coordination.
pub const EQUIPMENT_PREFIX: &str = "eq_";
pub const RENTAL_PREFIX: &str = "r_";
pub const MAINTENANCE_PREFIX: &str = "m_";
pub const NOTIFICATION_PREFIX: &str = "n_";

/// Produces opaque, prefixed identifiers for new records.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate an id with the given entity prefix.
    pub fn generate(&self, prefix: &str) -> String {
        format!("{}{}", prefix, Uuid::new_v4().simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_prefix_and_uniqueness() {
        let ids = IdGenerator::new();
        let a = ids.generate(RENTAL_PREFIX);
        let b = ids.generate(RENTAL_PREFIX);
        assert!(a.starts_with("r_"));
        assert_ne!(a, b);
    }
}
