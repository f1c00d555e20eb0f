//! Domain blocklist policy
//!
//! A fixed set of forbidden hostnames, built once at startup from
//! configuration. Matching is exact literal membership: `example.com` does
//! not block `sub.example.com`.

use std::collections::HashSet;

/// Set of hostnames to which navigation is forcibly redirected
#[derive(Debug, Clone, Default)]
pub struct BlockedDomainSet {
    domains: HashSet<String>,
}

impl BlockedDomainSet {
    /// Build the set from configured hostnames
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a hostname is blocked
    ///
    /// Pure predicate, O(1) set membership. No wildcard or subdomain
    /// matching.
    pub fn is_blocked(&self, hostname: &str) -> bool {
        self.domains.contains(hostname)
    }

    /// Number of configured entries
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// True when no domain is blocked
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_membership() {
        let set = BlockedDomainSet::new(["example.com", "test.com"]);
        assert!(set.is_blocked("example.com"));
        assert!(set.is_blocked("test.com"));
        assert!(!set.is_blocked("openai.com"));
    }

    #[test]
    fn test_no_subdomain_matching() {
        let set = BlockedDomainSet::new(["example.com"]);
        assert!(!set.is_blocked("sub.example.com"));
        assert!(!set.is_blocked("example.com.evil.org"));
    }

    #[test]
    fn test_empty_set_blocks_nothing() {
        let set = BlockedDomainSet::default();
        assert!(set.is_empty());
        assert!(!set.is_blocked("example.com"));
    }
}
