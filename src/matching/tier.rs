//! Strict/flexible address tiers.

/// How a hospital address relates to the user's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    /// The normalized address starts with the normalized location.
    Strict,
    /// The normalized address contains the normalized location elsewhere.
    Flexible,
}

impl MatchTier {
    /// Classify a normalized hospital address against a normalized location.
    ///
    /// Returns `None` when the location does not occur in the address.
    pub fn classify(address: &str, location: &str) -> Option<Self> {
        if address.starts_with(location) {
            Some(MatchTier::Strict)
        } else if address.contains(location) {
            Some(MatchTier::Flexible)
        } else {
            None
        }
    }
}

/// Collects matches per tier and keeps only the best non-empty tier.
#[derive(Debug, Clone)]
pub struct TieredMatches<T> {
    strict: Vec<T>,
    flexible: Vec<T>,
}

impl<T> Default for TieredMatches<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TieredMatches<T> {
    pub fn new() -> Self {
        TieredMatches {
            strict: Vec::new(),
            flexible: Vec::new(),
        }
    }

    pub fn push(&mut self, tier: MatchTier, item: T) {
        match tier {
            MatchTier::Strict => self.strict.push(item),
            MatchTier::Flexible => self.flexible.push(item),
        }
    }

    pub fn strict_len(&self) -> usize {
        self.strict.len()
    }

    pub fn flexible_len(&self) -> usize {
        self.flexible.len()
    }

    /// Strict matches if there are any, otherwise flexible matches.
    pub fn into_preferred(self) -> Vec<T> {
        if self.strict.is_empty() {
            self.flexible
        } else {
            self.strict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            MatchTier::classify("대전서구관저동", "대전서구관저동"),
            Some(MatchTier::Strict)
        );
        assert_eq!(
            MatchTier::classify("세종시대전서구관저동로", "대전서구관저동"),
            Some(MatchTier::Flexible)
        );
        assert_eq!(MatchTier::classify("대전중구문화로", "대전서구"), None);
    }

    #[test]
    fn test_empty_location_is_strict_everywhere() {
        assert_eq!(MatchTier::classify("부산해운대구", ""), Some(MatchTier::Strict));
    }

    #[test]
    fn test_strict_suppresses_flexible() {
        let mut matches = TieredMatches::new();
        matches.push(MatchTier::Flexible, "a");
        matches.push(MatchTier::Strict, "b");
        matches.push(MatchTier::Flexible, "c");

        assert_eq!(matches.strict_len(), 1);
        assert_eq!(matches.flexible_len(), 2);
        assert_eq!(matches.into_preferred(), vec!["b"]);
    }

    #[test]
    fn test_flexible_when_no_strict() {
        let mut matches = TieredMatches::new();
        matches.push(MatchTier::Flexible, 1);
        matches.push(MatchTier::Flexible, 2);

        assert_eq!(matches.into_preferred(), vec![1, 2]);
        assert!(TieredMatches::<u8>::new().into_preferred().is_empty());
    }
}
