/// A repository listed under the configured account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub name: String,
    pub url: String,
    pub popularity: u64,
}

impl RepositoryRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>, popularity: u64) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            popularity,
        }
    }
}

/// Repositories returned by a single listing call, most popular first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositorySet {
    repositories: Vec<RepositoryRef>,
}

impl RepositorySet {
    /// Builds a set ranked by descending popularity.
    ///
    /// The sort is stable, so repositories with equal popularity keep the
    /// order in which the directory returned them.
    pub fn ranked(mut repositories: Vec<RepositoryRef>) -> Self {
        repositories.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        Self { repositories }
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepositoryRef> {
        self.repositories.iter()
    }

    /// Names in ranked order, used as match candidates
    pub fn names(&self) -> Vec<String> {
        self.repositories.iter().map(|r| r.name.clone()).collect()
    }

    /// The first `limit` repositories in ranked order
    pub fn top(&self, limit: usize) -> &[RepositoryRef] {
        let end = limit.min(self.repositories.len());
        &self.repositories[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_orders_by_descending_popularity() {
        let set = RepositorySet::ranked(vec![
            RepositoryRef::new("low", "https://example.com/low", 1),
            RepositoryRef::new("high", "https://example.com/high", 42),
            RepositoryRef::new("mid", "https://example.com/mid", 7),
        ]);

        assert_eq!(set.names(), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_ranked_keeps_listing_order_for_ties() {
        let set = RepositorySet::ranked(vec![
            RepositoryRef::new("first", "u1", 3),
            RepositoryRef::new("second", "u2", 3),
            RepositoryRef::new("third", "u3", 5),
        ]);

        assert_eq!(set.names(), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_top_is_bounded_by_length() {
        let set = RepositorySet::ranked(vec![
            RepositoryRef::new("a", "u1", 2),
            RepositoryRef::new("b", "u2", 1),
        ]);

        assert_eq!(set.top(12).len(), 2);
        assert_eq!(set.top(1)[0].name, "a");
        assert!(RepositorySet::default().top(12).is_empty());
    }
}
