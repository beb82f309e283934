use crc32fast::Hasher;

/// Derive a stable seed from an arbitrary scope string (page id, base SKU).
pub fn scope_seed(scope: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(scope.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator scoped to one page or product.
///
/// IDs are `"{seed}-{n}"`, deterministic for a given scope and call
/// sequence. Callers that mix generated IDs with pre-existing ones use
/// [`IdGenerator::next_free`] to skip collisions.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(scope: &str) -> Self {
        Self {
            seed: scope_seed(scope),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next sequential ID.
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Generate the next ID not already claimed by `taken`.
    pub fn next_free(&mut self, mut taken: impl FnMut(&str) -> bool) -> String {
        loop {
            let id = self.next_id();
            if !taken(&id) {
                return id;
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_seed_is_stable() {
        assert_eq!(scope_seed("page-1"), scope_seed("page-1"));
        assert_ne!(scope_seed("page-1"), scope_seed("page-2"));
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::new("page-1");
        let a = ids.next_id();
        let b = ids.next_id();

        assert!(a.ends_with("-1"));
        assert!(b.ends_with("-2"));
        assert!(a.starts_with(ids.seed()));
    }

    #[test]
    fn test_next_free_skips_taken_ids() {
        let mut ids = IdGenerator::new("page-1");
        let first = ids.next_id();

        let mut fresh = IdGenerator::new("page-1");
        let id = fresh.next_free(|candidate| candidate == first);

        assert_ne!(id, first);
        assert!(id.ends_with("-2"));
    }
}
