/// Tracks which fetch is current so late completions can be dropped.
///
/// Every fetch takes a new generation. A completion is accepted only if no
/// newer fetch was started since and the owner is still mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchGuard {
    generation: u64,
    mounted: bool,
}

impl Default for FetchGuard {
    fn default() -> Self {
        Self {
            generation: 0,
            mounted: true,
        }
    }
}

impl FetchGuard {
    pub fn issue(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn accepts(&self, generation: u64) -> bool {
        self.mounted && generation == self.generation
    }

    pub fn current(&self) -> u64 {
        self.generation
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

/// Outcome of handing a completed fetch back to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    Applied,
    Discarded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_generation_is_accepted() {
        let mut guard = FetchGuard::default();
        let first = guard.issue();
        let second = guard.issue();
        assert!(!guard.accepts(first));
        assert!(guard.accepts(second));
    }

    #[test]
    fn test_unmount_rejects_everything() {
        let mut guard = FetchGuard::default();
        let gen = guard.issue();
        guard.unmount();
        assert!(!guard.accepts(gen));
        assert!(!guard.is_mounted());
    }
}
