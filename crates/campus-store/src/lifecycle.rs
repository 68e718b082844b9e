//! View lifecycle and load state.
//!
//! A store hands out requests stamped with the generation of the view that
//! issued them. When the view is unmounted or remounted, results from the
//! older generation are dropped instead of mutating a retired view.

/// Progress of a store's initial (or explicit re-) load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadState {
    /// Not loaded yet
    #[default]
    Idle,
    /// A load is in flight
    Loading,
    /// Data is in memory; mutations are accepted
    Ready,
    /// The last load failed
    Errored,
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A message tagged with the view generation that requested it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamped<M> {
    pub generation: u64,
    pub message: M,
}

/// Mounted flag plus generation counter for one view.
#[derive(Debug, Clone, Default)]
pub struct ViewLifecycle {
    mounted: bool,
    generation: u64,
}

impl ViewLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new visit. Anything stamped before this is stale.
    pub fn mount(&mut self) -> u64 {
        self.mounted = true;
        self.generation += 1;
        self.generation
    }

    /// Retire the view. In-flight results will be discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stamp<M>(&self, message: M) -> Stamped<M> {
        Stamped {
            generation: self.generation,
            message,
        }
    }

    /// Unwrap a message if it belongs to the current, mounted generation.
    pub fn accept<M>(&self, stamped: Stamped<M>) -> Option<M> {
        (self.mounted && stamped.generation == self.generation).then_some(stamped.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_generation_is_accepted() {
        let mut lifecycle = ViewLifecycle::new();
        lifecycle.mount();
        let message = lifecycle.stamp("loaded");
        assert_eq!(lifecycle.accept(message), Some("loaded"));
    }

    #[test]
    fn unmounted_view_rejects_results() {
        let mut lifecycle = ViewLifecycle::new();
        lifecycle.mount();
        let message = lifecycle.stamp(1);
        lifecycle.unmount();
        assert_eq!(lifecycle.accept(message), None);
    }

    #[test]
    fn remount_makes_old_results_stale() {
        let mut lifecycle = ViewLifecycle::new();
        lifecycle.mount();
        let old = lifecycle.stamp(1);
        lifecycle.unmount();
        lifecycle.mount();
        let fresh = lifecycle.stamp(2);
        assert_eq!(lifecycle.accept(old), None);
        assert_eq!(lifecycle.accept(fresh), Some(2));
    }
}
