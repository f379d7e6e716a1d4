use crate::wire::Blob;

/// Lifecycle of one generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactState<T> {
    NotRequested,
    Pending,
    Ready(T),
}

/// Holder for one artifact plus a request epoch. Every generation attempt
/// takes a fresh epoch from `begin`; a completion is committed only when its
/// epoch is still the latest, so a superseded request can never overwrite a
/// newer result.
#[derive(Debug)]
pub struct ArtifactSlot<T> {
    state: ArtifactState<T>,
    epoch: u64,
}

impl<T> ArtifactSlot<T> {
    pub fn new() -> Self {
        ArtifactSlot {
            state: ArtifactState::NotRequested,
            epoch: 0,
        }
    }

    /// Mark the slot pending and hand out the epoch that must accompany the
    /// matching completion.
    pub fn begin(&mut self) -> u64 {
        self.epoch += 1;
        self.state = ArtifactState::Pending;
        self.epoch
    }

    /// Commit a completed generation. Returns false (and drops the value)
    /// when a newer request has started since `epoch` was handed out.
    pub fn complete(&mut self, epoch: u64, value: T) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.state = ArtifactState::Ready(value);
        true
    }

    pub fn state(&self) -> &ArtifactState<T> {
        &self.state
    }

    pub fn value(&self) -> Option<&T> {
        match &self.state {
            ArtifactState::Ready(v) => Some(v),
            _ => None,
        }
    }

}

impl<T> Default for ArtifactSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The three artifacts of the result view. The text slot is requested
/// automatically on entry; poster and website only on explicit user action.
/// A poster may settle to Ready(None), the explicit "no image" outcome.
#[derive(Debug, Default)]
pub struct GeneratedArtifacts {
    pub text: ArtifactSlot<String>,
    pub poster: ArtifactSlot<Option<Blob>>,
    pub website: ArtifactSlot<String>,
}

impl GeneratedArtifacts {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_walks_not_requested_pending_ready() {
        let mut slot: ArtifactSlot<String> = ArtifactSlot::new();
        assert_eq!(*slot.state(), ArtifactState::NotRequested);
        let e = slot.begin();
        assert_eq!(*slot.state(), ArtifactState::Pending);
        assert!(slot.complete(e, "klaar".into()));
        assert_eq!(slot.value().map(String::as_str), Some("klaar"));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut slot: ArtifactSlot<String> = ArtifactSlot::new();
        let first = slot.begin();
        let second = slot.begin();
        // the older request finishes last; it must not win
        assert!(slot.complete(second, "nieuw".into()));
        assert!(!slot.complete(first, "oud".into()));
        assert_eq!(slot.value().map(String::as_str), Some("nieuw"));
    }

    #[test]
    fn regeneration_replaces_the_previous_value() {
        let mut slot: ArtifactSlot<String> = ArtifactSlot::new();
        let e = slot.begin();
        slot.complete(e, "eerste".into());
        let e2 = slot.begin();
        assert_eq!(*slot.state(), ArtifactState::Pending);
        assert!(slot.value().is_none());
        slot.complete(e2, "tweede".into());
        assert_eq!(slot.value().map(String::as_str), Some("tweede"));
    }

    #[test]
    fn poster_can_settle_to_no_image() {
        let mut art = GeneratedArtifacts::new();
        let e = art.poster.begin();
        assert!(art.poster.complete(e, None));
        assert_eq!(art.poster.value(), Some(&None));
    }
}
