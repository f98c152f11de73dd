/// Target of a requested deletion, shown in the confirmation dialog.
#[derive(Clone, PartialEq, Debug)]
pub struct PendingDelete {
    pub id: u32,
    pub label: String,
}

/// Holds at most one pending delete target per screen. Requesting a new
/// deletion while one is pending replaces the previous target, so the
/// confirmation can never act on a stale id.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DeleteConfirm {
    pending: Option<PendingDelete>,
}

impl DeleteConfirm {
    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn request(&mut self, id: u32, label: impl Into<String>) {
        self.pending = Some(PendingDelete {
            id,
            label: label.into(),
        });
    }

    /// Dialog dismissed: drop the target without any network call.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Dialog confirmed: hand the target to the caller exactly once and
    /// clear it, so a second confirm has nothing to act on.
    pub fn confirm(&mut self) -> Option<PendingDelete> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_clears_the_target_without_confirming() {
        let mut confirm = DeleteConfirm::default();
        confirm.request(7, "Tomate");
        assert!(confirm.is_open());
        confirm.cancel();
        assert!(confirm.pending().is_none());
        assert_eq!(confirm.confirm(), None);
    }

    #[test]
    fn confirm_yields_the_target_exactly_once() {
        let mut confirm = DeleteConfirm::default();
        confirm.request(7, "Tomate");
        let target = confirm.confirm().expect("target pending");
        assert_eq!(target.id, 7);
        assert_eq!(target.label, "Tomate");
        assert_eq!(confirm.confirm(), None);
        assert!(!confirm.is_open());
    }

    #[test]
    fn a_new_request_replaces_the_previous_target() {
        let mut confirm = DeleteConfirm::default();
        confirm.request(7, "Tomate");
        confirm.request(9, "Alface");
        let target = confirm.confirm().expect("target pending");
        assert_eq!((target.id, target.label.as_str()), (9, "Alface"));
    }
}
