/// Which card of a grid the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverTracker {
    hovered: Option<usize>,
}

impl HoverTracker {
    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Returns `true` when the hovered card changed.
    pub fn enter(&mut self, index: usize) -> bool {
        self.hovered.replace(index) != Some(index)
    }

    /// Leaving a card only clears the hover if that card still owns it;
    /// enter/leave pairs of neighbouring cards can arrive out of order.
    pub fn leave(&mut self, index: usize) -> bool {
        if self.hovered == Some(index) {
            self.hovered = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave() {
        let mut hover = HoverTracker::default();
        assert!(hover.enter(2));
        assert!(hover.is_hovered(2));
        assert!(!hover.enter(2));

        assert!(hover.leave(2));
        assert!(!hover.is_hovered(2));
        assert_eq!(hover, HoverTracker::default());
    }

    #[test]
    fn test_stale_leave_is_ignored() {
        let mut hover = HoverTracker::default();
        hover.enter(0);
        hover.enter(1);
        assert!(!hover.leave(0));
        assert!(hover.is_hovered(1));
    }
}
