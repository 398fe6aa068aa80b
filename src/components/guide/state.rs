// ABOUTME: State machine for the onboarding guide panel
// Tracks the step cursor and open/closed visibility

/// Fixed walkthrough messages, in order.
///
/// Content is carried over verbatim from the product copy, including the
/// known "tep 4" typo in the fifth entry (tracked as a content bug).
pub const GUIDE_STEPS: &[&str] = &[
    "Hi, Welcome! I will guide you step by step.",
    "Step 1: Please Sign Up or Login to continue.",
    "Step 2: Read the Instructions page carefully.",
    "Step 3: Go to Meals to estimate your calories if needed.",
    "tep 4: Open Predict page, fill important fields (Glucose, Carbs/hr, ICR, ISF, Weight, etc.) and hit Predict.",
    "Tip: Your result will appear on the right with safety checks.",
];

/// Guide panel state: a single step cursor plus visibility.
///
/// Invariant: `current_step` is always in `[0, GUIDE_STEPS.len() - 1]`.
/// Navigation is only offered where it keeps the cursor in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidePanelState {
    /// Index into [`GUIDE_STEPS`]
    pub current_step: usize,
    /// Whether the panel is visible
    pub is_open: bool,
}

impl GuidePanelState {
    pub fn new() -> Self {
        Self {
            current_step: 0,
            is_open: false,
        }
    }

    /// Number of steps in the walkthrough
    pub fn total_steps() -> usize {
        GUIDE_STEPS.len()
    }

    /// Text of the step the cursor is on
    pub fn current_text(&self) -> &'static str {
        GUIDE_STEPS[self.current_step]
    }

    /// Whether a Back control should be offered
    pub fn can_go_back(&self) -> bool {
        self.current_step > 0
    }

    /// Whether a Next control should be offered
    pub fn can_go_next(&self) -> bool {
        self.current_step + 1 < GUIDE_STEPS.len()
    }

    /// Open the panel, resetting the cursor to the first step.
    /// Every closed-to-open transition starts the walkthrough over.
    pub fn open(&mut self) {
        self.is_open = true;
        self.current_step = 0;
    }

    /// Force the panel closed. The cursor is left as-is since the next
    /// open always resets it.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip visibility. Opening resets to step 0; closing changes nothing
    /// beyond visibility.
    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Step backward. No-op at the first step.
    pub fn go_back(&mut self) -> bool {
        if self.can_go_back() {
            self.current_step -= 1;
            return true;
        }
        false
    }

    /// Step forward. No-op at the last step.
    pub fn go_next(&mut self) -> bool {
        if self.can_go_next() {
            self.current_step += 1;
            return true;
        }
        false
    }
}

impl Default for GuidePanelState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_closed() {
        let state = GuidePanelState::new();
        assert!(!state.is_open);
        assert_eq!(state.current_step, 0);
    }

    #[test]
    fn test_step_count() {
        assert_eq!(GuidePanelState::total_steps(), 6);
    }

    #[test]
    fn test_open_resets_cursor() {
        let mut state = GuidePanelState::new();
        state.open();
        state.go_next();
        state.go_next();
        assert_eq!(state.current_step, 2);

        state.close();
        assert_eq!(state.current_step, 2); // close leaves the cursor alone

        state.open();
        assert_eq!(state.current_step, 0); // reopen starts over
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = GuidePanelState::new();
        state.toggle();
        assert!(state.is_open);
        assert_eq!(state.current_step, 0);
        state.toggle();
        assert!(!state.is_open);
    }

    #[test]
    fn test_back_blocked_at_first_step() {
        let mut state = GuidePanelState::new();
        state.open();
        assert!(!state.can_go_back());
        assert!(!state.go_back());
        assert_eq!(state.current_step, 0);
    }

    #[test]
    fn test_next_blocked_at_last_step() {
        let mut state = GuidePanelState::new();
        state.open();
        while state.go_next() {}
        assert_eq!(state.current_step, GUIDE_STEPS.len() - 1);
        assert!(!state.can_go_next());
        assert!(!state.go_next());
        assert_eq!(state.current_step, GUIDE_STEPS.len() - 1);
    }

    #[test]
    fn test_next_then_back_returns_to_same_step() {
        let mut state = GuidePanelState::new();
        state.open();
        state.go_next();
        let snapshot = state.clone();
        state.go_next();
        state.go_back();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_scenario_walkthrough() {
        // Open -> step 0, Next x3 -> step 3, Back -> step 2, reopen -> step 0
        let mut state = GuidePanelState::new();
        state.toggle();
        assert_eq!(state.current_text(), GUIDE_STEPS[0]);
        assert!(!state.can_go_back());
        assert!(state.can_go_next());

        state.go_next();
        state.go_next();
        state.go_next();
        assert_eq!(state.current_step, 3);
        assert!(state.can_go_back());
        assert!(state.can_go_next());

        state.go_back();
        assert_eq!(state.current_step, 2);

        state.toggle();
        state.toggle();
        assert_eq!(state.current_step, 0);
    }

    #[test]
    fn test_step_content_preserved() {
        // Product copy is carried verbatim, typo included
        assert!(GUIDE_STEPS[4].starts_with("tep 4:"));
        assert!(GUIDE_STEPS[5].starts_with("Tip:"));
    }
}
