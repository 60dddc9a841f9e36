//! Front/back flip state for a project card, including the timed auto-return.
//!
//! DESIGN
//! ======
//! Every entry into the back side starts a new generation. The auto-return
//! timer captures the [`ReturnToken`] of the generation it was scheduled for
//! and is ignored if the card has since been returned (or re-flipped), so a
//! late timer can never flip a card that the user already turned back.

#[cfg(test)]
#[path = "flip_test.rs"]
mod flip_test;

/// Milliseconds a card stays on its back side before returning on its own.
pub const AUTO_RETURN_MS: u32 = 30_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlipSide {
    #[default]
    Front,
    Back,
}

/// Identifies one stay on the back side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReturnToken(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipState {
    side: FlipSide,
    generation: u64,
}

impl FlipState {
    pub fn side(&self) -> FlipSide {
        self.side
    }

    pub fn is_flipped(&self) -> bool {
        self.side == FlipSide::Back
    }

    /// "View model/service": front → back. Already on the back is a no-op,
    /// so the pending auto-return keeps its original deadline.
    pub fn show_back(&mut self) {
        if self.side == FlipSide::Front {
            self.side = FlipSide::Back;
            self.generation += 1;
        }
    }

    /// "View description": back → front, invalidating the pending auto-return.
    pub fn show_front(&mut self) {
        if self.side == FlipSide::Back {
            self.side = FlipSide::Front;
            self.generation += 1;
        }
    }

    /// Token an auto-return timer must present, while one is due.
    pub fn pending_return(&self) -> Option<ReturnToken> {
        self.is_flipped().then_some(ReturnToken(self.generation))
    }

    /// Timer-driven return. Returns `true` if the card actually flipped back.
    pub fn auto_return(&mut self, token: ReturnToken) -> bool {
        if self.pending_return() != Some(token) {
            return false;
        }
        self.show_front();
        true
    }
}
