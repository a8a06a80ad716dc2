/// One-way visibility switch for a `.reveal` element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one scroll sample. Once the element's top has come within
    /// `offset` px of the viewport bottom the latch stays set.
    pub fn observe(&mut self, element_top: f64, viewport_height: f64, offset: f64) -> bool {
        if !self.revealed && element_top < viewport_height - offset {
            self.revealed = true;
        }
        self.revealed
    }
}
