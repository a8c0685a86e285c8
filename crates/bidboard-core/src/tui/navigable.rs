//! Row cursor shared by the bid table and the skills lists.

/// A table with a row cursor.
///
/// Moves only adjust the raw index, which may run past the last row;
/// the owner clamps it in `resolve_selection()` before the next draw.
pub trait NavigableTable {
    fn selected(&self) -> usize;
    fn selected_mut(&mut self) -> &mut usize;

    /// Unpins the row the cursor follows across re-sorts. Lists without
    /// pinning keep the default.
    fn clear_tracked(&mut self) {}

    /// Moves the cursor by `delta` rows, negative is up.
    fn step(&mut self, delta: isize) {
        let moved = self.selected().saturating_add_signed(delta);
        self.jump_to(moved);
    }

    fn jump_to(&mut self, idx: usize) {
        *self.selected_mut() = idx;
        self.clear_tracked();
    }

    fn select_up(&mut self) {
        self.step(-1);
    }

    fn select_down(&mut self) {
        self.step(1);
    }

    fn home(&mut self) {
        self.jump_to(0);
    }

    /// Last row; clamped on resolve.
    fn end(&mut self) {
        self.jump_to(usize::MAX);
    }
}
