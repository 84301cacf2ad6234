//! Relative pointer output.

use enigo::{Enigo, MouseControllable};

/// Emits relative pointer displacements.
///
/// Only relative motion is supported; there is no absolute positioning and
/// no button handling.
pub trait Pointer {
    fn move_relative(&mut self, dx: f32, dy: f32);
}

/// [`Pointer`] backed by the OS cursor via `enigo`.
///
/// The OS moves the cursor in whole pixels, so the fractional part of each
/// displacement is carried over to the next call instead of being rounded
/// away. Small per-frame movements would otherwise never add up.
pub struct EnigoPointer {
    enigo: Enigo,
    carry_x: f32,
    carry_y: f32,
}

impl EnigoPointer {
    pub fn new() -> Self {
        Self {
            enigo: Enigo::new(),
            carry_x: 0.0,
            carry_y: 0.0,
        }
    }
}

impl Default for EnigoPointer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pointer for EnigoPointer {
    fn move_relative(&mut self, dx: f32, dy: f32) {
        let x = dx + self.carry_x;
        let y = dy + self.carry_y;
        let round_x = x.round();
        let round_y = y.round();
        self.carry_x = x - round_x;
        self.carry_y = y - round_y;

        self.enigo
            .mouse_move_relative(round_x as i32, round_y as i32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pointer that records the rounded displacements, with the same
    /// fractional carry as [`EnigoPointer`].
    struct RecordingPointer {
        carry_x: f32,
        carry_y: f32,
        moves: Vec<(i32, i32)>,
    }

    impl RecordingPointer {
        fn new() -> Self {
            Self {
                carry_x: 0.0,
                carry_y: 0.0,
                moves: Vec::new(),
            }
        }
    }

    impl Pointer for RecordingPointer {
        fn move_relative(&mut self, dx: f32, dy: f32) {
            let x = dx + self.carry_x;
            let y = dy + self.carry_y;
            let round_x = x.round();
            let round_y = y.round();
            self.carry_x = x - round_x;
            self.carry_y = y - round_y;
            self.moves.push((round_x as i32, round_y as i32));
        }
    }

    #[test]
    fn fractional_moves_accumulate() {
        let mut pointer = RecordingPointer::new();
        for _ in 0..4 {
            pointer.move_relative(0.25, -0.25);
        }

        let total_x: i32 = pointer.moves.iter().map(|m| m.0).sum();
        let total_y: i32 = pointer.moves.iter().map(|m| m.1).sum();
        assert_eq!((total_x, total_y), (1, -1));
    }
}
