//! Common code for working with landmark collections.

/// A landmark position in normalized image coordinates plus relative depth.
pub type Position = [f32; 3];

/// An ordered collection of landmark positions.
///
/// Landmarks have no identity across frames; a collection describes a single
/// detection result and lives for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmarks {
    positions: Box<[Position]>,
}

impl Landmarks {
    /// Creates a new [`Landmarks`] collection containing `len` preallocated landmarks.
    ///
    /// All landmarks will start with all coordinates at `0.0`.
    pub fn new(len: usize) -> Self {
        Self {
            positions: vec![[0.0, 0.0, 0.0]; len].into_boxed_slice(),
        }
    }

    /// Creates a [`Landmarks`] collection from a list of positions.
    pub fn from_positions<I: IntoIterator<Item = Position>>(positions: I) -> Self {
        Self {
            positions: positions.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Landmark> + Clone + '_ {
        (0..self.positions.len()).map(|i| self.get(i))
    }

    pub fn get(&self, index: usize) -> Landmark {
        Landmark::new(self.positions[index])
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [Position] {
        &mut self.positions
    }

    /// Computes the arithmetic mean of all landmark positions.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty. Averaging zero landmarks has no
    /// meaningful result, so this fails fast instead of dividing by zero.
    pub fn average_position(&self) -> Position {
        assert!(
            !self.positions.is_empty(),
            "cannot average an empty landmark collection"
        );

        let mut center = [0.0; 3];
        for pos in self.positions() {
            center[0] += pos[0] / self.positions().len() as f32;
            center[1] += pos[1] / self.positions().len() as f32;
            center[2] += pos[2] / self.positions().len() as f32;
        }
        center
    }

    pub fn map_positions(&mut self, mut f: impl FnMut(Position) -> Position) {
        for pos in self.positions_mut() {
            *pos = f(*pos);
        }
    }
}

/// A landmark in 3D space.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Landmark {
    pos: Position,
}

impl Landmark {
    pub fn new(position: Position) -> Self {
        Self { pos: position }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }
}
