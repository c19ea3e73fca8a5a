use crate::Position;

/// Contains the data for the two opposite corners of a rectangle.
/// One corner will have the minimum x and minimum y values, the other will have the maximum x and maximum y values.
///
/// Both corners are inside the area, so the smallest area still covers one cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Area {
    /// The min x & the min y position.
    min: Position,
    /// The max x & the max y position.
    max: Position,
}

impl Area {
    /// Constructs a new [`Area`] covering from the small x & y to the large x & y.
    /// The positions passed into this method will be sorted into the minimum and maximum corners.
    ///
    /// # Examples
    /// ```
    /// # use gol_lib::Area;
    /// let area = Area::new((1, 4), (10, 0));
    /// // Notice how they are sorted into the max & min corners.
    /// assert_eq!(area.get_min(), (1, 0).into());
    /// assert_eq!(area.get_max(), (10, 4).into());
    /// ```
    pub fn new(pos1: impl Into<Position>, pos2: impl Into<Position>) -> Self {
        let pos1 = pos1.into();
        let pos2 = pos2.into();

        let min = Position::new(pos1.x.min(pos2.x), pos1.y.min(pos2.y));
        let max = Position::new(pos1.x.max(pos2.x), pos1.y.max(pos2.y));

        Self { min, max }
    }

    /// Constructs the [`Area`] of `width` by `height` cells with its minimum corner at the origin.
    ///
    /// Returns [`None`] if either size is zero, as an area always covers at least one cell.
    ///
    /// ```
    /// # use gol_lib::Area;
    /// let area = Area::with_size(3, 2).unwrap();
    /// assert_eq!(area.get_max(), (2, 1).into());
    /// assert!(Area::with_size(0, 2).is_none());
    /// ```
    pub fn with_size(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        Some(Self::new(Position::new(0, 0), Position::new(width - 1, height - 1)))
    }

    /// Gets the minimum x & minimum y of the area.
    pub fn get_min(&self) -> Position {
        self.min
    }

    /// Gets the maximum x & maximum y of the area.
    pub fn get_max(&self) -> Position {
        self.max
    }

    /// A range from the minimum x to the maximum x (inclusive).
    pub fn x_range(&self) -> std::ops::RangeInclusive<usize> {
        self.min.x..=self.max.x
    }

    /// A range from the minimum y to the maximum y (inclusive).
    pub fn y_range(&self) -> std::ops::RangeInclusive<usize> {
        self.min.y..=self.max.y
    }

    /// The amount of cells covered in the x axis.
    #[doc(alias = "x_size")]
    pub fn width(&self) -> usize {
        self.max.x - self.min.x + 1
    }

    /// The amount of cells covered in the y axis.
    #[doc(alias = "y_size")]
    pub fn height(&self) -> usize {
        self.max.y - self.min.y + 1
    }

    /// Whether the given position lies within this area.
    pub fn contains(&self, position: impl Into<Position>) -> bool {
        let position = position.into();
        self.x_range().contains(&position.x) && self.y_range().contains(&position.y)
    }

    /// Returns an iterator over all the positions within this area, increasing x then y.
    ///
    /// # Examples
    /// ```rust
    /// # use gol_lib::Area;
    /// let area = Area::new((1, 1), (2, 2));
    /// let mut iterate_over = area.iterate_over();
    ///
    /// // A (usize, usize) can be converted into a Position with .into()
    /// assert_eq!(iterate_over.next().unwrap(), (1, 1).into());
    /// assert_eq!(iterate_over.next().unwrap(), (2, 1).into());
    /// assert_eq!(iterate_over.next().unwrap(), (1, 2).into());
    /// assert_eq!(iterate_over.next().unwrap(), (2, 2).into());
    /// assert!(iterate_over.next().is_none());
    /// ```
    pub fn iterate_over(&self) -> impl Iterator<Item = Position> + use<> {
        let x_range = self.x_range();
        self.y_range()
            .flat_map(move |y| x_range.clone().map(move |x| Position::new(x, y)))
    }
}
