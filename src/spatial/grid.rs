//! Dense grid over the chamber's integer cells

use std::ops::AddAssign;

use crate::core::types::Vec2;

/// Generic 2D grid with one value per unit cell, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Clone + Default> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            Some(&self.data[y * self.width + x])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x < self.width && y < self.height {
            Some(&mut self.data[y * self.width + x])
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = value;
        }
    }

    /// Cell coordinates for a position, or `None` if it lies outside the grid
    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> Option<(usize, usize)> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let (x, y) = pos.cell();
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Iterate over `(x, y, value)` for every cell
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (i % self.width, i / self.width, v))
    }

    pub fn values(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Default + AddAssign> Grid<T> {
    /// Collapse along y: one sum per column, indexed by x
    pub fn column_sums(&self) -> Vec<T> {
        let mut sums = vec![T::default(); self.width];
        for row in self.data.chunks(self.width.max(1)) {
            for (sum, &v) in sums.iter_mut().zip(row) {
                *sum += v;
            }
        }
        sums
    }
}
