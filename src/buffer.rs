use crate::target::Target;
use std::fmt;

/// A 2-dimensional buffer.
///
/// This type may be used to contain colour data, depth data, or arbitrary pixel data. Items are stored row by row, so
/// the item at `[x, y]` lives at linear index `y * width + x`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Buffer2d<T> {
    size: [usize; 2],
    items: Vec<T>,
}

impl<T> Buffer2d<T> {
    /// Create a new buffer with the given size, filled with duplicates of the given element.
    #[inline]
    pub fn fill(size: [usize; 2], item: T) -> Self
    where
        T: Clone,
    {
        Self::fill_with(size, |_| item.clone())
    }

    /// Create a new buffer with the given size, filled by calling the function with the index of each element.
    ///
    /// # Panics
    ///
    /// This function will panic if `width * height` overflows.
    #[inline]
    pub fn fill_with<F: FnMut([usize; 2]) -> T>(size: [usize; 2], mut f: F) -> Self {
        let [width, height] = size;
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("Buffer of size {:?} has too many items", size));
        let mut items = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                items.push(f([x, y]));
            }
        }
        Self { size, items }
    }

    /// Get the size of this buffer as `[width, height]`.
    #[inline]
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    /// Convert the given index into a linear index that can be used to index into the raw data of this buffer.
    #[inline]
    pub fn linear_index(&self, [x, y]: [usize; 2]) -> usize {
        y * self.size[0] + x
    }

    /// View this buffer as a linear slice of elements.
    #[inline]
    pub fn raw(&self) -> &[T] {
        &self.items
    }

    /// View a single row of this buffer.
    ///
    /// # Panics
    ///
    /// This function will panic if the row is not within bounds.
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let [width, height] = self.size;
        assert!(y < height, "Attempted to read row {} of buffer of size {:?}", y, self.size);
        &self.items[y * width..(y + 1) * width]
    }

    /// Get a reference to the item at the given index, if it is within bounds.
    #[inline]
    pub fn get(&self, index: [usize; 2]) -> Option<&T> {
        if self.contains(index) {
            self.items.get(self.linear_index(index))
        } else {
            None
        }
    }

    /// Get a mutable reference to the item at the given index.
    ///
    /// # Panics
    ///
    /// This function will panic if the index is not within bounds.
    #[inline]
    pub fn get_mut(&mut self, index: [usize; 2]) -> &mut T {
        if !self.contains(index) {
            panic!(
                "Attempted to access buffer of size {:?} at out-of-bounds location {:?}",
                self.size, index
            );
        }
        let idx = self.linear_index(index);
        &mut self.items[idx]
    }

    #[inline]
    fn contains(&self, [x, y]: [usize; 2]) -> bool {
        x < self.size[0] && y < self.size[1]
    }
}

impl<T: Clone> Target for Buffer2d<T> {
    type Texel = T;

    #[inline]
    fn size(&self) -> [usize; 2] {
        self.size
    }

    #[inline]
    fn read(&self, x: usize, y: usize) -> Self::Texel {
        self.get([x, y])
            .unwrap_or_else(|| {
                panic!(
                    "Attempted to read buffer of size {:?} at out-of-bounds location {:?}",
                    self.size,
                    [x, y]
                )
            })
            .clone()
    }

    #[inline]
    fn write(&mut self, x: usize, y: usize, texel: Self::Texel) {
        if self.contains([x, y]) {
            let idx = self.linear_index([x, y]);
            self.items[idx] = texel;
        }
    }

    #[inline]
    fn clear(&mut self, texel: Self::Texel) {
        self.items.iter_mut().for_each(|item| *item = texel.clone());
    }
}

impl<T> fmt::Debug for Buffer2d<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Buffer2d(dimensions: {:?})", self.size)
    }
}
