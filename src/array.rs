//! Array-kind construction surface.
//!
//! An array-kind handle is `UniqueBox<[T]>`: the pointer is fat, carrying
//! the element count, so disposal drops and frees the whole buffer. Element
//! access rides `Deref` to the slice — indexing is the slice's
//! bounds-checked one, with `get_unchecked` available for the unchecked
//! contract.

use crate::unique::UniqueBox;

impl<T> UniqueBox<[T]> {
    /// Takes ownership of `vec`'s elements as an owned slice under the
    /// default policy.
    ///
    /// ```
    /// use tenure::UniqueBox;
    ///
    /// let primes = UniqueBox::from_vec(vec![2_u32, 3, 5, 7]);
    /// assert_eq!(primes.len(), 4);
    /// assert_eq!(primes[2], 5);
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_box(vec.into_boxed_slice())
    }
}

impl<T> From<Vec<T>> for UniqueBox<[T]> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T> FromIterator<T> for UniqueBox<[T]> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
