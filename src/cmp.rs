//! Relational and equality operators over the raw address.
//!
//! Two handles compare by the (thin) address of what they own, never by the
//! pointee's contents; an empty handle compares as the null address. The
//! ordering is the strict order on raw pointers. Comparisons work across
//! handles of differing pointee and policy types.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::delete::Deleter;
use crate::unique::UniqueBox;

impl<T: ?Sized, D: Deleter<T>, U: ?Sized, E: Deleter<U>> PartialEq<UniqueBox<U, E>>
    for UniqueBox<T, D>
{
    fn eq(&self, other: &UniqueBox<U, E>) -> bool {
        self.thin() == other.thin()
    }
}

impl<T: ?Sized, D: Deleter<T>> Eq for UniqueBox<T, D> {}

impl<T: ?Sized, D: Deleter<T>, U: ?Sized, E: Deleter<U>> PartialOrd<UniqueBox<U, E>>
    for UniqueBox<T, D>
{
    fn partial_cmp(&self, other: &UniqueBox<U, E>) -> Option<Ordering> {
        Some(self.thin().cmp(&other.thin()))
    }
}

impl<T: ?Sized, D: Deleter<T>> Ord for UniqueBox<T, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.thin().cmp(&other.thin())
    }
}

impl<T: ?Sized, D: Deleter<T>> Hash for UniqueBox<T, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.thin().hash(state);
    }
}
