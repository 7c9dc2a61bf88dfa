//! # `tenure` - Move-Only Owning Pointers
//!
//! Single-ownership smart pointers with pluggable disposal policies: a
//! [`UniqueBox`] owns exactly one heap resource and guarantees its disposal
//! through its policy exactly once, at a deterministic point. It is the
//! primitive beneath exception-safe resource handling, factory return
//! values, and ownership-transferring parameters.
//!
//! ## Safety Guarantees
//!
//! - **Single disposal authority**: at most one live handle owns a given
//!   pointer. The type is move-only — duplicating it is a compile-time
//!   error, and a moved-from handle is statically unusable.
//! - **Compile-time compatibility rules**: which pointee types and which
//!   policy types may interoperate under converting moves is decided
//!   entirely by trait bounds ([`CoercesTo`], `Into`). Inadmissible
//!   conversions — element-covariant arrays, scalar/array mixing,
//!   mismatched policies — do not compile and cost nothing at runtime.
//! - **Zero-overhead storage**: a handle with a stateless policy is exactly
//!   one pointer wide (asserted at compile time below).
//!
//! ## Architecture
//!
//! 1. **Disposal policies** ([`delete`]): the [`Deleter`] capability,
//!    the [`DefaultDelete`] drop-and-free policy, closure and
//!    function-pointer adapters, and borrowed (`&mut D`) policies.
//! 2. **Compatibility rules** ([`coerce`]): the [`CoercesTo`] trait and
//!    the [`coercible!`] macro declaring unsizing coercions.
//! 3. **The handle** ([`unique`]): [`UniqueBox<T, D>`](UniqueBox),
//!    composing the two into the move-only ownership state machine
//!    (construct, move, convert, release, reset, swap, compare, destroy).
//!    Array-kind handles are `UniqueBox<[T]>`.
//!
//! ## Example
//!
//! ```rust
//! use tenure::{coercible, UniqueBox};
//!
//! trait Shape {
//!     fn area(&self) -> f64;
//! }
//!
//! struct Rect {
//!     w: f64,
//!     h: f64,
//! }
//!
//! impl Shape for Rect {
//!     fn area(&self) -> f64 {
//!         self.w * self.h
//!     }
//! }
//!
//! coercible! { Rect => dyn Shape; }
//!
//! // Owning construction, dereference, and ownership transfer by move.
//! let rect = UniqueBox::new(Rect { w: 3.0, h: 4.0 });
//! let mut shape: UniqueBox<dyn Shape> = rect.coerce();
//! assert_eq!(shape.area(), 12.0);
//!
//! // Strip ownership without disposing, then adopt it back.
//! let raw = shape.release().unwrap();
//! assert!(shape.is_empty());
//! // SAFETY: `raw` was released from a default-policy handle.
//! shape = unsafe { UniqueBox::from_raw(raw.as_ptr()) };
//!
//! // Disposal happens exactly once, when `shape` goes out of scope.
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod coerce;
pub mod delete;
pub mod unique;

mod array;
mod cmp;
mod store;

pub use coerce::CoercesTo;
pub use delete::{DefaultDelete, DeleteWith, Deleter};
pub use unique::UniqueBox;

// Compile-time assertions for the zero-overhead layout claims.
const _: () = {
    use core::mem;

    // A stateless policy costs nothing: the handle is exactly one pointer.
    assert!(mem::size_of::<UniqueBox<u64>>() == mem::size_of::<*mut u64>());
    assert!(mem::align_of::<UniqueBox<u64>>() == mem::align_of::<*mut u64>());

    // Array-kind handles are one fat pointer.
    assert!(mem::size_of::<UniqueBox<[u64]>>() == mem::size_of::<*mut [u64]>());

    // The default policy is a ZST; a borrowed policy costs one reference.
    assert!(mem::size_of::<DefaultDelete>() == 0);
    assert!(
        mem::size_of::<UniqueBox<u64, &'static mut DefaultDelete>>()
            == mem::size_of::<*mut u64>() + mem::size_of::<usize>()
    );
};
