//! The lazy identity monad.
//!
//! An [`Id<A>`] wraps a suspended computation producing an `A`. Nothing runs
//! when an `Id` is built or chained; the suspension is only evaluated by
//! [`Id::counit`]. The result is never cached, so forcing the same `Id` twice
//! runs the whole chain twice.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use funkit::control::Id;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//! let computation = Id::new(move || {
//!     counter.set(counter.get() + 1);
//!     10
//! })
//! .flat_map(|n: i32| Id::unit(n * 2));
//!
//! assert_eq!(runs.get(), 0);
//! assert_eq!(computation.counit(), 20);
//! assert_eq!(computation.counit(), 20);
//! assert_eq!(runs.get(), 2);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::compose::identity;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

#[cfg(feature = "persistent")]
use crate::persistent::List;

/// A suspended computation of an `A`.
///
/// Cloning an `Id` shares the suspension. `Id` is neither `Send` nor `Sync`.
///
/// # Laws
///
/// Equality is observational: two `Id`s are equal when forcing them yields
/// equal values.
///
/// - **Left identity**: `Id::unit(x).flat_map(f) ≡ f(x)`
/// - **Right identity**: `m.flat_map(Id::unit) ≡ m`
/// - **Associativity**: `m.flat_map(f).flat_map(g) ≡ m.flat_map(|x| f(x).flat_map(g))`
pub struct Id<A> {
    suspension: Rc<dyn Fn() -> A>,
}

impl<A: 'static> Id<A> {
    /// Suspends a computation without running it.
    #[inline]
    pub fn new<F>(suspension: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            suspension: Rc::new(suspension),
        }
    }

    /// Wraps an already computed value. Each force hands out a clone of it.
    #[inline]
    pub fn unit(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Forces the suspension, running it again on every call.
    #[inline]
    pub fn counit(&self) -> A {
        (self.suspension)()
    }

    /// Chains a computation that depends on this one's result.
    ///
    /// Neither this suspension nor `function` runs until the result is forced.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Id<B>
    where
        F: Fn(A) -> Id<B> + 'static,
        B: 'static,
    {
        Id::new(move || function(self.counit()).counit())
    }

    /// Maps a function over the eventual result.
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Id<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Id::new(move || function(self.counit()))
    }

    /// Lifts a plain function to one over suspensions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Id;
    ///
    /// let length = Id::lift_m(|text: String| text.len());
    /// assert_eq!(length(Id::unit(String::from("four"))).counit(), 4);
    /// ```
    pub fn lift_m<B, F>(function: F) -> impl Fn(Self) -> Id<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        move |suspended: Self| {
            let function = Rc::clone(&function);
            suspended.fmap(move |value| function(value))
        }
    }

    /// Lifts a binary function over two suspensions.
    ///
    /// Forcing the result forces `first`, then `second`.
    pub fn lift_m2<B, C, F>(function: F, first: Self, second: Id<B>) -> Id<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Id::new(move || function(first.counit(), second.counit()))
    }
}

impl<F: 'static> Id<F> {
    /// Applies a suspended function to a suspended argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Id;
    ///
    /// let increment = Id::unit(|n: i32| n + 1);
    /// assert_eq!(increment.ap(Id::unit(41)).counit(), 42);
    /// ```
    #[inline]
    pub fn ap<A, B>(self, argument: Id<A>) -> Id<B>
    where
        F: Fn(A) -> B,
        A: 'static,
        B: 'static,
    {
        Id::new(move || (self.counit())(argument.counit()))
    }
}

impl<A: 'static> Id<Id<A>> {
    /// Flattens a suspension of a suspension.
    #[inline]
    pub fn mu(self) -> Id<A> {
        self.flat_map(identity)
    }
}

#[cfg(feature = "persistent")]
impl<A: 'static> Id<A> {
    /// Turns a list of suspensions into one suspension of a list.
    ///
    /// Forcing the result forces every element, front to back, in a loop, so
    /// the depth of the suspension does not grow with the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Id;
    /// use funkit::persistent::List;
    ///
    /// let suspensions: List<Id<i32>> = (1..=3).map(Id::unit).collect();
    /// assert_eq!(Id::sequence(&suspensions).counit().to_array(), vec![1, 2, 3]);
    /// ```
    pub fn sequence(suspensions: &List<Self>) -> Id<List<A>> {
        let suspensions = suspensions.clone();
        Id::new(move || suspensions.iter().map(Self::counit).collect())
    }
}

static_assertions::assert_not_impl_any!(Id<i32>: Send, Sync);

impl<A> Clone for Id<A> {
    fn clone(&self) -> Self {
        Self {
            suspension: Rc::clone(&self.suspension),
        }
    }
}

impl<A> fmt::Debug for Id<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Id(<suspended>)")
    }
}

// =============================================================================
// Type class implementations
// =============================================================================

impl<A> TypeConstructor for Id<A> {
    type Inner = A;
    type WithType<B> = Id<B>;
}

impl<A: 'static> Functor for Id<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Id<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Self::fmap(self, function)
    }
}

impl<A: 'static> Applicative for Id<A> {
    #[inline]
    fn pure<B>(value: B) -> Id<B>
    where
        B: Clone + 'static,
    {
        Id::unit(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Id<B>, function: F) -> Id<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Self::lift_m2(function, self, other)
    }

    #[inline]
    fn apply<B, Output>(self, other: Id<B>) -> Id<Output>
    where
        A: Fn(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.ap(other)
    }
}

impl<A: 'static> Monad for Id<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Id<B>
    where
        F: Fn(A) -> Id<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    fn counted(runs: &Rc<Cell<usize>>, value: i32) -> Id<i32> {
        let runs = Rc::clone(runs);
        Id::new(move || {
            runs.set(runs.get() + 1);
            value
        })
    }

    #[rstest]
    fn test_unit_then_counit() {
        assert_eq!(Id::unit(5).counit(), 5);
    }

    #[rstest]
    fn test_construction_does_not_force() {
        let runs = Rc::new(Cell::new(0));
        let _suspended = counted(&runs, 1);
        assert_eq!(runs.get(), 0);
    }

    #[rstest]
    fn test_flat_map_is_lazy_until_forced() {
        let runs = Rc::new(Cell::new(0));
        let chained = counted(&runs, 3).flat_map(|n| Id::unit(n + 1));
        assert_eq!(runs.get(), 0);
        assert_eq!(chained.counit(), 4);
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn test_forcing_twice_reruns_the_chain() {
        let runs = Rc::new(Cell::new(0));
        let chained = counted(&runs, 3).fmap(|n| n * 10);
        chained.counit();
        chained.counit();
        assert_eq!(runs.get(), 2);
    }

    #[rstest]
    fn test_clone_shares_the_suspension() {
        let runs = Rc::new(Cell::new(0));
        let original = counted(&runs, 9);
        let copy = original.clone();
        assert_eq!(copy.counit(), original.counit());
        assert_eq!(runs.get(), 2);
    }

    #[rstest]
    fn test_mu_flattens() {
        let nested = Id::unit(Id::unit("inner"));
        assert_eq!(nested.mu().counit(), "inner");
    }

    #[rstest]
    fn test_ap_applies_suspended_function() {
        let double = Id::unit(|n: i32| n * 2);
        assert_eq!(double.ap(Id::unit(21)).counit(), 42);
    }

    #[rstest]
    fn test_lift_m2_forces_first_then_second() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let first_log = Rc::clone(&order);
        let second_log = Rc::clone(&order);
        let first = Id::new(move || {
            first_log.borrow_mut().push("first");
            1
        });
        let second = Id::new(move || {
            second_log.borrow_mut().push("second");
            2
        });

        let sum = Id::lift_m2(|a: i32, b: i32| a + b, first, second);
        assert!(order.borrow().is_empty());
        assert_eq!(sum.counit(), 3);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[rstest]
    fn test_lift_m_is_reusable() {
        let negate = Id::lift_m(|n: i32| -n);
        assert_eq!(negate(Id::unit(1)).counit(), -1);
        assert_eq!(negate(Id::unit(-2)).counit(), 2);
    }

    #[rstest]
    fn test_debug_does_not_force() {
        let runs = Rc::new(Cell::new(0));
        assert_eq!(format!("{:?}", counted(&runs, 0)), "Id(<suspended>)");
        assert_eq!(runs.get(), 0);
    }

    #[rstest]
    fn test_typeclass_pure_and_map2() {
        let lifted: Id<&str> = <Id<()>>::pure("pure");
        assert_eq!(lifted.counit(), "pure");

        let product = Applicative::map2(Id::unit(6), Id::unit(7), |a: i32, b: i32| a * b);
        assert_eq!(product.counit(), 42);
    }

    #[rstest]
    fn test_typeclass_replace_keeps_laziness() {
        let runs = Rc::new(Cell::new(0));
        let replaced = Functor::replace(counted(&runs, 1), 'x');
        assert_eq!(runs.get(), 0);
        assert_eq!(replaced.counit(), 'x');
        assert_eq!(runs.get(), 1);
    }
}
