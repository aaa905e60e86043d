//! The combinator base.
//!
//! Every other module in the crate is built out of these functions:
//!
//! - [`identity`]: The I combinator
//! - [`compose`]: The B combinator, `compose(f, g)(x) = f(g(x))`
//! - [`constant`] / [`constant_once`]: The K combinator
//! - [`flip`]: The C combinator over curried functions
//! - [`ap`]: The S combinator, `ap(f, g)(k) = f(k)(g(k))`
//! - [`curry`], [`curry3`], [`uncurry`]: Conversion between tupled and curried forms
//! - [`promote`]: Lifts an element function to a function over vectors

use std::rc::Rc;

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose(identity, f)` is equivalent to `f`
/// - `compose(f, identity)` is equivalent to `f`
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use funkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes two functions right to left.
///
/// `compose(f, g)(x) == f(g(x))`. Composition is associative, and
/// [`identity`] is its unit on both sides.
///
/// # Examples
///
/// ```
/// use funkit::compose::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// let composed = compose(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator in combinatory logic. The value is cloned
/// on every call, so the returned function can be called any number of times.
///
/// # Examples
///
/// ```
/// use funkit::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// The single-use K combinator.
///
/// Moves `value` out on its only call, so no `Clone` bound is needed. This is
/// the selector behind [`Pair::fst`](crate::control::Pair::fst).
///
/// # Examples
///
/// ```
/// use funkit::compose::constant_once;
///
/// let keep = constant_once::<_, i32>(String::from("kept"));
/// assert_eq!(keep(0), "kept");
/// ```
#[inline]
pub fn constant_once<T, U>(value: T) -> impl FnOnce(U) -> T {
    move |_| value
}

/// Reverses the argument order of a curried binary function.
///
/// `flip(f)(b)(a) == f(a)(b)`.
///
/// Also known as the C combinator. The second argument is cloned each time
/// the partially applied function is called, so partial applications are
/// reusable. The partial application is boxed because its closure type
/// cannot be named in the return type.
///
/// # Laws
///
/// - **Flip definition**: `flip(f)(b)(a) == f(a)(b)`
/// - **Double flip identity**: `flip(flip(f))(a)(b) == f(a)(b)`
///
/// # Examples
///
/// ```
/// use funkit::compose::flip;
///
/// let subtract = |minuend: i32| move |subtrahend: i32| minuend - subtrahend;
/// let flipped = flip(subtract);
///
/// assert_eq!(subtract(10)(3), 7);
/// assert_eq!(flipped(3)(10), 7);
/// ```
pub fn flip<A, B, C, F, G>(function: F) -> impl Fn(B) -> Box<dyn Fn(A) -> C>
where
    F: Fn(A) -> G + 'static,
    G: FnOnce(B) -> C,
    A: 'static,
    B: Clone + 'static,
    C: 'static,
{
    let function = Rc::new(function);
    move |second: B| -> Box<dyn Fn(A) -> C> {
        let function = Rc::clone(&function);
        Box::new(move |first: A| function(first)(second.clone()))
    }
}

/// Applies two functions to the same argument and applies the first result
/// to the second.
///
/// `ap(f, g)(k) == f(k)(g(k))`. This is the S (substitution) combinator, and
/// the reader applicative's `<*>`.
///
/// # Examples
///
/// ```
/// use funkit::compose::ap;
///
/// let add = |x: i32| move |y: i32| x + y;
/// let double = |x: i32| x * 2;
///
/// // add(5)(double(5)) = 5 + 10
/// assert_eq!(ap(add, double)(5), 15);
/// ```
#[inline]
pub fn ap<K, B, C, F, G, H>(function: F, argument: G) -> impl Fn(K) -> C
where
    F: Fn(K) -> H,
    H: FnOnce(B) -> C,
    G: Fn(K) -> B,
    K: Clone,
{
    move |input: K| function(input.clone())(argument(input))
}

/// Converts a two-argument function into curried form.
///
/// `curry(f)(a)(b) == f(a, b)`. The arity is fixed by the function chosen:
/// use [`curry3`] for three arguments. The first argument is cloned on each
/// call of the partial application.
///
/// # Examples
///
/// ```
/// use funkit::compose::curry;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry(multiply);
/// let double = curried(2);
/// assert_eq!(double(5), 10);
/// assert_eq!(double(7), 14);
/// ```
pub fn curry<A, B, C, F>(function: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    F: Fn(A, B) -> C + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    let function = Rc::new(function);
    move |first: A| -> Box<dyn Fn(B) -> C> {
        let function = Rc::clone(&function);
        Box::new(move |second: B| function(first.clone(), second))
    }
}

/// Converts a three-argument function into curried form.
///
/// `curry3(f)(a)(b)(c) == f(a, b, c)`.
///
/// # Examples
///
/// ```
/// use funkit::compose::curry3;
///
/// let volume = curry3(|width: u32, height: u32, depth: u32| width * height * depth);
/// assert_eq!(volume(2)(3)(4), 24);
/// ```
#[allow(clippy::type_complexity)]
pub fn curry3<A, B, C, D, F>(function: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>>
where
    F: Fn(A, B, C) -> D + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    D: 'static,
{
    let function = Rc::new(function);
    move |first: A| -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>> {
        let function = Rc::clone(&function);
        Box::new(move |second: B| -> Box<dyn Fn(C) -> D> {
            let function = Rc::clone(&function);
            let first = first.clone();
            Box::new(move |third: C| function(first.clone(), second.clone(), third))
        })
    }
}

/// Converts a curried binary function into one taking both arguments at once.
///
/// `uncurry(f)(a, b) == f(a)(b)`.
///
/// # Examples
///
/// ```
/// use funkit::compose::{curry, uncurry};
///
/// let add = |x: i32| move |y: i32| x + y;
/// assert_eq!(uncurry(add)(2, 3), 5);
///
/// // curry and uncurry are inverses under application
/// let roundtrip = curry(uncurry(add));
/// assert_eq!(roundtrip(2)(3), add(2)(3));
/// ```
#[inline]
pub fn uncurry<A, B, C, F, G>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |first, second| function(first)(second)
}

/// Promotes a function on elements to a function on vectors.
///
/// # Examples
///
/// ```
/// use funkit::compose::promote;
///
/// let lengths = promote(|word: &str| word.len());
/// assert_eq!(lengths(vec!["a", "abc"]), vec![1, 3]);
/// ```
#[inline]
pub fn promote<A, B, F>(function: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> B,
{
    move |elements| elements.into_iter().map(&function).collect()
}
