//! The variadic `compose!` macro.

/// Composes any number of functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. Each step is built with the
/// [`compose`](crate::compose::compose) combinator, so the macro is just a
/// right fold of `compose` over its arguments.
///
/// # Syntax
///
/// - `compose!(f)` - `f` itself
/// - `compose!(f, g)` - `compose(f, g)`
/// - `compose!(f, g, h, ...)` - `compose(f, compose!(g, h, ...))`
///
/// # Examples
///
/// ```
/// use funkit::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// Associativity:
///
/// ```
/// use funkit::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose($outer_function, $crate::compose!($($remaining_functions),+))
    };
}
