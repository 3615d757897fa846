//! Scalar folds: numeric sums and string assembly.

/// A value that can absorb another with `+`.
///
/// Implemented for the numeric primitives (adding their own type) and for
/// `String`, which appends `String`, `&str` or `char` parts.
pub trait Accumulate<Rhs = Self> {
    /// Returns `self` with `rhs` added on the right.
    fn accumulate(self, rhs: &Rhs) -> Self;
}

macro_rules! impl_numeric_accumulate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Accumulate for $ty {
                fn accumulate(self, rhs: &$ty) -> $ty {
                    self + *rhs
                }
            }
        )*
    };
}

impl_numeric_accumulate!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Accumulate for String {
    fn accumulate(mut self, rhs: &String) -> String {
        self.push_str(rhs);
        self
    }
}

impl<'a> Accumulate<&'a str> for String {
    fn accumulate(mut self, rhs: &&'a str) -> String {
        self.push_str(rhs);
        self
    }
}

impl Accumulate<char> for String {
    fn accumulate(mut self, rhs: &char) -> String {
        self.push(*rhs);
        self
    }
}

/// Left fold with `+`, starting from `init`.
///
/// Works for numbers of one type and for `String` accumulating `String`,
/// `&str` or `char` parts.
///
/// ```
/// use standout_algo::sum;
///
/// assert_eq!(sum(&[1, 2, 3, 4, 5], 0), 15);
/// assert_eq!(sum(&["56", "7", "89"], String::from("01234")), "0123456789");
///
/// let words = vec!["ab".to_string(), "cd".to_string()];
/// assert_eq!(sum(&words, String::new()), "abcd");
/// ```
pub fn sum<T, A>(seq: &[A], init: T) -> T
where
    T: Accumulate<A>,
{
    seq.iter().fold(init, |acc, x| acc.accumulate(x))
}

/// Concatenates every part, in order, with no separator.
///
/// See also the [`concatenate!`](crate::concatenate!) macro for a
/// variadic call site.
pub fn concatenate<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().fold(String::new(), |mut acc, part| {
        acc.push_str(part.as_ref());
        acc
    })
}

/// Concatenates the strings of a slice, in order, with no separator.
pub fn concatenate_slice<S>(parts: &[S]) -> String
where
    S: AsRef<str>,
{
    let capacity = parts.iter().map(|part| part.as_ref().len()).sum();
    let mut result = String::with_capacity(capacity);
    for part in parts {
        result.push_str(part.as_ref());
    }
    result
}

/// Concatenates any number of string-like arguments.
///
/// ```
/// use standout_algo::concatenate;
///
/// let name = String::from("world");
/// assert_eq!(concatenate!("hello", ", ", name, "!"), "hello, world!");
/// assert_eq!(concatenate!(), "");
/// ```
#[macro_export]
macro_rules! concatenate {
    () => {
        ::std::string::String::new()
    };
    ($($part:expr),+ $(,)?) => {
        $crate::concatenate([$(::std::convert::AsRef::<str>::as_ref(&$part)),+])
    };
}
