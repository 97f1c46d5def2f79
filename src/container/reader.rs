//! Reader - an environment-reading computation.
//!
//! A `Reader<R, A>` wraps a function `R -> A` and composes such functions
//! while implicitly threading the same environment through all of them.
//!
//! # Note on the capability traits
//!
//! Reader exposes `map`/`bind`/`lift2`/`pure` as inherent methods rather
//! than implementing the capability traits: the wrapped `Rc<dyn Fn>`
//! requires `Fn + 'static` closures, which the trait signatures do not
//! carry. The methods behave identically to their trait counterparts.
//!
//! Reader has no suspension point — the wrapped function is total and
//! cannot pause — so it deliberately implements neither of the chaining
//! engine's step contracts. Using it inside [`engine::run`](crate::engine::run)
//! or [`engine::chain`](crate::engine::chain) is a usage error, rejected at
//! compile time; compose it directly instead.
//!
//! # Laws
//!
//! - Identity: `reader.map(|x| x)` runs identically to `reader`
//! - Left identity: `Reader::pure(a).bind(f)` runs identically to `f(a)`
//! - Ask retrieval: `Reader::ask().run(r) == r`
//!
//! # Examples
//!
//! ```rust
//! use monadkit::container::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     greeting: String,
//! }
//!
//! let computation: Reader<Config, String> = Reader::ask()
//!     .bind(|config: Config| Reader::pure(format!("{}, world", config.greeting)));
//!
//! let config = Config { greeting: "hello".to_string() };
//! assert_eq!(computation.run(config), "hello, world");
//! ```

use std::rc::Rc;

/// A computation that reads from an environment.
///
/// `Reader<R, A>` represents a function from an environment `R` to a value
/// `A`. The environment is read-only and shared across every composed
/// computation; the function itself is opaque and can only be invoked.
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Wraps a function from environment to result.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Lifts a value into a computation that ignores its environment.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Runs the computation with the given environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::container::Reader;
    ///
    /// let doubled: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(doubled.run(21), 42);
    /// ```
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Post-composes a function onto the computation's result.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let previous = self.run_function;
        Reader::new(move |environment| function(previous(environment)))
    }

    /// Threads the environment through this computation and into the
    /// computation produced by `function`.
    pub fn bind<B, F>(self, function: F) -> Reader<R, B>
    where
        R: Clone,
        B: 'static,
        F: Fn(A) -> Reader<R, B> + 'static,
    {
        let previous = self.run_function;
        Reader::new(move |environment: R| {
            let value = previous(environment.clone());
            function(value).run(environment)
        })
    }

    /// Combines two computations over the same environment.
    pub fn lift2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        R: Clone,
        A: Clone,
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let function = Rc::new(function);
        self.bind(move |a| {
            let function = Rc::clone(&function);
            other.clone().map(move |b| function(a.clone(), b))
        })
    }
}

impl<R> Reader<R, R>
where
    R: 'static,
{
    /// The computation that returns its environment unchanged.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// A computation that projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }
}
