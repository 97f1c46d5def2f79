//! A validating parser for fields pulled out of dynamic sources.
//!
//! [`Parser`] is a success/failure container decorated with the name of
//! the field being parsed and a required/optional disposition. Fetches
//! pull named fields out of any [`Lookup`] source; validations and
//! transformations chain through the capability traits, and failures
//! carry the field name to the final report.
//!
//! Unlike every other container here, `Parser` catches panics raised by
//! transformation closures and converts them to named failures: a parse
//! pipeline over untrusted input reports, it does not crash.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::capability::Mappable;
//! use monadkit::parser::{fetch_required, Parser, ValueKind};
//! use serde_json::json;
//!
//! let document = json!({"nickname": "Babe"});
//!
//! let nickname = fetch_required(&document, "nickname")
//!     .type_check(&[ValueKind::String])
//!     .map(|value| value.as_str().map(String::from).unwrap_or_default());
//! assert_eq!(nickname, Parser::success("Babe".to_string()).with_name("nickname"));
//!
//! let missing: Parser<serde_json::Value> = fetch_required(&document, "surname");
//! assert!(missing.is_failure());
//! ```

mod lookup;

pub use lookup::{Lookup, TypedPayload, ValueKind};

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::capability::{Chainable, Combinable, Kinded, Mappable};
use crate::engine::{ChainStep, Halt, LinearStep};

/// Whether an absent payload is an error or an accepted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Absence is a failure: the field must be present.
    Required,
    /// Absence is accepted: transformations pass it through untouched.
    Optional,
}

/// The resolution state of a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseState<T> {
    /// A successfully parsed payload.
    Valid(T),
    /// An accepted absence. Only occurs under the `Optional` disposition.
    Absent,
    /// A failed parse, with its message.
    Invalid(String),
}

/// A named, disposition-carrying parse result.
///
/// Equality is structural over state, name, and disposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser<T> {
    state: ParseState<T>,
    name: Option<String>,
    disposition: Disposition,
}

/// Fetches a mandatory field out of a source.
///
/// Presence yields a required success named `key`; absence yields
/// `Failure("Is required")` named `key`.
pub fn fetch_required<S>(source: &S, key: &str) -> Parser<S::Item>
where
    S: Lookup + ?Sized,
{
    match source.lookup(key) {
        Some(value) => Parser {
            state: ParseState::Valid(value),
            name: Some(key.to_string()),
            disposition: Disposition::Required,
        },
        None => Parser {
            state: ParseState::Invalid("Is required".to_string()),
            name: Some(key.to_string()),
            disposition: Disposition::Required,
        },
    }
}

/// Fetches an optional field out of a source.
///
/// Absence is not an error: it yields an optional-disposition absent
/// parse named `key`, which later transformations pass through untouched.
pub fn fetch_optional<S>(source: &S, key: &str) -> Parser<S::Item>
where
    S: Lookup + ?Sized,
{
    let state = source
        .lookup(key)
        .map_or(ParseState::Absent, ParseState::Valid);
    Parser {
        state,
        name: Some(key.to_string()),
        disposition: Disposition::Optional,
    }
}

impl<T> Parser<T> {
    /// Wraps an already parsed payload as a required success.
    pub fn success(value: T) -> Self {
        Self {
            state: ParseState::Valid(value),
            name: None,
            disposition: Disposition::Required,
        }
    }

    /// Wraps a failure message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            state: ParseState::Invalid(message.into()),
            name: None,
            disposition: Disposition::Required,
        }
    }

    /// Names the field this parse concerns. Failure reports are decorated
    /// with the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The field name, when one has been attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The resolution state.
    pub const fn state(&self) -> &ParseState<T> {
        &self.state
    }

    /// Whether the parse succeeded with a payload.
    pub const fn is_valid(&self) -> bool {
        matches!(self.state, ParseState::Valid(_))
    }

    /// Whether the parse failed.
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, ParseState::Invalid(_))
    }

    /// Whether the parse accepted an absent payload.
    pub const fn is_absent(&self) -> bool {
        matches!(self.state, ParseState::Absent)
    }

    /// Demands a payload: an accepted absence becomes
    /// `Failure("Is required")` and the disposition becomes required.
    #[must_use]
    pub fn required(self) -> Self {
        let state = match self.state {
            ParseState::Absent => ParseState::Invalid("Is required".to_string()),
            resolved => resolved,
        };
        Self {
            state,
            name: self.name,
            disposition: Disposition::Required,
        }
    }

    /// Relaxes the disposition: later transformations pass an absence
    /// through untouched. A failure stays a failure.
    #[must_use]
    pub fn optional(self) -> Self {
        Self {
            disposition: Disposition::Optional,
            ..self
        }
    }

    /// Validates the payload against a predicate, failing with `message`
    /// when it does not hold.
    ///
    /// A panic inside the predicate is caught and converted to
    /// `Failure("Unable to validate: …")` with the current name.
    #[must_use]
    pub fn validate<P>(self, message: &str, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let ParseState::Valid(value) = self.state else {
            return self;
        };
        let state = match catch_unwind(AssertUnwindSafe(|| predicate(&value))) {
            Ok(true) => ParseState::Valid(value),
            Ok(false) => ParseState::Invalid(message.to_string()),
            Err(panic) => ParseState::Invalid(format!(
                "Unable to validate: {}",
                describe_panic(panic.as_ref())
            )),
        };
        Self {
            state,
            name: self.name,
            disposition: self.disposition,
        }
    }

    /// Validates that the payload belongs to one of the given kinds,
    /// failing with `Must be type <kinds>` otherwise.
    #[must_use]
    pub fn type_check(self, kinds: &[ValueKind]) -> Self
    where
        T: TypedPayload,
    {
        let rendered = kinds
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let message = format!("Must be type {rendered}");
        self.validate(&message, |value| kinds.contains(&value.kind_of()))
    }

    /// Resolves the parse: a payload yields `Some`, an accepted absence
    /// yields `None`, and a failure invokes `on_failure` with the message
    /// decorated as `"<name>: <message>"` before yielding `None`.
    pub fn extract<F>(self, on_failure: F) -> Option<T>
    where
        F: FnOnce(String),
    {
        match self.state {
            ParseState::Valid(value) => Some(value),
            ParseState::Absent => None,
            ParseState::Invalid(message) => {
                on_failure(decorate(self.name.as_deref(), &message));
                None
            }
        }
    }

    /// Resolves the parse, panicking on failure.
    ///
    /// The unsafe extraction: use only when the caller asserts the parse
    /// cannot have failed.
    ///
    /// # Panics
    ///
    /// Panics if the parse failed, with the name-decorated message.
    pub fn unwrap_parsed(self) -> Option<T> {
        match self.state {
            ParseState::Valid(value) => Some(value),
            ParseState::Absent => None,
            ParseState::Invalid(message) => panic!(
                "unsafe extraction of a failed parse: {}",
                decorate(self.name.as_deref(), &message)
            ),
        }
    }
}

impl<T: Lookup> Parser<T> {
    /// Fetches a mandatory field out of this parse's payload, chaining
    /// through `bind`.
    #[must_use]
    pub fn fetch_required(self, key: &str) -> Parser<T::Item> {
        self.bind(|source| fetch_required(&source, key))
    }

    /// Fetches an optional field out of this parse's payload, chaining
    /// through `bind`.
    #[must_use]
    pub fn fetch_optional(self, key: &str) -> Parser<T::Item> {
        self.bind(|source| fetch_optional(&source, key))
    }
}

fn decorate(name: Option<&str>, message: &str) -> String {
    name.map_or_else(|| message.to_string(), |name| format!("{name}: {message}"))
}

fn describe_panic(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "opaque panic payload".to_string()
    }
}

fn carry<A, B>(parser: Parser<A>) -> Parser<B> {
    let state = match parser.state {
        ParseState::Invalid(message) => ParseState::Invalid(message),
        _ => ParseState::Absent,
    };
    Parser {
        state,
        name: parser.name,
        disposition: parser.disposition,
    }
}

impl<T> Kinded for Parser<T> {
    type Payload = T;
    type Of<B> = Parser<B>;
}

impl<T> Mappable for Parser<T> {
    /// Transforms the payload, keeping the current name. A panic in the
    /// closure is caught and converted to `Failure("Unable to map: …")`.
    fn map<B, F>(self, mut function: F) -> Parser<B>
    where
        F: FnMut(T) -> B,
    {
        let ParseState::Valid(value) = self.state else {
            return carry(self);
        };
        let state = match catch_unwind(AssertUnwindSafe(move || function(value))) {
            Ok(mapped) => ParseState::Valid(mapped),
            Err(panic) => {
                ParseState::Invalid(format!("Unable to map: {}", describe_panic(panic.as_ref())))
            }
        };
        Parser {
            state,
            name: self.name,
            disposition: self.disposition,
        }
    }
}

impl<T> Combinable for Parser<T> {
    fn pure<B>(value: B) -> Parser<B> {
        Parser::success(value)
    }

    /// Combines two parses; when both fail, the left failure wins.
    fn lift2<B, C, F>(self, other: Parser<B>, mut function: F) -> Parser<C>
    where
        T: Clone,
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        self.bind(move |a| other.map(move |b| function(a.clone(), b)))
    }
}

impl<T> Chainable for Parser<T> {
    /// Chains into the parser produced by `function`. A panic in the
    /// closure is caught and converted to `Failure("Unable to bind: …")`
    /// with the current name; an optional-disposition parse passes an
    /// absence through and re-relaxes the produced parser.
    fn bind<B, F>(self, function: F) -> Parser<B>
    where
        F: FnOnce(T) -> Parser<B>,
    {
        let ParseState::Valid(value) = self.state else {
            return carry(self);
        };
        let bound = match catch_unwind(AssertUnwindSafe(move || function(value))) {
            Ok(parser) => parser,
            Err(panic) => {
                return Parser {
                    state: ParseState::Invalid(format!(
                        "Unable to bind: {}",
                        describe_panic(panic.as_ref())
                    )),
                    name: self.name,
                    disposition: self.disposition,
                }
            }
        };
        match self.disposition {
            Disposition::Required => bound,
            Disposition::Optional => bound.optional(),
        }
    }
}

impl<A, B> ChainStep<Parser<B>> for Parser<A> {
    type Payload = A;

    fn feed(self, resume: &dyn Fn(A) -> Parser<B>) -> Parser<B> {
        let ParseState::Valid(value) = self.state else {
            return carry(self);
        };
        match self.disposition {
            Disposition::Required => resume(value),
            Disposition::Optional => resume(value).optional(),
        }
    }
}

impl<A, B> LinearStep<Parser<B>> for Parser<A> {
    type Payload = A;

    fn step(self) -> Result<A, Halt<Parser<B>>> {
        match self.state {
            ParseState::Valid(value) => Ok(value),
            _ => Err(Halt::new(carry(self))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    #[rstest]
    fn structural_equality_covers_state_name_and_disposition() {
        assert_eq!(Parser::success(5), Parser::success(5));
        assert_ne!(Parser::success(5), Parser::success(6));
        assert_ne!(Parser::success(5), Parser::<i32>::failure("err"));
        assert_eq!(Parser::<i32>::failure("err"), Parser::failure("err"));
        assert_ne!(Parser::success(5), Parser::success(5).with_name("age"));
        assert_ne!(Parser::success(5), Parser::success(5).optional());
    }

    #[rstest]
    fn fetch_required_names_the_field() {
        let document = json!({"age": 30});
        let parsed = fetch_required(&document, "age");
        assert_eq!(parsed.name(), Some("age"));
        assert!(parsed.is_valid());
    }

    #[rstest]
    fn fetch_required_fails_on_absence() {
        let document = json!({});
        let parsed: Parser<Value> = fetch_required(&document, "age");
        assert_eq!(
            parsed,
            Parser::failure("Is required").with_name("age")
        );
    }

    #[rstest]
    fn fetch_optional_accepts_absence() {
        let document = json!({});
        let parsed: Parser<Value> = fetch_optional(&document, "age");
        assert!(parsed.is_absent());
        assert!(!parsed.is_failure());
        assert_eq!(parsed.name(), Some("age"));
    }

    #[rstest]
    fn map_keeps_the_name() {
        let parsed = Parser::success(5).with_name("age").map(|x| x + 1);
        assert_eq!(parsed, Parser::success(6).with_name("age"));
    }

    #[rstest]
    fn map_converts_panics_to_named_failures() {
        let parsed: Parser<i32> = Parser::success(5)
            .with_name("age")
            .map(|_| panic!("boom"));
        assert_eq!(
            parsed,
            Parser::failure("Unable to map: boom").with_name("age")
        );
    }

    #[rstest]
    fn bind_converts_panics_to_named_failures() {
        let parsed: Parser<i32> = Parser::success(5)
            .with_name("age")
            .bind(|_| panic!("boom"));
        assert_eq!(
            parsed,
            Parser::failure("Unable to bind: boom").with_name("age")
        );
    }

    #[rstest]
    fn bind_takes_the_produced_name() {
        let parsed = Parser::success(5)
            .with_name("left")
            .bind(|x| Parser::success(x).with_name("right"));
        assert_eq!(parsed.name(), Some("right"));
    }

    #[rstest]
    fn optional_bind_passes_absence_through() {
        let document = json!({});
        let mut calls = 0;
        let parsed = fetch_optional(&document, "age").bind(|value: Value| {
            calls += 1;
            Parser::success(value)
        });
        assert!(parsed.is_absent());
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn optional_bind_relaxes_the_produced_parser() {
        let document = json!({"age": 30});
        let parsed = fetch_optional(&document, "age").bind(Parser::success);
        assert_eq!(parsed, Parser::success(json!(30)).optional());
    }

    #[rstest]
    fn required_turns_absence_into_failure() {
        let document = json!({});
        let parsed: Parser<Value> = fetch_optional(&document, "age").required();
        assert_eq!(
            parsed,
            Parser::failure("Is required").with_name("age")
        );
    }

    #[rstest]
    fn required_keeps_a_payload() {
        let parsed = Parser::success(5).optional().required();
        assert_eq!(parsed, Parser::success(5));
    }

    #[rstest]
    fn optional_keeps_a_failure() {
        let parsed: Parser<i32> = Parser::failure("broken").optional();
        assert!(parsed.is_failure());
    }

    #[rstest]
    fn validate_accepts_and_rejects() {
        let accepted = Parser::success(30).validate("Must be positive", |n| *n > 0);
        assert_eq!(accepted, Parser::success(30));

        let rejected = Parser::success(-1)
            .with_name("age")
            .validate("Must be positive", |n| *n > 0);
        assert_eq!(
            rejected,
            Parser::failure("Must be positive").with_name("age")
        );
    }

    #[rstest]
    fn validate_converts_panics() {
        let parsed = Parser::success(5).validate("unused", |_| panic!("boom"));
        assert_eq!(parsed, Parser::failure("Unable to validate: boom"));
    }

    #[rstest]
    fn type_check_names_the_expected_kinds() {
        let parsed = Parser::success(json!(5)).type_check(&[ValueKind::String, ValueKind::Array]);
        assert_eq!(
            parsed,
            Parser::failure("Must be type String, Array")
        );

        let accepted = Parser::success(json!(5)).type_check(&[ValueKind::Number]);
        assert_eq!(accepted, Parser::success(json!(5)));
    }

    #[rstest]
    fn extract_decorates_failure_messages() {
        let mut report = None;
        let extracted = Parser::<i32>::failure("Is required")
            .with_name("firstName")
            .extract(|message| report = Some(message));
        assert_eq!(extracted, None);
        assert_eq!(report.as_deref(), Some("firstName: Is required"));
    }

    #[rstest]
    fn extract_yields_payload_and_absence() {
        assert_eq!(Parser::success(5).extract(|_| unreachable!()), Some(5));
        let document = json!({});
        let absent: Option<Value> =
            fetch_optional(&document, "age").extract(|_| unreachable!());
        assert_eq!(absent, None);
    }

    #[test]
    #[should_panic(expected = "firstName: Is required")]
    fn unwrap_parsed_panics_with_the_decorated_message() {
        let document = json!({});
        fetch_required(&document, "firstName").unwrap_parsed();
    }

    #[rstest]
    fn instance_fetch_chains_into_nested_documents() {
        let document = json!({"player": {"age": 30}});
        let parsed = fetch_required(&document, "player").fetch_required("age");
        assert_eq!(parsed, Parser::success(json!(30)).with_name("age"));
    }

    #[rstest]
    fn instance_fetch_reports_the_missing_inner_field() {
        let document = json!({"player": {}});
        let parsed = fetch_required(&document, "player").fetch_required("age");
        assert_eq!(
            parsed,
            Parser::failure("Is required").with_name("age")
        );
    }

    #[rstest]
    fn lift2_left_failure_wins() {
        let left: Parser<i32> = Parser::failure("left");
        let right: Parser<i32> = Parser::failure("right");
        assert_eq!(left.lift2(right, |a, b| a + b), Parser::failure("left"));
    }
}
