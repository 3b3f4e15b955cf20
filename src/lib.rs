//! `optspec` describes a single command line option through a compact spec string.
//!
//! A spec string declares an option's names, how many values it takes, and the type of those values:
//! ```console
//! NAME[ATTR][=TYPE]
//! ```
//! The resulting [`OptionSpec`] is then handed values by an argument matcher, which it validates and accumulates.
//! `optspec` does not walk `argv` itself, nor does it aggregate options; it is the primitive those layers are built on.
//!
//! # Usage
//! ```
//! use optspec::{OptionSpec, OptionValue, Value};
//!
//! let mut verbose = OptionSpec::parse("v|verbose").unwrap();
//! let mut output = OptionSpec::parse("o|output:=s").unwrap();
//! let mut include = OptionSpec::parse("I|include+").unwrap();
//! let mut jobs = OptionSpec::parse("j|jobs?=i").unwrap();
//! jobs.set_value_name("N").set_description("Parallel jobs.");
//!
//! // A matcher would drive these from `-v -o out.txt -I a -I b --jobs 4`.
//! verbose.set_value("1").unwrap();
//! output.set_value("out.txt").unwrap();
//! include.push_value("a").unwrap();
//! include.push_value("b").unwrap();
//! jobs.set_value("4").unwrap();
//!
//! assert_eq!(output.id().as_deref(), Some("output"));
//! assert_eq!(include.values(), Some(&[Value::from("a"), Value::from("b")][..]));
//! assert_eq!(jobs.value(), Some(&OptionValue::Scalar(Value::Integer(4))));
//! assert_eq!(jobs.readable_spec(), "-j, --jobs [<N>]");
//! ```
//!
//! # Spec Strings
//! **Names**</br>
//! * `v`: a single character name is the short name (`-v`).
//! * `verbose`: a longer name is the long name (`--verbose`).
//! * `v|verbose`: both; the part before the first `|` is the short name.
//! Either side of the `|` may be empty (ex: `|x` declares the single character *long* name `--x`).
//!
//! Names are made of ASCII letters, digits and `-`.
//!
//! **Attributes**</br>
//! ```console
//! Marker | Arity    | Values       | Stored as
//! ----------------------------------------------------------------
//!        | Flag     | precisely 0  | scalar (set_value)
//! :      | Require  | precisely 1  | scalar (set_value)
//! ?      | Optional | 0 or 1       | scalar (set_value)
//! +      | Multiple | at least 1   | sequence (push_value)
//! *      | -        | 0 or more    | not implemented; rejected
//! ```
//!
//! Markers may repeat; the arity is resolved by priority rather than position.
//! `:` beats `+`, which beats `?`, which beats `*`.
//! For example, `x?:` is a `Require` option, while `x*` is rejected with [`SpecError::UnsupportedAttribute`].
//!
//! **Types**</br>
//! * `=s` or `=string`: the builtin `string` type.
//! * `=i` or `=integer`: the builtin `number` type.
//!
//! Other type names are declared with [`OptionSpec::isa`].
//!
//! # Types & Values
//! Single values ([`OptionSpec::set_value`]) are coerced by the handler registered for the option's type name.
//! Handlers implement [`prelude::ValueType`] and live in a [`TypeRegistry`].
//! The builtins (`string`, `number`, `boolean`) are always registered in the process-wide registry, and more may be added via [`types::register_type`].
//! An option whose type has no handler keeps its values as text.
//!
//! Multiple values ([`OptionSpec::push_value`]) only check the builtin `number` type.
//! Numbers are *truncated* toward zero: pushing `3.9` stores `3`.
//!
//! ```
//! use optspec::prelude::*;
//! use optspec::{types, OptionSpec, OptionValue, Value, ValueError};
//!
//! struct Port;
//!
//! impl ValueType for Port {
//!     fn test(&self, raw: &str) -> bool {
//!         raw.parse::<u16>().is_ok()
//!     }
//!
//!     fn parse(&self, raw: &str) -> Value {
//!         Value::Integer(raw.parse::<u16>().unwrap() as i64)
//!     }
//! }
//!
//! types::register_type("port", Port);
//!
//! let mut port = OptionSpec::parse("p|port:").unwrap();
//! port.isa("port");
//! port.set_value("8080").unwrap();
//! assert_eq!(port.value(), Some(&OptionValue::Scalar(Value::Integer(8080))));
//! assert!(matches!(port.set_value("80800"), Err(ValueError::InvalidValue { .. })));
//! ```
//!
//! # Valid Values & Suggestions
//! Both may be given as a fixed list, or as a provider which is invoked on each resolution.
//! Neither is enforced when values are set; [`OptionSpec::validate`] checks the current values on request.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while parsing spec strings and coercing values.
pub use optspec_core::*;
