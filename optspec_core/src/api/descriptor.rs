use std::sync::Arc;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::source::ValueSource;
use crate::api::value::{truncate_numeric, OptionValue, Value, ValueError};
use crate::model::Arity;
use crate::parser::{parse_spec, ParsedSpec, SpecError};
use crate::prelude::ValueType;
use crate::types::{lookup_type, TypeRegistry, NUMBER_TYPE, STRING_TYPE};

/// A single command line option: its names, arity, value type, and the values supplied to it.
///
/// Construct it from a spec string (see [`parse_spec`](./fn.parse_spec.html) for the grammar), or incrementally from [`OptionSpec::new`].
/// The argument matcher then drives it via [`OptionSpec::set_value`] (require, optional, flag) or [`OptionSpec::push_value`] (multiple).
///
/// ### Example
/// ```
/// # use optspec_core as optspec;
/// use optspec::{OptionSpec, Value};
///
/// let mut option = OptionSpec::parse("n|number+=i").unwrap();
/// option.set_description("Numbers to add.");
///
/// option.push_value("1").unwrap();
/// option.push_value("2.7").unwrap();
///
/// assert_eq!(option.id().as_deref(), Some("number"));
/// assert_eq!(option.readable_spec(), "-n, --number <value>+");
/// assert_eq!(option.values(), Some(&[Value::Integer(1), Value::Integer(2)][..]));
/// ```
#[derive(Debug, Default)]
pub struct OptionSpec {
    pub(crate) short: Option<char>,
    pub(crate) long: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) arity: Arity,
    pub(crate) value_type: Option<String>,
    pub(crate) value: Option<OptionValue>,
    pub(crate) description: Option<String>,
    pub(crate) value_name: Option<String>,
    valid_values: Option<ValueSource>,
    suggestions: Option<ValueSource>,
}

impl OptionSpec {
    /// Create an option without names, values or type; its arity is [`Arity::Flag`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an option from a spec string.
    ///
    /// ### Example
    /// ```
    /// # use optspec_core as optspec;
    /// use optspec::{OptionSpec, SpecError};
    ///
    /// let option = OptionSpec::parse("a|alpha=i").unwrap();
    /// assert_eq!(option.short(), Some('a'));
    /// assert_eq!(option.long(), Some("alpha"));
    /// assert!(option.is_type_number());
    ///
    /// assert!(matches!(
    ///     OptionSpec::parse("a|alpha*"),
    ///     Err(SpecError::UnsupportedAttribute { .. })
    /// ));
    /// ```
    pub fn parse(spec: &str) -> Result<Self, SpecError> {
        let ParsedSpec {
            short,
            long,
            arity,
            value_type,
        } = parse_spec(spec)?;
        let mut option = Self {
            short,
            long,
            value_type: value_type.map(str::to_string),
            ..Self::default()
        };
        option.set_arity(arity);
        Ok(option)
    }

    #[cfg(feature = "unit_test")]
    /// Create an option from a spec string, holding `value` already.
    pub fn with_value(spec: &str, value: OptionValue) -> Result<Self, SpecError> {
        let mut option = Self::parse(spec)?;
        option.value.replace(value);
        Ok(option)
    }

    /// The single character name (ex: `v` for `-v`).
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The multi character name (ex: `verbose` for `--verbose`).
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The explicit results key, if one was set.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Set the single character name.
    pub fn set_short(&mut self, short: char) -> &mut Self {
        self.short.replace(short);
        self
    }

    /// Set the multi character name.
    pub fn set_long(&mut self, long: impl Into<String>) -> &mut Self {
        self.long.replace(long.into());
        self
    }

    /// Set the key under which this option's value is stored in a results mapping.
    pub fn set_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.key.replace(key.into());
        self
    }

    /// The identifier of this option in a results mapping: the key, else the long name, else the short name.
    pub fn id(&self) -> Option<String> {
        self.key
            .clone()
            .or_else(|| self.long.clone())
            .or_else(|| self.short.map(String::from))
    }

    /// The arity of this option.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Replace the arity of this option.
    ///
    /// Entering [`Arity::Multiple`] prepares an empty sequence of values.
    /// Values that have already been pushed are kept.
    pub fn set_arity(&mut self, arity: Arity) -> &mut Self {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Option {:?} arity: {:?} -> {arity:?}.", self.id(), self.arity);
        }

        self.arity = arity;

        if arity == Arity::Multiple && !matches!(self.value, Some(OptionValue::Multiple(_))) {
            self.value.replace(OptionValue::Multiple(Vec::default()));
        }

        self
    }

    /// Shorthand for `set_arity(Arity::Require)`.
    pub fn set_require(&mut self) -> &mut Self {
        self.set_arity(Arity::Require)
    }

    /// Shorthand for `set_arity(Arity::Multiple)`.
    pub fn set_multiple(&mut self) -> &mut Self {
        self.set_arity(Arity::Multiple)
    }

    /// Shorthand for `set_arity(Arity::Optional)`.
    pub fn set_optional(&mut self) -> &mut Self {
        self.set_arity(Arity::Optional)
    }

    /// Shorthand for `set_arity(Arity::Flag)`.
    pub fn set_flag(&mut self) -> &mut Self {
        self.set_arity(Arity::Flag)
    }

    /// Whether precisely one value is required.
    pub fn is_required(&self) -> bool {
        self.arity == Arity::Require
    }

    /// Whether values are accumulated.
    pub fn is_multiple(&self) -> bool {
        self.arity == Arity::Multiple
    }

    /// Whether the value may be omitted.
    pub fn is_optional(&self) -> bool {
        self.arity == Arity::Optional
    }

    /// Whether the option takes no value.
    pub fn is_flag(&self) -> bool {
        self.arity == Arity::Flag
    }

    /// Declare the value type by name.
    ///
    /// Any name is accepted; a name without a registered handler leaves the values uncoerced.
    pub fn isa(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.value_type.replace(type_name.into());
        self
    }

    /// The declared value type name.
    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    /// Shorthand for `isa("string")`.
    pub fn set_type_string(&mut self) -> &mut Self {
        self.isa(STRING_TYPE)
    }

    /// Shorthand for `isa("number")`.
    pub fn set_type_number(&mut self) -> &mut Self {
        self.isa(NUMBER_TYPE)
    }

    /// Whether the value type is declared as `type_name`.
    pub fn is_type(&self, type_name: &str) -> bool {
        self.value_type() == Some(type_name)
    }

    /// Whether the value type is the builtin `string`.
    pub fn is_type_string(&self) -> bool {
        self.is_type(STRING_TYPE)
    }

    /// Whether the value type is the builtin `number`.
    pub fn is_type_number(&self) -> bool {
        self.is_type(NUMBER_TYPE)
    }

    /// The handler for the declared value type, from the process-wide registry.
    pub fn handler(&self) -> Option<Arc<dyn ValueType>> {
        self.value_type.as_deref().and_then(lookup_type)
    }

    /// The current value.
    pub fn value(&self) -> Option<&OptionValue> {
        self.value.as_ref()
    }

    /// The current values, when this option holds a sequence.
    pub fn values(&self) -> Option<&[Value]> {
        self.value.as_ref().and_then(OptionValue::as_multiple)
    }

    /// Set the (single) value of this option, replacing any previous value.
    ///
    /// When a handler is registered for the value type, the raw input must pass its `test` and is stored `parse`d.
    /// Otherwise the raw input is stored as [`Value::Text`].
    ///
    /// ### Example
    /// ```
    /// # use optspec_core as optspec;
    /// use optspec::{OptionSpec, OptionValue, Value, ValueError};
    ///
    /// let mut option = OptionSpec::parse("l|level:=i").unwrap();
    /// option.set_value("1").unwrap();
    /// option.set_value("2").unwrap();
    /// assert_eq!(option.value(), Some(&OptionValue::Scalar(Value::Integer(2))));
    ///
    /// assert!(matches!(
    ///     option.set_value("high"),
    ///     Err(ValueError::InvalidValue { .. })
    /// ));
    /// ```
    pub fn set_value(&mut self, raw: &str) -> Result<(), ValueError> {
        let value = self.coerce(self.handler(), raw)?;
        self.store(value);
        Ok(())
    }

    /// As [`OptionSpec::set_value`], resolving the handler from `registry` instead of the process-wide registry.
    pub fn set_value_with(&mut self, registry: &TypeRegistry, raw: &str) -> Result<(), ValueError> {
        let handler = self
            .value_type
            .as_deref()
            .and_then(|type_name| registry.get(type_name));
        let value = self.coerce(handler, raw)?;
        self.store(value);
        Ok(())
    }

    fn coerce(&self, handler: Option<Arc<dyn ValueType>>, raw: &str) -> Result<Value, ValueError> {
        let handler = match handler {
            Some(handler) => handler,
            None => return Ok(Value::Text(raw.to_string())),
        };

        if handler.test(raw) {
            let value = handler.parse(raw);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Option {:?} coerced '{raw}' to {value:?}.", self.id());
            }
            Ok(value)
        } else {
            Err(ValueError::InvalidValue {
                type_name: self.value_type.clone().unwrap_or_default(),
                raw: raw.to_string(),
            })
        }
    }

    fn store(&mut self, value: Value) {
        self.value.replace(OptionValue::Scalar(value));
    }

    /// Append a value to this option's sequence of values.
    ///
    /// For the `number` type the raw input must be numeric, and is stored as an integer *truncated* toward zero (`"3.9"` is stored as `3`).
    /// This does not consult the type registry; other types are stored as [`Value::Text`].
    /// A rejected value leaves the previously pushed values untouched.
    ///
    /// ### Example
    /// ```
    /// # use optspec_core as optspec;
    /// use optspec::{OptionSpec, Value, ValueError};
    ///
    /// let mut option = OptionSpec::parse("n+=i").unwrap();
    /// option.push_value("3.9").unwrap();
    /// assert!(matches!(option.push_value("abc"), Err(ValueError::NonNumeric { .. })));
    /// assert_eq!(option.values(), Some(&[Value::Integer(3)][..]));
    /// ```
    pub fn push_value(&mut self, raw: &str) -> Result<(), ValueError> {
        let value = self.check_type(raw)?;

        if let Some(OptionValue::Multiple(values)) = &mut self.value {
            values.push(value);
        } else {
            self.value.replace(OptionValue::Multiple(vec![value]));
        }

        Ok(())
    }

    /// Check `raw` against the builtin `number` type, as done when pushing values.
    pub fn check_type(&self, raw: &str) -> Result<Value, ValueError> {
        if self.is_type_number() {
            truncate_numeric(raw).map(Value::Integer)
        } else {
            Ok(Value::Text(raw.to_string()))
        }
    }

    /// Check the current value(s) against the declared valid values.
    ///
    /// The valid values are coerced the same way the current value(s) were before comparing.
    /// A single value goes through the type's handler, as in [`OptionSpec::set_value`], and a sequence through [`OptionSpec::check_type`], as in [`OptionSpec::push_value`].
    /// Valid values which that coercion rejects never match.
    ///
    /// Does nothing when no valid values are declared.
    /// This is never called by [`OptionSpec::set_value`] or [`OptionSpec::push_value`].
    ///
    /// ### Example
    /// ```
    /// # use optspec_core as optspec;
    /// use optspec::{OptionSpec, ValueError};
    ///
    /// let mut option = OptionSpec::parse("force:").unwrap();
    /// option.isa("boolean").valid_values(["yes"]);
    /// option.set_value("yes").unwrap();
    /// option.validate().unwrap();
    ///
    /// option.set_value("no").unwrap();
    /// assert!(matches!(option.validate(), Err(ValueError::NotValid { .. })));
    /// ```
    pub fn validate(&self) -> Result<(), ValueError> {
        let valid = match self.resolve_valid_values() {
            Some(valid) => valid,
            None => return Ok(()),
        };
        let (current, accepted): (Vec<&Value>, Vec<Value>) = match &self.value {
            Some(OptionValue::Scalar(value)) => {
                let handler = self.handler();
                let accepted = valid
                    .iter()
                    .filter_map(|raw| self.coerce(handler.clone(), raw).ok())
                    .collect();
                (vec![value], accepted)
            }
            Some(OptionValue::Multiple(values)) => {
                let accepted = valid
                    .iter()
                    .filter_map(|raw| self.check_type(raw).ok())
                    .collect();
                (values.iter().collect(), accepted)
            }
            None => return Ok(()),
        };

        for value in current {
            if !accepted.contains(value) {
                return Err(ValueError::NotValid {
                    raw: value.to_string(),
                    valid,
                });
            }
        }

        Ok(())
    }

    /// Document the option; presentation only.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description.replace(description.into());
        self
    }

    /// The description, if documented.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Name the value placeholder shown by [`OptionSpec::readable_spec`] (defaults to `value`).
    pub fn set_value_name(&mut self, value_name: impl Into<String>) -> &mut Self {
        self.value_name.replace(value_name.into());
        self
    }

    /// The value placeholder name, if set.
    pub fn value_name(&self) -> Option<&str> {
        self.value_name.as_deref()
    }

    /// Declare the values this option accepts, either as a fixed list or a provider.
    ///
    /// These are not enforced when values are set; see [`OptionSpec::validate`].
    ///
    /// ### Example
    /// ```
    /// # use optspec_core as optspec;
    /// use optspec::{OptionSpec, ValueSource};
    ///
    /// let mut option = OptionSpec::parse("format:").unwrap();
    /// option.valid_values(["json", "yaml"]);
    /// assert_eq!(option.resolve_valid_values().unwrap(), vec!["json", "yaml"]);
    ///
    /// option.valid_values(ValueSource::provider(|| vec!["toml".to_string()]));
    /// assert_eq!(option.resolve_valid_values().unwrap(), vec!["toml"]);
    /// ```
    pub fn valid_values(&mut self, values: impl Into<ValueSource>) -> &mut Self {
        self.valid_values.replace(values.into());
        self
    }

    /// Declare completion hints for this option, either as a fixed list or a provider.
    pub fn suggestions(&mut self, suggestions: impl Into<ValueSource>) -> &mut Self {
        self.suggestions.replace(suggestions.into());
        self
    }

    /// The declared valid values, invoking the provider if there is one.
    pub fn resolve_valid_values(&self) -> Option<Vec<String>> {
        self.valid_values.as_ref().map(ValueSource::resolve)
    }

    /// The declared suggestions, invoking the provider if there is one.
    pub fn resolve_suggestions(&self) -> Option<Vec<String>> {
        self.suggestions.as_ref().map(ValueSource::resolve)
    }
}

impl std::str::FromStr for OptionSpec {
    type Err = SpecError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        OptionSpec::parse(spec)
    }
}

impl TryFrom<&str> for OptionSpec {
    type Error = SpecError;

    fn try_from(spec: &str) -> Result<Self, Self::Error> {
        OptionSpec::parse(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOOLEAN_TYPE;
    use rstest::rstest;

    struct Percent;

    impl ValueType for Percent {
        fn test(&self, raw: &str) -> bool {
            raw.strip_suffix('%')
                .and_then(|n| n.parse::<i64>().ok())
                .map(|n| (0..=100).contains(&n))
                .unwrap_or(false)
        }

        fn parse(&self, raw: &str) -> Value {
            Value::Integer(raw.trim_end_matches('%').parse().unwrap())
        }
    }

    #[rstest]
    #[case("name:", None, Some("name"))]
    #[case("n:", Some('n'), None)]
    #[case("x-y:", None, Some("x-y"))]
    fn require(#[case] spec: &str, #[case] short: Option<char>, #[case] long: Option<&str>) {
        let option = OptionSpec::parse(spec).unwrap();
        assert_eq!(option.arity(), Arity::Require);
        assert!(option.is_required());
        assert_eq!(option.short(), short);
        assert_eq!(option.long(), long);
        assert_eq!(option.value(), None);
    }

    #[test]
    fn short_and_long_numeric() {
        let option = OptionSpec::parse("a|alpha=i").unwrap();
        assert_eq!(option.short(), Some('a'));
        assert_eq!(option.long(), Some("alpha"));
        assert_eq!(option.value_type(), Some(NUMBER_TYPE));
        assert!(option.is_type_number());
        assert!(!option.is_type_string());
        assert!(option.is_flag());
    }

    #[rstest]
    #[case("v")]
    #[case("verbose")]
    #[case("v|verbose")]
    fn default_flag(#[case] spec: &str) {
        let option = OptionSpec::parse(spec).unwrap();
        assert!(option.is_flag());
        assert!(!option.is_required());
        assert!(!option.is_multiple());
        assert!(!option.is_optional());
        assert_eq!(option.value_type(), None);
    }

    #[rstest]
    #[case("x*")]
    #[case("x|xray*")]
    #[case("xray*=s")]
    fn unsupported(#[case] spec: &str) {
        assert_matches!(
            OptionSpec::parse(spec).unwrap_err(),
            SpecError::UnsupportedAttribute { marker: '*', .. }
        );
    }

    #[rstest]
    #[case("")]
    #[case("x y")]
    #[case("x=float")]
    fn malformed(#[case] spec: &str) {
        assert_matches!(
            spec.parse::<OptionSpec>().unwrap_err(),
            SpecError::Malformed { .. }
        );
        assert_matches!(
            OptionSpec::try_from(spec).unwrap_err(),
            SpecError::Malformed { .. }
        );
    }

    #[test]
    fn new() {
        let option = OptionSpec::new();
        assert_eq!(option.short(), None);
        assert_eq!(option.long(), None);
        assert_eq!(option.id(), None);
        assert!(option.is_flag());
        assert_eq!(option.value(), None);
        assert_eq!(option.resolve_valid_values(), None);
        assert_eq!(option.resolve_suggestions(), None);
    }

    #[test]
    fn incremental() {
        let mut option = OptionSpec::new();
        option
            .set_short('o')
            .set_long("output")
            .set_require()
            .set_type_string()
            .set_description("Where to write.")
            .set_value_name("path");
        assert_eq!(option.short(), Some('o'));
        assert_eq!(option.long(), Some("output"));
        assert!(option.is_required());
        assert!(option.is_type_string());
        assert_eq!(option.description(), Some("Where to write."));
        assert_eq!(option.value_name(), Some("path"));
    }

    #[test]
    fn id_precedence() {
        let mut option = OptionSpec::parse("s|l").unwrap();
        assert_eq!(option.id().as_deref(), Some("l"));
        option.set_key("k");
        assert_eq!(option.key(), Some("k"));
        assert_eq!(option.id().as_deref(), Some("k"));

        let option = OptionSpec::parse("s").unwrap();
        assert_eq!(option.id().as_deref(), Some("s"));

        let option = OptionSpec::parse("long").unwrap();
        assert_eq!(option.id().as_deref(), Some("long"));
    }

    #[test]
    fn arity_replaces() {
        let mut option = OptionSpec::parse("x:").unwrap();
        option.set_optional();
        assert!(option.is_optional());
        assert!(!option.is_required());
        option.set_flag();
        assert!(option.is_flag());
        assert!(!option.is_optional());
    }

    #[test]
    fn multiple_starts_empty() {
        let option = OptionSpec::parse("x+").unwrap();
        assert!(option.is_multiple());
        assert_eq!(option.value(), Some(&OptionValue::Multiple(vec![])));
        assert_eq!(option.values(), Some(&[][..]));
    }

    #[test]
    fn multiple_reentry_keeps_values() {
        let mut option = OptionSpec::parse("x+").unwrap();
        option.push_value("a").unwrap();
        option.set_multiple();
        assert_eq!(option.values(), Some(&[Value::from("a")][..]));
    }

    #[test]
    fn set_value_untyped() {
        let mut option = OptionSpec::parse("x:").unwrap();
        option.set_value("first").unwrap();
        option.set_value("second").unwrap();
        assert_eq!(
            option.value(),
            Some(&OptionValue::Scalar(Value::from("second")))
        );
    }

    #[rstest]
    #[case("x:=i", "42", Value::Integer(42))]
    #[case("x:=i", "3.9", Value::Integer(3))]
    #[case("x:=s", "abc", Value::from("abc"))]
    fn set_value_typed(#[case] spec: &str, #[case] raw: &str, #[case] expected: Value) {
        let mut option = OptionSpec::parse(spec).unwrap();
        option.set_value(raw).unwrap();
        assert_eq!(option.value(), Some(&OptionValue::Scalar(expected)));
    }

    #[test]
    fn set_value_invalid() {
        let mut option = OptionSpec::parse("x:=i").unwrap();
        option.set_value("1").unwrap();
        assert_eq!(
            option.set_value("one").unwrap_err(),
            ValueError::InvalidValue {
                type_name: NUMBER_TYPE.to_string(),
                raw: "one".to_string(),
            }
        );
        assert_eq!(option.value(), Some(&OptionValue::Scalar(Value::Integer(1))));
    }

    #[test]
    fn set_value_boolean() {
        let mut option = OptionSpec::parse("x?").unwrap();
        option.isa(BOOLEAN_TYPE);
        option.set_value("yes").unwrap();
        assert_eq!(option.value(), Some(&OptionValue::Scalar(Value::Boolean(true))));
        assert_matches!(
            option.set_value("perhaps"),
            Err(ValueError::InvalidValue { .. })
        );
    }

    #[test]
    fn set_value_unknown_type() {
        let mut option = OptionSpec::parse("x:").unwrap();
        option.isa("descriptor-unknown-type");
        assert!(option.handler().is_none());
        option.set_value("anything").unwrap();
        assert_eq!(
            option.value(),
            Some(&OptionValue::Scalar(Value::from("anything")))
        );
    }

    #[test]
    fn set_value_with_registry() {
        let mut registry = TypeRegistry::builtin();
        registry.register("percent", Percent);
        let mut option = OptionSpec::parse("ratio:").unwrap();
        option.isa("percent");

        option.set_value_with(&registry, "40%").unwrap();
        assert_eq!(option.value(), Some(&OptionValue::Scalar(Value::Integer(40))));
        assert_eq!(
            option.set_value_with(&registry, "140%").unwrap_err(),
            ValueError::InvalidValue {
                type_name: "percent".to_string(),
                raw: "140%".to_string(),
            }
        );

        // Not registered process-wide.
        option.set_value("140%").unwrap();
        assert_eq!(
            option.value(),
            Some(&OptionValue::Scalar(Value::from("140%")))
        );
    }

    #[test]
    fn push_value_order() {
        let mut option = OptionSpec::parse("x+").unwrap();
        option.push_value("b").unwrap();
        option.push_value("a").unwrap();
        assert_eq!(option.values(), Some(&[Value::from("b"), Value::from("a")][..]));
    }

    #[test]
    fn push_value_truncates() {
        let mut option = OptionSpec::parse("x+=i").unwrap();
        option.push_value("3.9").unwrap();
        option.push_value("-3.9").unwrap();
        option.push_value("7").unwrap();
        assert_eq!(
            option.values(),
            Some(&[Value::Integer(3), Value::Integer(-3), Value::Integer(7)][..])
        );
    }

    #[test]
    fn push_value_non_numeric() {
        let mut option = OptionSpec::parse("x+=i").unwrap();
        option.push_value("1").unwrap();
        option.push_value("2").unwrap();
        assert_eq!(
            option.push_value("abc").unwrap_err(),
            ValueError::NonNumeric {
                raw: "abc".to_string()
            }
        );
        assert_eq!(
            option.values(),
            Some(&[Value::Integer(1), Value::Integer(2)][..])
        );
    }

    #[test]
    fn push_value_ignores_registry() {
        let mut option = OptionSpec::parse("x+").unwrap();
        option.isa(BOOLEAN_TYPE);
        option.push_value("not-a-boolean").unwrap();
        assert_eq!(option.values(), Some(&[Value::from("not-a-boolean")][..]));
    }

    #[test]
    fn push_value_without_sequence() {
        let mut option = OptionSpec::parse("x:").unwrap();
        option.set_value("a").unwrap();
        option.push_value("b").unwrap();
        assert_eq!(option.values(), Some(&[Value::from("b")][..]));
    }

    #[test]
    fn set_value_on_multiple() {
        let mut option = OptionSpec::parse("x+").unwrap();
        option.push_value("a").unwrap();
        option.set_value("b").unwrap();
        assert_eq!(option.values(), None);
        assert_eq!(option.value(), Some(&OptionValue::Scalar(Value::from("b"))));
    }

    #[rstest]
    #[case("x:", "3.9", Value::from("3.9"))]
    #[case("x:=s", "3.9", Value::from("3.9"))]
    #[case("x:=i", "3.9", Value::Integer(3))]
    fn check_type(#[case] spec: &str, #[case] raw: &str, #[case] expected: Value) {
        let option = OptionSpec::parse(spec).unwrap();
        assert_eq!(option.check_type(raw).unwrap(), expected);
    }

    #[test]
    fn valid_values() {
        let mut option = OptionSpec::parse("format+").unwrap();
        option.valid_values(vec!["json", "yaml"]);
        option.validate().unwrap();

        option.push_value("json").unwrap();
        option.push_value("xml").unwrap();
        assert_eq!(
            option.validate().unwrap_err(),
            ValueError::NotValid {
                raw: "xml".to_string(),
                valid: vec!["json".to_string(), "yaml".to_string()],
            }
        );

        option.valid_values(ValueSource::provider(|| {
            vec!["json".to_string(), "xml".to_string()]
        }));
        option.validate().unwrap();
    }

    #[rstest]
    #[case("yes")]
    #[case("on")]
    #[case("no")]
    #[case("FALSE")]
    fn valid_values_boolean(#[case] raw: &str) {
        let mut option = OptionSpec::parse("force:").unwrap();
        option.isa(BOOLEAN_TYPE).valid_values(["yes", "no"]);
        option.set_value(raw).unwrap();
        option.validate().unwrap();
    }

    #[test]
    fn valid_values_boolean_rejects() {
        let mut option = OptionSpec::parse("force:").unwrap();
        option.isa(BOOLEAN_TYPE).valid_values(["yes", "maybe"]);
        option.set_value("true").unwrap();
        option.validate().unwrap();

        option.set_value("off").unwrap();
        assert_eq!(
            option.validate().unwrap_err(),
            ValueError::NotValid {
                raw: "false".to_string(),
                valid: vec!["yes".to_string(), "maybe".to_string()],
            }
        );
    }

    #[test]
    fn valid_values_number() {
        let mut option = OptionSpec::parse("n:=i").unwrap();
        option.valid_values(["1.5", "two"]);
        option.set_value("1.5").unwrap();
        option.validate().unwrap();

        option.set_value("1").unwrap();
        option.validate().unwrap();

        option.set_value("2").unwrap();
        assert_eq!(
            option.validate().unwrap_err(),
            ValueError::NotValid {
                raw: "2".to_string(),
                valid: vec!["1.5".to_string(), "two".to_string()],
            }
        );
    }

    #[test]
    fn valid_values_number_pushed() {
        let mut option = OptionSpec::parse("n+=i").unwrap();
        option.valid_values(["1", "2.9"]);
        option.push_value("1.5").unwrap();
        option.push_value("2").unwrap();
        option.validate().unwrap();

        option.push_value("3").unwrap();
        assert_matches!(
            option.validate(),
            Err(ValueError::NotValid { raw, .. }) if raw == "3"
        );
    }

    #[test]
    fn validate_without_valid_values() {
        let mut option = OptionSpec::parse("x:").unwrap();
        option.set_value("anything").unwrap();
        option.validate().unwrap();
    }

    #[test]
    fn suggestions() {
        let mut option = OptionSpec::parse("branch:").unwrap();
        option.suggestions(["main", "develop"]);
        assert_eq!(
            option.resolve_suggestions().unwrap(),
            vec!["main", "develop"]
        );
        assert_eq!(option.resolve_valid_values(), None);

        option.suggestions(ValueSource::provider(|| vec!["release".to_string()]));
        assert_eq!(option.resolve_suggestions().unwrap(), vec!["release"]);
    }
}
