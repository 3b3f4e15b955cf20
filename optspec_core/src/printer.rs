use crate::api::{OptionSpec, OptionValue};
use crate::model::Arity;
use crate::types::{NUMBER_TYPE, STRING_TYPE};

const DEFAULT_VALUE_NAME: &str = "value";
const ID_WIDTH: usize = 8;

impl OptionSpec {
    /// The usage fragment for this option.
    ///
    /// ### Example
    /// ```
    /// # use optspec_core as optspec;
    /// use optspec::OptionSpec;
    ///
    /// let mut option = OptionSpec::parse("v|verbose:").unwrap();
    /// assert_eq!(option.readable_spec(), "-v, --verbose <value>");
    ///
    /// option.set_value_name("level");
    /// assert_eq!(option.readable_spec(), "-v, --verbose <level>");
    ///
    /// option.set_flag();
    /// assert_eq!(option.readable_spec(), "-v, --verbose");
    /// ```
    pub fn readable_spec(&self) -> String {
        let flags = match (&self.short, &self.long) {
            (Some(s), Some(l)) => format!("-{s}, --{l}"),
            (Some(s), None) => format!("-{s}"),
            (None, Some(l)) => format!("--{l}"),
            (None, None) => "".to_string(),
        };
        let value_name = self.value_name.as_deref().unwrap_or(DEFAULT_VALUE_NAME);
        let grammar = match self.arity {
            Arity::Require => format!(" <{value_name}>"),
            Arity::Multiple => format!(" <{value_name}>+"),
            Arity::Optional => format!(" [<{value_name}>]"),
            Arity::Flag => "".to_string(),
        };

        format!("{flags}{grammar}")
    }

    /// A multi-line diagnostic of this option and its current value.
    ///
    /// ```text
    /// * key:output   spec:-o, --output <value>  desc:Where to write.
    ///   value => out.txt
    /// ```
    pub fn describe(&self) -> String {
        let id = self.id().unwrap_or_default();
        let description = self.description.as_deref().unwrap_or_default();
        let value = match &self.value {
            Some(values @ OptionValue::Multiple(_)) => format!("values => {values}"),
            Some(value) => format!("value => {value}"),
            None => "value => ".to_string(),
        };

        format!(
            "* key:{id:<ID_WIDTH$} spec:{spec}  desc:{description}\n  {value}\n",
            spec = self.readable_spec(),
        )
    }

    /// This option rendered back into spec string form (`NAME[ATTR][=TYPE]`).
    ///
    /// Only the builtin `string` and `number` types have a spec string form; other types are omitted.
    ///
    /// ### Example
    /// ```
    /// # use optspec_core as optspec;
    /// use optspec::OptionSpec;
    ///
    /// let mut option = OptionSpec::new();
    /// option.set_short('o').set_long("output").set_require().set_type_string();
    /// assert_eq!(option.to_spec_string(), "o|output:=s");
    /// ```
    pub fn to_spec_string(&self) -> String {
        let name = match (&self.short, &self.long) {
            (Some(s), Some(l)) => format!("{s}|{l}"),
            (Some(s), None) => s.to_string(),
            // A single character long name needs the pipe, or it reads as a short name.
            (None, Some(l)) if l.chars().count() == 1 => format!("|{l}"),
            (None, Some(l)) => l.clone(),
            (None, None) => "".to_string(),
        };
        let value_type = match self.value_type.as_deref() {
            Some(STRING_TYPE) => "=s",
            Some(NUMBER_TYPE) => "=i",
            _ => "",
        };

        format!("{name}{arity}{value_type}", arity = self.arity)
    }
}

impl std::fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
