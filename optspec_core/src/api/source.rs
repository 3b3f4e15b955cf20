/// Where an option's valid values (or suggestions) come from.
///
/// Either a fixed list, or a provider which is invoked each time the values are resolved.
///
/// ### Example
/// ```
/// # use optspec_core as optspec;
/// use optspec::ValueSource;
///
/// let fixed = ValueSource::from(["fast", "slow"]);
/// assert_eq!(fixed.resolve(), vec!["fast", "slow"]);
///
/// let provided = ValueSource::provider(|| vec!["x".to_string()]);
/// assert_eq!(provided.resolve(), vec!["x"]);
/// ```
pub enum ValueSource {
    /// A concrete list of values.
    Fixed(Vec<String>),
    /// A zero-argument producer of values.
    Provider(Box<dyn Fn() -> Vec<String> + Send + Sync>),
}

impl ValueSource {
    /// Create a lazily evaluated source.
    pub fn provider(provider: impl Fn() -> Vec<String> + Send + Sync + 'static) -> Self {
        ValueSource::Provider(Box::new(provider))
    }

    /// The values of this source, invoking the provider if there is one.
    pub fn resolve(&self) -> Vec<String> {
        match self {
            ValueSource::Fixed(values) => values.clone(),
            ValueSource::Provider(provider) => provider(),
        }
    }

    /// Whether this source is evaluated lazily.
    pub fn is_provider(&self) -> bool {
        matches!(self, ValueSource::Provider(_))
    }
}

impl std::fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Fixed(values) => f.debug_tuple("Fixed").field(values).finish(),
            ValueSource::Provider(_) => write!(f, "Provider(..)"),
        }
    }
}

impl From<Vec<String>> for ValueSource {
    fn from(values: Vec<String>) -> Self {
        ValueSource::Fixed(values)
    }
}

impl From<Vec<&str>> for ValueSource {
    fn from(values: Vec<&str>) -> Self {
        ValueSource::Fixed(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ValueSource {
    fn from(values: [&str; N]) -> Self {
        ValueSource::Fixed(values.iter().map(|v| v.to_string()).collect())
    }
}
