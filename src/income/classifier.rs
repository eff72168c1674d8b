use regex::Regex;

use super::IncomeError;

/// A named payer, recognised by searching transaction descriptions with `pattern`.
#[derive(Debug, Clone)]
pub struct IncomeSource {
    pub name: String,
    pub pattern: Regex,
}

impl IncomeSource {
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<IncomeSource, IncomeError> {
        let name = name.into();
        match Regex::new(pattern) {
            Ok(pattern) => Ok(IncomeSource { name, pattern }),
            Err(source) => Err(IncomeError::InvalidPattern { name, source }),
        }
    }

    pub fn matches(&self, description: &str) -> bool {
        self.pattern.is_match(description)
    }
}

/// Income sources in registration order. Immutable once built.
#[derive(Debug, Clone)]
pub struct Registry {
    sources: Vec<IncomeSource>,
}

impl Registry {
    pub fn new(sources: Vec<IncomeSource>) -> Result<Registry, IncomeError> {
        for (i, source) in sources.iter().enumerate() {
            if sources[..i].iter().any(|earlier| earlier.name == source.name) {
                return Err(IncomeError::DuplicateSource(source.name.clone()));
            }
        }

        Ok(Registry { sources })
    }

    /// Builds a registry from `(name, regex)` pairs, keeping their order.
    pub fn from_patterns<I, N, P>(patterns: I) -> Result<Registry, IncomeError>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: AsRef<str>,
    {
        let sources = patterns
            .into_iter()
            .map(|(name, pattern)| IncomeSource::new(name, pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Registry::new(sources)
    }

    pub fn sources(&self) -> &[IncomeSource] {
        &self.sources
    }

    pub fn classify(&self, description: &str) -> Option<&str> {
        classify(description, self)
    }
}

impl Default for Registry {
    fn default() -> Self {
        let sources = ["GRUBHUB", "POSTMATES"]
            .into_iter()
            .map(|name| IncomeSource {
                name: name.to_owned(),
                pattern: Regex::new(&regex::escape(name)).expect("literal pattern"),
            })
            .collect();

        Registry { sources }
    }
}

/// Returns the name of the first registered source whose pattern occurs anywhere in
/// `description`. When several sources match, the earliest registered one wins.
/// No case folding happens here; a pattern opts in with `(?i)`.
pub fn classify<'r>(description: &str, registry: &'r Registry) -> Option<&'r str> {
    registry
        .sources
        .iter()
        .find(|source| source.matches(description))
        .map(|source| source.name.as_str())
}
