//! Fully-qualified class names
//!
//! A [`ClassName`] is a package plus the chain of simple names from the top-level class down to
//! the (possibly nested) class itself. It is the unit every generated name is derived from.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully-qualified, possibly nested, class name
///
/// # Example
///
/// ```
/// use finject_domain::value_objects::ClassName;
///
/// let name = ClassName::best_guess("test.Outer.TestFragment").unwrap();
/// assert_eq!(name.package_name(), "test");
/// assert_eq!(name.simple_name(), "TestFragment");
/// assert_eq!(name.reflection_name(), "test.Outer$TestFragment");
/// assert_eq!(name.canonical_name(), "test.Outer.TestFragment");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassName {
    package_name: String,
    simple_names: Vec<String>,
}

impl ClassName {
    /// Create a top-level class name from trusted parts
    pub fn new(package_name: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Create a (possibly nested) class name, validating every segment
    pub fn get<I, S>(package_name: impl Into<String>, simple_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let package_name = package_name.into();
        let simple_names: Vec<String> = simple_names.into_iter().map(Into::into).collect();
        if simple_names.is_empty() {
            return Err(Error::invalid_name(
                package_name,
                "a class name needs at least one simple name",
            ));
        }
        if !package_name.is_empty() {
            for segment in package_name.split('.') {
                check_identifier(&package_name, segment)?;
            }
        }
        for simple in &simple_names {
            check_identifier(simple, simple)?;
        }
        Ok(Self {
            package_name,
            simple_names,
        })
    }

    /// Guess the package/class split of a dotted name
    ///
    /// Segments up to the first one starting with an uppercase letter form the package,
    /// the rest are the chain of simple names.
    pub fn best_guess(name: &str) -> Result<Self> {
        let segments: Vec<&str> = name.split('.').collect();
        let first_class = segments
            .iter()
            .position(|s| s.chars().next().is_some_and(char::is_uppercase))
            .ok_or_else(|| {
                Error::invalid_name(name, "couldn't make a guess for the class name")
            })?;
        let package_name = segments[..first_class].join(".");
        Self::get(package_name, segments[first_class..].iter().copied())
            .map_err(|e| match e {
                Error::InvalidName { reason, .. } => Error::invalid_name(name, reason),
                other => other,
            })
    }

    /// Package name, empty for the default package
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Innermost simple name
    pub fn simple_name(&self) -> &str {
        // `get` and `new` never build an empty chain
        self.simple_names.last().map_or("", String::as_str)
    }

    /// Simple names from the top-level class down to this one
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The class this one is nested in, if any
    pub fn enclosing_class_name(&self) -> Option<ClassName> {
        if self.simple_names.len() < 2 {
            return None;
        }
        Some(Self {
            package_name: self.package_name.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    /// The outermost enclosing class (or this one when top-level)
    pub fn top_level_class_name(&self) -> ClassName {
        Self {
            package_name: self.package_name.clone(),
            simple_names: self.simple_names[..1].to_vec(),
        }
    }

    /// A class named `name` nested inside this one
    pub fn nested_class(&self, name: impl Into<String>) -> ClassName {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(name.into());
        Self {
            package_name: self.package_name.clone(),
            simple_names,
        }
    }

    /// A top-level class in the same package whose name flattens this class's nesting
    ///
    /// `test.Outer.TestFragment` with `X` gives `test.Outer$X`.
    pub fn peer_class_with_reflection_nesting(&self, name: &str) -> ClassName {
        let mut prefix = String::new();
        for enclosing in &self.simple_names[..self.simple_names.len() - 1] {
            prefix.push_str(enclosing);
            prefix.push('$');
        }
        Self::new(self.package_name.clone(), format!("{prefix}{name}"))
    }

    /// Binary name with `$` between nested classes, e.g. `test.Outer$TestFragment`
    pub fn reflection_name(&self) -> String {
        self.qualified(&self.simple_names.join("$"))
    }

    /// Source name with `.` between nested classes, e.g. `test.Outer.TestFragment`
    pub fn canonical_name(&self) -> String {
        self.qualified(&self.simple_names.join("."))
    }

    fn qualified(&self, nested: &str) -> String {
        if self.package_name.is_empty() {
            nested.to_string()
        } else {
            format!("{}.{}", self.package_name, nested)
        }
    }
}

fn check_identifier(context: &str, segment: &str) -> Result<()> {
    let mut chars = segment.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$');
    if !valid_start || !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Err(Error::invalid_name(
            context,
            format!("'{segment}' is not a valid identifier"),
        ));
    }
    Ok(())
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

impl TryFrom<String> for ClassName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::best_guess(&value)
    }
}

impl From<ClassName> for String {
    fn from(value: ClassName) -> Self {
        value.canonical_name()
    }
}
