use std::fmt;

/// One `property: value` pair, as written in the rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// e.g. "width", "--text"
    pub property: String,
    /// Trimmed raw value, without the trailing semicolon.
    pub value: String,
}

/// Declarations of a single rule, in order of first appearance.
///
/// A repeated property overwrites the earlier value in place, so the last
/// declaration wins while keeping its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    declarations: Vec<Declaration>,
}

impl PropertyMap {
    pub fn new() -> Self {
        PropertyMap {
            declarations: Vec::new(),
        }
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self
            .declarations
            .iter_mut()
            .find(|decl| decl.property == property)
        {
            Some(existing) => existing.value = value,
            None => self.declarations.push(Declaration { property, value }),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    /// Value of `property`, or `""` when it was never declared.
    pub fn get_or_empty(&self, property: &str) -> &str {
        self.get(property).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Rebuild a declaration block from the map, one `name: value;` per pair.
    pub fn to_declarations(&self) -> String {
        self.declarations
            .iter()
            .map(|decl| format!("{}: {};", decl.property, decl.value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PropertyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decl in &self.declarations {
            writeln!(f, "  {}: {}", decl.property, decl.value)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
