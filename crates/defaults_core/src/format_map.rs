use std::fmt;

/// One output format and the defaults profile used to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatEntry {
    pub format: String,
    pub profile: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateFormat(pub String);

impl fmt::Display for DuplicateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format \"{}\" declared more than once", self.0)
    }
}

/// Insertion-ordered map from format identifier to profile name.
///
/// Iteration order is declaration order. Inserting a format that is
/// already present is rejected and leaves the map unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatMap {
    entries: Vec<FormatEntry>,
}

impl FormatMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        format: impl Into<String>,
        profile: impl Into<String>,
    ) -> Result<(), DuplicateFormat> {
        let format = format.into();
        if self.contains(&format) {
            return Err(DuplicateFormat(format));
        }
        self.entries.push(FormatEntry {
            format,
            profile: profile.into(),
        });
        Ok(())
    }

    fn contains(&self, format: &str) -> bool {
        self.entries.iter().any(|e| e.format == format)
    }

    pub fn first(&self) -> Option<&FormatEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormatEntry> {
        self.entries.iter()
    }

    /// Drop every entry but the first declared one.
    pub fn truncate_to_first(&mut self) {
        self.entries.truncate(1);
    }
}

impl<'a> IntoIterator for &'a FormatMap {
    type Item = &'a FormatEntry;
    type IntoIter = std::slice::Iter<'a, FormatEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
