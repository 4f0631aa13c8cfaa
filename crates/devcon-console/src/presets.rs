//! Canned command strings shown as clickable shortcuts, grouped for menus.

use devcon_types::error::{ConsoleError, Result};

/// Label of the header drawn above ungrouped presets.
pub const UNGROUPED_LABEL: &str = "Etc.";

/// A pre-defined command line with display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetEntry {
    /// Command line inserted or executed when the preset is activated.
    pub text: String,
    /// Button label.
    pub name: String,
    pub description: Option<String>,
    pub group: Option<String>,
    /// Execute on activation instead of copying into the input line.
    pub execute_immediately: bool,
}

impl PresetEntry {
    /// Sort key: ungrouped presets sort as the empty group.
    fn group_key(&self) -> &str {
        self.group.as_deref().unwrap_or("")
    }
}

/// One row of the rendered preset menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRow<'a> {
    /// Clickable header of a named group.
    Group { name: &'a str, expanded: bool },
    /// Static header above ungrouped presets.
    Ungrouped,
    /// A preset button; `index` is its position in the catalog.
    Preset { index: usize, entry: &'a PresetEntry },
}

/// Preset list kept sorted by group after every insertion.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    entries: Vec<PresetEntry>,
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a preset.
    ///
    /// `text` and `name` must not be blank. Every field is trimmed, and a
    /// blank description or group becomes `None`. Duplicates are allowed.
    pub fn add(
        &mut self,
        text: &str,
        name: &str,
        description: Option<&str>,
        group: Option<&str>,
        execute_immediately: bool,
    ) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ConsoleError::InvalidArgument(
                "preset text cannot be empty".to_string(),
            ));
        }
        if name.trim().is_empty() {
            return Err(ConsoleError::InvalidArgument(
                "preset name cannot be empty".to_string(),
            ));
        }
        self.entries.push(PresetEntry {
            text: text.trim().to_string(),
            name: name.trim().to_string(),
            description: non_blank(description),
            group: non_blank(group),
            execute_immediately,
        });
        // Stable: presets within a group keep insertion order.
        self.entries.sort_by(|a, b| a.group_key().cmp(b.group_key()));
        Ok(())
    }

    /// Remove the first preset named `name`.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|e| e.name == name) {
            Some(index) => {
                self.entries.remove(index);
                true
            },
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&PresetEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PresetEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Command texts in catalog order.
    pub fn texts(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }

    /// Display names in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Rows to draw for the preset menu.
    ///
    /// Every group gets a header. Ungrouped presets are always listed;
    /// grouped presets only when their group is `expanded_group`.
    pub fn menu(&self, expanded_group: Option<&str>) -> Vec<MenuRow<'_>> {
        let mut rows = Vec::new();
        let mut current: Option<Option<&str>> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            let group = entry.group.as_deref();
            if current != Some(group) {
                current = Some(group);
                rows.push(match group {
                    Some(name) => MenuRow::Group {
                        name,
                        expanded: expanded_group == Some(name),
                    },
                    None => MenuRow::Ungrouped,
                });
            }
            if group.is_none() || group == expanded_group {
                rows.push(MenuRow::Preset { index, entry });
            }
        }
        rows
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
