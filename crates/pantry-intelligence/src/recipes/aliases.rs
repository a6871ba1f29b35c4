// ABOUTME: Ingredient alias table mapping canonical names to alternate spellings
// ABOUTME: Immutable, explicitly constructed, and injected into the normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

use std::collections::HashMap;
use std::iter;

/// Built-in aliases, canonical name first. Entry order is the resolution order.
const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("tomato", &["tomatoes", "tomatoe", "tamatar"]),
    ("onion", &["onions", "pyaz"]),
    ("garlic", &["garlics", "lahsun"]),
    ("ginger", &["gingers", "adrak"]),
    ("chicken", &["chickens", "murgi", "murgh"]),
    ("rice", &["rices", "basmati", "jasmine"]),
    ("oil", &["oils", "ghee", "butter"]),
    ("salt", &["salts", "namak"]),
    ("pepper", &["peppers", "black pepper", "kali mirch"]),
    ("cumin", &["cumins", "jeera"]),
    ("coriander", &["cilantro", "dhania"]),
    ("turmeric", &["haldi"]),
    ("chili", &["chilies", "red chili", "lal mirch"]),
    ("milk", &["milks", "doodh"]),
    ("yogurt", &["yoghurt", "curd", "dahi"]),
    ("flour", &["flours", "maida"]),
    ("sugar", &["sugars", "cheeni"]),
    ("water", &["waters"]),
    ("lemon", &["lemons", "lime", "nimbu"]),
    ("potato", &["potatoes", "aloo"]),
    ("carrot", &["carrots", "gajar"]),
    ("spinach", &["spinaches", "palak"]),
    ("green beans", &["beans", "string beans", "lobiya"]),
    ("bell pepper", &["capsicum", "simla mirch"]),
    ("mushroom", &["mushrooms", "khumbh"]),
    ("peas", &["green peas", "matar"]),
    ("paneer", &["cottage cheese", "indian cheese"]),
    ("lentils", &["dal", "daal", "lens"]),
    ("chickpeas", &["chana", "garbanzo"]),
];

/// One canonical ingredient and the spellings that resolve to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    /// Preferred spelling
    pub canonical: String,
    /// Alternate spellings, stored lowercased
    pub aliases: Vec<String>,
}

/// A spelling claimed by more than one canonical entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasConflict {
    /// The ambiguous spelling
    pub spelling: String,
    /// Canonical entry that wins resolution (first in entry order)
    pub resolved_to: String,
    /// Canonical entry whose claim is shadowed
    pub shadowed: String,
}

/// Read-only mapping from alternate spellings to canonical ingredient names.
///
/// Resolution is exact-string: a cleaned fragment resolves only when it equals
/// a canonical name or one of its aliases. When two entries claim the same
/// spelling, the entry added first wins.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    index: HashMap<String, usize>,
}

impl AliasTable {
    /// Build a table from `(canonical, aliases)` pairs, in resolution order
    #[must_use]
    pub fn new<I, C, A, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, A)>,
        C: Into<String>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<AliasEntry> = entries
            .into_iter()
            .map(|(canonical, aliases)| AliasEntry {
                canonical: canonical.into(),
                aliases: aliases
                    .into_iter()
                    .map(|alias| alias.as_ref().to_lowercase())
                    .collect(),
            })
            .collect();

        let mut index = HashMap::new();
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.canonical.clone()).or_insert(position);
            for alias in &entry.aliases {
                index.entry(alias.clone()).or_insert(position);
            }
        }

        Self { entries, index }
    }

    /// The table shipped with the application
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_ALIASES
                .iter()
                .map(|(canonical, aliases)| (*canonical, aliases.iter().copied())),
        )
    }

    /// A table that resolves nothing
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Canonical form of `cleaned`, or `None` when no entry claims it
    #[must_use]
    pub fn resolve(&self, cleaned: &str) -> Option<&str> {
        self.index
            .get(cleaned)
            .and_then(|&position| self.entries.get(position))
            .map(|entry| entry.canonical.as_str())
    }

    /// Entries in resolution order
    #[must_use]
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    /// Number of canonical entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Spellings claimed by more than one entry.
    ///
    /// Aliases should be disjoint across canonical entries; this is the check
    /// used by tests and the `health` command to keep them that way.
    #[must_use]
    pub fn conflicts(&self) -> Vec<AliasConflict> {
        let mut conflicts = Vec::new();
        for (position, entry) in self.entries.iter().enumerate() {
            let spellings = iter::once(&entry.canonical).chain(entry.aliases.iter());
            for spelling in spellings {
                let Some(&owner) = self.index.get(spelling) else {
                    continue;
                };
                if owner != position {
                    conflicts.push(AliasConflict {
                        spelling: spelling.clone(),
                        resolved_to: self.entries[owner].canonical.clone(),
                        shadowed: entry.canonical.clone(),
                    });
                }
            }
        }
        conflicts
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}
