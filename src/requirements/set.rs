//! Requirement sets: ordered, nestable groups evaluated under a [`Mode`].
//!
//! A set is built once and then queried:
//!
//! - [`RequirementSet::add`] registers a leaf, folding it into an equal leaf
//!   that is already present
//! - [`RequirementSet::merge`] registers a whole set, flattening it only when
//!   both sides are any-of groups
//! - [`RequirementSet::fulfilled`] evaluates the tree
//!
//! # Example
//!
//! ```
//! use prereq::requirements::{Condition, Mode, Requirement, RequirementSet};
//!
//! let mut drivers = RequirementSet::new(Mode::Any);
//! drivers
//!     .add(Requirement::new(Condition::Command("psql".into()), false))
//!     .add(Requirement::new(Condition::Command("mysql".into()), true));
//!
//! let mut set = RequirementSet::default();
//! set.add(Requirement::new(Condition::Command("git".into()), true))
//!     .merge(drivers);
//!
//! assert!(set.fulfilled());
//! ```

use std::slice;
use std::vec;

use super::mode::Mode;
use super::requirement::Requirement;

/// One entry of a set: a leaf requirement or a nested set.
#[derive(Debug, Clone)]
pub enum Entry {
    Requirement(Requirement),
    Set(RequirementSet),
}

impl Entry {
    /// The leaf, if this entry is one.
    pub fn as_requirement(&self) -> Option<&Requirement> {
        match self {
            Entry::Requirement(requirement) => Some(requirement),
            Entry::Set(_) => None,
        }
    }

    /// The nested set, if this entry is one.
    pub fn as_set(&self) -> Option<&RequirementSet> {
        match self {
            Entry::Set(set) => Some(set),
            Entry::Requirement(_) => None,
        }
    }
}

impl From<Requirement> for Entry {
    fn from(requirement: Requirement) -> Self {
        Entry::Requirement(requirement)
    }
}

impl From<RequirementSet> for Entry {
    fn from(set: RequirementSet) -> Self {
        Entry::Set(set)
    }
}

/// Ordered collection of requirements and nested sets.
#[derive(Debug, Clone, Default)]
pub struct RequirementSet {
    mode: Mode,
    entries: Vec<Entry>,
    contains_mandatory: bool,
}

impl RequirementSet {
    /// Create an empty set evaluated under `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
            contains_mandatory: false,
        }
    }

    /// The evaluation mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Change the evaluation mode.
    ///
    /// Entries already forced optional by an any-of mode stay optional.
    pub fn set_mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Register a requirement.
    ///
    /// If an equal requirement is already a direct entry, the two are merged:
    /// the known one becomes mandatory when this is an all-of set and the new
    /// one is mandatory, and it receives the new one's descriptions.
    pub fn add(&mut self, requirement: Requirement) -> &mut Self {
        let mode = self.mode;
        if let Some(known) = self.find_equal_mut(&requirement) {
            let tightened = mode == Mode::All && !requirement.is_optional();
            if tightened {
                known.set_optional(false);
            }
            for description in requirement.descriptions() {
                known.add_description(description.clone());
            }
            tracing::debug!("Merged duplicate requirement {}", known.title());
            if tightened {
                self.contains_mandatory = true;
            }
            return self;
        }

        let mut requirement = requirement;
        match mode {
            Mode::Any => {
                requirement.set_optional(true);
            }
            Mode::All => {
                if !requirement.is_optional() {
                    self.contains_mandatory = true;
                }
            }
        }

        tracing::debug!(
            "Added requirement {} to {} set",
            requirement.title(),
            mode
        );
        self.entries.push(Entry::Requirement(requirement));
        self
    }

    /// Register all requirements of another set.
    ///
    /// Two any-of sets are flattened into one. Any other combination keeps
    /// `other` as a single nested entry; nesting an any-of set makes this set
    /// carry a mandatory requirement.
    pub fn merge(&mut self, other: RequirementSet) -> &mut Self {
        if self.mode == Mode::Any && other.mode == Mode::Any {
            tracing::debug!("Flattening any-of set with {} entries", other.len());
            for entry in other {
                match entry {
                    Entry::Set(set) => {
                        self.merge(set);
                    }
                    Entry::Requirement(requirement) => {
                        self.add(requirement);
                    }
                }
            }
        } else {
            if other.mode == Mode::Any {
                self.contains_mandatory = true;
            }
            tracing::debug!(
                "Nesting {} set with {} entries into {} set",
                other.mode,
                other.len(),
                self.mode
            );
            self.entries.push(Entry::Set(other));
        }
        self
    }

    /// Whether the set is satisfied under its mode.
    ///
    /// An empty set is never fulfilled. In an all-of set a failing optional
    /// requirement counts as satisfied, so a set holding only optional
    /// requirements is fulfilled even when every one of them fails.
    pub fn fulfilled(&self) -> bool {
        let mut state = false;
        for entry in &self.entries {
            match entry {
                Entry::Set(set) => {
                    if set.fulfilled() {
                        if self.mode == Mode::Any {
                            return true;
                        }
                        state = true;
                    } else if self.mode == Mode::All && set.has_any_mandatory_requirement() {
                        tracing::trace!("Nested {} set failed with mandatory content", set.mode);
                        return false;
                    }
                }
                Entry::Requirement(requirement) => {
                    if requirement.state() {
                        if self.mode == Mode::Any {
                            return true;
                        }
                        state = true;
                    } else if self.mode == Mode::All {
                        if !requirement.is_optional() {
                            tracing::trace!("Mandatory requirement {} failed", requirement.title());
                            return false;
                        }
                        state = true;
                    }
                }
            }
        }
        state
    }

    /// Whether a parent must treat a failure of this set as blocking.
    ///
    /// Any-of sets always count as mandatory.
    pub fn has_any_mandatory_requirement(&self) -> bool {
        self.contains_mandatory || self.mode == Mode::Any
    }

    /// Direct entries in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Every leaf requirement of the tree, depth first.
    pub fn requirements(&self) -> Requirements<'_> {
        Requirements {
            stack: vec![self.entries.iter()],
        }
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find_equal_mut(&mut self, requirement: &Requirement) -> Option<&mut Requirement> {
        self.entries.iter_mut().find_map(|entry| match entry {
            Entry::Requirement(known) if known.equals(requirement) => Some(known),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a RequirementSet {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for RequirementSet {
    type Item = Entry;
    type IntoIter = vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Depth-first iterator over the leaves of a [`RequirementSet`].
pub struct Requirements<'a> {
    stack: Vec<slice::Iter<'a, Entry>>,
}

impl<'a> Iterator for Requirements<'a> {
    type Item = &'a Requirement;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entries = self.stack.last_mut()?;
            match entries.next() {
                Some(Entry::Requirement(requirement)) => return Some(requirement),
                Some(Entry::Set(set)) => self.stack.push(set.entries.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::Condition;

    fn req(name: &str, state: bool, optional: bool) -> Requirement {
        Requirement::new(Condition::Command(name.to_string()), state).with_optional(optional)
    }

    fn leaf(set: &RequirementSet, index: usize) -> &Requirement {
        set.iter()
            .nth(index)
            .and_then(Entry::as_requirement)
            .expect("leaf entry")
    }

    #[test]
    fn empty_sets_are_not_fulfilled() {
        assert!(!RequirementSet::new(Mode::All).fulfilled());
        assert!(!RequirementSet::new(Mode::Any).fulfilled());
    }

    #[test]
    fn default_mode_is_all() {
        assert_eq!(RequirementSet::default().mode(), Mode::All);
    }

    #[test]
    fn all_with_failing_optional_is_fulfilled() {
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("a", true, false)).add(req("b", false, true));
        assert!(set.fulfilled());
    }

    #[test]
    fn all_with_failing_mandatory_is_not_fulfilled() {
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("a", true, false)).add(req("b", false, false));
        assert!(!set.fulfilled());
    }

    #[test]
    fn any_with_one_pass_is_fulfilled_and_forces_optional() {
        let mut set = RequirementSet::new(Mode::Any);
        set.add(req("a", false, false)).add(req("b", true, false));
        assert!(set.fulfilled());
        assert!(leaf(&set, 0).is_optional());
        assert!(leaf(&set, 1).is_optional());
    }

    #[test]
    fn any_with_only_failures_is_not_fulfilled() {
        let mut set = RequirementSet::new(Mode::Any);
        set.add(req("a", false, false)).add(req("b", false, true));
        assert!(!set.fulfilled());
    }

    #[test]
    fn optional_failures_alone_still_fulfil_all_set() {
        // A set of only optional requirements is satisfiable even if all fail.
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("a", false, true)).add(req("b", false, true));
        assert!(set.fulfilled());
        assert!(!set.has_any_mandatory_requirement());
    }

    #[test]
    fn duplicate_in_all_mode_tightens_to_mandatory_and_unions_descriptions() {
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("git", true, true).with_description("Fetch modules"))
            .add(req("git", true, false).with_description("Clone themes"));

        assert_eq!(set.len(), 1);
        let merged = leaf(&set, 0);
        assert!(!merged.is_optional());
        assert_eq!(merged.descriptions(), ["Fetch modules", "Clone themes"]);
    }

    #[test]
    fn duplicate_tightening_marks_set_mandatory() {
        let mut php = RequirementSet::new(Mode::All);
        php.add(req("php", false, true));
        assert!(!php.has_any_mandatory_requirement());
        php.add(req("php", false, false));
        assert!(php.has_any_mandatory_requirement());
        assert!(!php.fulfilled());

        let mut outer = RequirementSet::new(Mode::All);
        outer.add(req("git", true, false)).merge(php);
        assert!(!outer.fulfilled());
    }

    #[test]
    fn duplicate_optional_does_not_loosen_mandatory() {
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("git", true, false)).add(req("git", true, true));
        assert_eq!(set.len(), 1);
        assert!(!leaf(&set, 0).is_optional());
    }

    #[test]
    fn duplicate_keeps_first_state() {
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("git", false, false)).add(req("git", true, false));
        assert_eq!(set.len(), 1);
        assert!(!leaf(&set, 0).state());
        assert!(!set.fulfilled());
    }

    #[test]
    fn duplicate_in_any_mode_stays_optional() {
        let mut set = RequirementSet::new(Mode::Any);
        set.add(req("git", true, false).with_description("one"))
            .add(req("git", true, false).with_description("two"));
        assert_eq!(set.len(), 1);
        assert!(leaf(&set, 0).is_optional());
        assert_eq!(leaf(&set, 0).descriptions().len(), 2);
    }

    #[test]
    fn add_does_not_match_inside_nested_sets() {
        let mut inner = RequirementSet::new(Mode::All);
        inner.add(req("git", true, false));
        let mut set = RequirementSet::new(Mode::All);
        set.merge(inner).add(req("git", true, false));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn merging_any_into_any_flattens() {
        let mut other = RequirementSet::new(Mode::Any);
        other.add(req("psql", false, false)).add(req("mysql", true, false));
        let mut set = RequirementSet::new(Mode::Any);
        set.add(req("sqlite3", false, false)).merge(other);

        assert_eq!(set.len(), 3);
        assert!(set.iter().all(|e| e.as_requirement().is_some()));
        assert!(set.fulfilled());
    }

    #[test]
    fn flattening_deduplicates_against_existing_leaves() {
        let mut other = RequirementSet::new(Mode::Any);
        other.add(req("psql", false, false).with_description("PostgreSQL"));
        let mut set = RequirementSet::new(Mode::Any);
        set.add(req("psql", false, false)).merge(other);
        assert_eq!(set.len(), 1);
        assert_eq!(leaf(&set, 0).descriptions(), ["PostgreSQL"]);
    }

    #[test]
    fn flattening_recurses_through_nested_any_sets() {
        let mut deepest = RequirementSet::new(Mode::Any);
        deepest.add(req("c", true, false));
        let mut middle = RequirementSet::new(Mode::Any);
        middle.add(req("b", false, false)).merge(deepest);
        let mut set = RequirementSet::new(Mode::Any);
        set.add(req("a", false, false)).merge(middle);

        assert_eq!(set.len(), 3);
        assert!(set.iter().all(|e| e.as_requirement().is_some()));
    }

    #[test]
    fn flattening_keeps_nested_all_sets_nested() {
        let mut all = RequirementSet::new(Mode::All);
        all.add(req("x", true, false));
        let mut other = RequirementSet::new(Mode::Any);
        other.merge(all);
        let mut set = RequirementSet::new(Mode::Any);
        set.merge(other);

        assert_eq!(set.len(), 1);
        assert!(set.iter().next().unwrap().as_set().is_some());
    }

    #[test]
    fn merging_any_into_all_nests_and_marks_mandatory() {
        let mut other = RequirementSet::new(Mode::Any);
        other.add(req("psql", true, false));
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("git", true, true));
        assert!(!set.has_any_mandatory_requirement());

        set.merge(other);
        assert_eq!(set.len(), 2);
        assert!(set.iter().nth(1).unwrap().as_set().is_some());
        assert!(set.has_any_mandatory_requirement());
    }

    #[test]
    fn merging_all_into_all_nests_without_marking() {
        let mut other = RequirementSet::new(Mode::All);
        other.add(req("x", true, true));
        let mut set = RequirementSet::new(Mode::All);
        set.merge(other);
        assert_eq!(set.len(), 1);
        assert!(!set.has_any_mandatory_requirement());
    }

    #[test]
    fn merging_all_into_any_nests() {
        let mut other = RequirementSet::new(Mode::All);
        other.add(req("x", true, false));
        let mut set = RequirementSet::new(Mode::Any);
        set.merge(other);
        assert_eq!(set.len(), 1);
        assert!(set.fulfilled());
    }

    #[test]
    fn all_with_failing_nested_any_is_not_fulfilled() {
        let mut drivers = RequirementSet::new(Mode::Any);
        drivers.add(req("psql", false, false)).add(req("mysql", false, false));
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("git", true, false)).merge(drivers);
        assert!(!set.fulfilled());
    }

    #[test]
    fn all_tolerates_failing_nested_set_without_mandatory_content() {
        let mut extras = RequirementSet::new(Mode::All);
        extras.add(req("imagick", false, true)).add(req("ldap", false, true));
        let failing = RequirementSet::new(Mode::All);
        assert!(!failing.fulfilled());
        assert!(!failing.has_any_mandatory_requirement());

        let mut set = RequirementSet::new(Mode::All);
        set.add(req("git", true, false)).merge(extras).merge(failing);
        assert!(set.fulfilled());
    }

    #[test]
    fn all_fails_on_failing_nested_all_with_mandatory() {
        let mut inner = RequirementSet::new(Mode::All);
        inner.add(req("php", false, false));
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("git", true, false)).merge(inner);
        assert!(!set.fulfilled());
    }

    #[test]
    fn any_succeeds_through_nested_set() {
        let mut inner = RequirementSet::new(Mode::All);
        inner.add(req("php", true, false));
        let mut set = RequirementSet::new(Mode::Any);
        set.add(req("hhvm", false, false)).merge(inner);
        assert!(set.fulfilled());
    }

    #[test]
    fn set_mode_does_not_retag_existing_entries() {
        let mut set = RequirementSet::new(Mode::Any);
        set.add(req("a", false, false));
        set.set_mode(Mode::All);
        assert!(leaf(&set, 0).is_optional());
        // Still optional, so the failure is tolerated under all-of.
        assert!(set.fulfilled());

        set.add(req("b", false, false));
        assert!(!leaf(&set, 1).is_optional());
        assert!(!set.fulfilled());
    }

    #[test]
    fn any_mode_sets_are_always_mandatory() {
        let set = RequirementSet::new(Mode::Any);
        assert!(set.has_any_mandatory_requirement());
    }

    #[test]
    fn mandatory_flag_tracks_additions() {
        let mut set = RequirementSet::new(Mode::All);
        assert!(!set.has_any_mandatory_requirement());
        set.add(req("a", true, true));
        assert!(!set.has_any_mandatory_requirement());
        set.add(req("b", true, false));
        assert!(set.has_any_mandatory_requirement());
    }

    #[test]
    fn iteration_is_ordered_and_restartable() {
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("a", true, false))
            .add(req("b", true, false))
            .add(req("c", true, false));

        let first: Vec<_> = set.iter().map(|e| e.as_requirement().unwrap().title()).collect();
        let second: Vec<_> = (&set)
            .into_iter()
            .map(|e| e.as_requirement().unwrap().title())
            .collect();
        assert_eq!(first, ["Command 'a'", "Command 'b'", "Command 'c'"]);
        assert_eq!(first, second);
    }

    #[test]
    fn requirements_walks_leaves_depth_first() {
        let mut inner = RequirementSet::new(Mode::All);
        inner.add(req("b", true, false)).add(req("c", true, false));
        let mut set = RequirementSet::new(Mode::All);
        set.add(req("a", true, false)).merge(inner).add(req("d", true, false));

        let names: Vec<_> = set
            .requirements()
            .map(|r| r.condition().to_string())
            .collect();
        assert_eq!(
            names,
            ["Command 'a'", "Command 'b'", "Command 'c'", "Command 'd'"]
        );
    }
}
