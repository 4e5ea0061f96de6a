//! Turning a manifest into an evaluated requirement tree.

use crate::error::Result;
use crate::requirements::{Requirement, RequirementSet, SystemProbe};

use super::schema::{EntrySpec, Manifest, RequirementSpec};

impl Manifest {
    /// Evaluate every check and build the requirement tree.
    pub fn build(&self, probe: &dyn SystemProbe) -> Result<RequirementSet> {
        let mut set = RequirementSet::new(self.mode()?);
        self.apply_to(&mut set, probe)?;
        Ok(set)
    }

    /// Register this manifest's entries in an existing set.
    ///
    /// Requirements are added and groups merged, so checks already present
    /// absorb duplicates instead of appearing twice. The manifest's own mode
    /// is not used.
    pub fn apply_to(&self, set: &mut RequirementSet, probe: &dyn SystemProbe) -> Result<()> {
        apply_entries(&self.requirements, set, probe)
    }
}

fn apply_entries(
    entries: &[EntrySpec],
    set: &mut RequirementSet,
    probe: &dyn SystemProbe,
) -> Result<()> {
    for entry in entries {
        match entry {
            EntrySpec::Requirement(spec) => {
                set.add(build_requirement(spec, probe));
            }
            EntrySpec::Group(group) => {
                let mut nested = RequirementSet::new(group.mode()?);
                apply_entries(&group.requirements, &mut nested, probe)?;
                set.merge(nested);
            }
        }
    }
    Ok(())
}

fn build_requirement(spec: &RequirementSpec, probe: &dyn SystemProbe) -> Requirement {
    let mut requirement = Requirement::evaluate(spec.check.clone(), probe)
        .with_optional(spec.optional)
        .with_state_texts(spec.available.clone(), spec.unavailable.clone());
    if let Some(title) = &spec.title {
        requirement = requirement.with_title(title.clone());
    }
    for description in &spec.descriptions {
        requirement.add_description(description.clone());
    }
    requirement
}
