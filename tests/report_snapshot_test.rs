//! Snapshot tests for checklist output.

use prereq::report::{Checklist, ChecklistFormatter, HumanFormatter};
use prereq::requirements::{Condition, Mode, Requirement, RequirementSet};

fn wizard_set() -> RequirementSet {
    let mut drivers = RequirementSet::new(Mode::Any);
    drivers
        .add(Requirement::new(Condition::Command("psql".into()), false))
        .add(Requirement::new(Condition::Command("mysql".into()), true));

    let mut set = RequirementSet::new(Mode::All);
    set.add(
        Requirement::new(Condition::Command("git".into()), true)
            .with_title("Git")
            .with_state_texts(Some("installed".into()), None),
    )
    .add(
        Requirement::new(Condition::Command("convert".into()), false)
            .with_title("ImageMagick")
            .with_optional(true)
            .with_description("Renders graph exports"),
    )
    .merge(drivers);
    set
}

fn human(checklist: &Checklist, details: bool) -> String {
    let mut out = Vec::new();
    HumanFormatter::new(false, details)
        .format(checklist, &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn human_checklist() {
    let checklist = Checklist::from_set(&wizard_set(), None);
    insta::assert_snapshot!(human(&checklist, false), @r"
    ✓ Git: installed
    ⚠ ImageMagick (optional)
    ✓ One of:
      ⚠ Command 'psql' (optional)
      ✓ Command 'mysql' (optional)
    ");
}

#[test]
fn human_checklist_with_details() {
    let checklist = Checklist::from_set(&wizard_set(), None);
    insta::assert_snapshot!(human(&checklist, true), @r"
    ✓ Git: installed
    ⚠ ImageMagick (optional)
        Renders graph exports
    ✓ One of:
      ⚠ Command 'psql' (optional)
      ✓ Command 'mysql' (optional)
    ");
}

#[test]
fn json_checklist() {
    let mut set = RequirementSet::new(Mode::All);
    set.add(
        Requirement::new(Condition::Command("git".into()), true)
            .with_title("Git")
            .with_state_texts(Some("installed".into()), None),
    )
    .add(
        Requirement::new(Condition::Command("convert".into()), false)
            .with_title("ImageMagick")
            .with_optional(true),
    );
    let checklist = Checklist::from_set(&set, Some("Demo"));

    insta::assert_json_snapshot!(checklist, @r#"
    {
      "title": "Demo",
      "mode": "all",
      "fulfilled": true,
      "items": [
        {
          "kind": "requirement",
          "depth": 0,
          "title": "Git",
          "status": "passed",
          "optional": false,
          "message": "installed"
        },
        {
          "kind": "requirement",
          "depth": 0,
          "title": "ImageMagick",
          "status": "skipped",
          "optional": true
        }
      ],
      "summary": {
        "total": 2,
        "passed": 1,
        "failed": 0,
        "skipped": 1,
        "blocking_groups": 0
      }
    }
    "#);
}
