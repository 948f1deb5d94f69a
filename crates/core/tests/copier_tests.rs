//! End-to-end copy scenarios.
//!
//! These tests drive the copier with a scripted console, an in-memory
//! remote repository and the real file store in a temporary folder.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::Path;

use tempfile::tempdir;
use variable_group_copier_core::config::Defaults;
use variable_group_copier_core::console::UserConsole;
use variable_group_copier_core::copier::{Copier, CopySummary};
use variable_group_copier_core::error::{Error, InvalidParameters, Result};
use variable_group_copier_core::literals::same_name;
use variable_group_copier_core::repository::{FileRepository, VariableGroupRepository};
use variable_group_copier_core::resolver::ParametersResolver;
use variable_group_copier_core::variable_group::{VariableGroup, VariableValue};

struct ScriptedConsole {
    answers: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(ToString::to_string).collect(),
            output: String::new(),
        }
    }
}

impl UserConsole for ScriptedConsole {
    fn write(&mut self, message: &str) -> Result<()> {
        self.output.push_str(message);
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        Ok(self.answers.pop_front().expect("script ran out of answers"))
    }

    fn wait_any_key(&mut self, _message: Option<&str>) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct MemoryRepository {
    groups: RefCell<Vec<(String, VariableGroup)>>,
    next_id: Cell<i64>,
    deletes: Cell<usize>,
    adds: Cell<usize>,
    fail_adds: bool,
}

impl MemoryRepository {
    fn with_groups(groups: &[(&str, VariableGroup)]) -> Self {
        let repository = Self::default();
        for (project, group) in groups {
            repository.insert(project, group.clone());
        }
        repository
    }

    fn insert(&self, project: &str, mut group: VariableGroup) {
        self.next_id.set(self.next_id.get() + 1);
        group.id = Some(self.next_id.get());
        self.groups.borrow_mut().push((project.to_string(), group));
    }

    fn find(&self, project: &str, name: &str) -> Option<VariableGroup> {
        self.groups
            .borrow()
            .iter()
            .find(|(p, g)| same_name(p, project) && same_name(&g.name, name))
            .map(|(_, g)| g.clone())
    }

    fn names(&self, project: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .groups
            .borrow()
            .iter()
            .filter(|(p, _)| same_name(p, project))
            .map(|(_, g)| g.name.clone())
            .collect();
        names.sort();
        names
    }
}

impl VariableGroupRepository for MemoryRepository {
    fn get_all(&self, project: &str, group: &str) -> Result<Vec<VariableGroup>> {
        if group == "*" {
            return Ok(self
                .groups
                .borrow()
                .iter()
                .filter(|(p, _)| same_name(p, project))
                .map(|(_, g)| g.clone())
                .collect());
        }

        Ok(self.find(project, group).into_iter().collect())
    }

    fn get(&self, project: &str, name: &str) -> Result<Option<VariableGroup>> {
        Ok(self.find(project, name))
    }

    fn delete(&self, project: &str, id: i64) -> Result<()> {
        self.deletes.set(self.deletes.get() + 1);
        self.groups
            .borrow_mut()
            .retain(|(p, g)| !(same_name(p, project) && g.id == Some(id)));
        Ok(())
    }

    fn add(&self, project: &str, name: &str, group: &VariableGroup) -> Result<()> {
        if self.fail_adds {
            return Err(Error::remote_error(503, "memory://", "unavailable".to_string()));
        }

        self.adds.set(self.adds.get() + 1);
        self.groups
            .borrow_mut()
            .retain(|(p, g)| !(same_name(p, project) && same_name(&g.name, name)));

        let mut stored = group.clone();
        stored.name = name.to_string();
        self.insert(project, stored);
        Ok(())
    }
}

fn group(name: &str, value: &str) -> VariableGroup {
    let mut group = VariableGroup {
        name: name.to_string(),
        group_type: Some("Vsts".to_string()),
        ..VariableGroup::default()
    };
    group.variables.insert(
        "Setting".to_string(),
        VariableValue {
            value: Some(value.to_string()),
            is_secret: false,
        },
    );
    group
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn copier(answers: &[&str]) -> Copier<ScriptedConsole> {
    let defaults = Defaults {
        account: Some("acme".to_string()),
        token: Some("secret".to_string()),
        ..Defaults::default()
    };
    Copier::new(ParametersResolver::new(ScriptedConsole::new(answers), defaults))
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_clone_within_project_uses_cloned_suffix() {
    let remote = MemoryRepository::with_groups(&[("ProjA", group("GroupX", "original"))]);
    let original = remote.find("ProjA", "GroupX").unwrap();

    // accept the default target group, then decline to continue
    let mut copier = copier(&["", "n"]);
    let summary = copier
        .copy(&args(&["ProjA", "GroupX", "ProjA"]), |account, token| {
            assert_eq!(account, "acme");
            assert_eq!(token, "secret");
            Ok(&remote)
        })
        .unwrap();

    assert_eq!(summary, CopySummary { copied: 1, skipped: 0 });
    assert_eq!(remote.names("ProjA"), vec!["GroupX", "GroupX - Cloned"]);
    assert_eq!(remote.find("ProjA", "GroupX").unwrap(), original);

    let cloned = remote.find("ProjA", "GroupX - Cloned").unwrap();
    assert_eq!(cloned.variables, original.variables);
    assert_ne!(cloned.id, original.id);
    assert!(copier.resolver().interactive_mode());
}

#[test]
fn test_import_folder_with_prefix() {
    let dir = tempdir().unwrap();
    FileRepository
        .add("/file", path_str(&dir.path().join("g1.json")), &group("g1", "one"))
        .unwrap();
    FileRepository
        .add("/file", path_str(&dir.path().join("g2.json")), &group("g2", "two"))
        .unwrap();

    let remote = MemoryRepository::default();
    let mut copier = copier(&[]);
    let summary = copier
        .copy(
            &args(&["/file", path_str(dir.path()), "ProjB", "imported-"]),
            |_, _| Ok(&remote),
        )
        .unwrap();

    assert_eq!(summary.copied, 2);
    assert_eq!(remote.names("ProjB"), vec!["imported-g1", "imported-g2"]);
    assert_eq!(
        remote.find("ProjB", "imported-g2").unwrap().variables["Setting"].value.as_deref(),
        Some("two")
    );
    assert!(!copier.resolver().interactive_mode());
}

#[test]
fn test_export_to_folder_and_import_back() {
    let dir = tempdir().unwrap();
    let folder = dir.path().join("backup");
    let remote = MemoryRepository::with_groups(&[("ProjA", group("GroupX", "exported"))]);

    copier(&[])
        .copy(
            &args(&["ProjA", "GroupX", "/file", path_str(&folder)]),
            |_, _| Ok(&remote),
        )
        .unwrap();

    let file = folder.join("GroupX.json");
    assert!(file.is_file());
    let stored = FileRepository.get("/file", path_str(&file)).unwrap().unwrap();
    assert_eq!(stored.id, None);

    copier(&[])
        .copy(
            &args(&["/file", path_str(&file), "ProjB", "Restored-"]),
            |_, _| Ok(&remote),
        )
        .unwrap();

    let restored = remote.find("ProjB", "Restored-GroupX").unwrap();
    assert_eq!(restored.variables["Setting"].value.as_deref(), Some("exported"));
}

#[test]
fn test_declined_override_leaves_target_untouched() {
    let remote = MemoryRepository::with_groups(&[
        ("ProjA", group("GroupX", "new")),
        ("ProjB", group("GroupX", "old")),
    ]);
    let existing = remote.find("ProjB", "GroupX").unwrap();

    let summary = copier(&[])
        .copy(
            &args(&["ProjA", "GroupX", "ProjB", "GroupX", "", "n"]),
            |_, _| Ok(&remote),
        )
        .unwrap();

    assert_eq!(summary, CopySummary { copied: 0, skipped: 1 });
    assert_eq!(remote.deletes.get(), 0);
    assert_eq!(remote.adds.get(), 0);
    assert_eq!(remote.find("ProjB", "GroupX").unwrap(), existing);
}

#[test]
fn test_declined_item_does_not_stop_the_batch() {
    let remote = MemoryRepository::with_groups(&[
        ("ProjA", group("g1", "a1")),
        ("ProjA", group("g2", "a2")),
        ("ProjB", group("g1", "b1")),
    ]);

    // decline overwriting g1, then decline to continue
    let mut copier = copier(&["n", "n"]);
    let summary = copier
        .copy(&args(&["ProjA", "*", "ProjB", "*"]), |_, _| Ok(&remote))
        .unwrap();

    assert_eq!(summary, CopySummary { copied: 1, skipped: 1 });
    assert_eq!(
        remote.find("ProjB", "g1").unwrap().variables["Setting"].value.as_deref(),
        Some("b1")
    );
    assert_eq!(
        remote.find("ProjB", "g2").unwrap().variables["Setting"].value.as_deref(),
        Some("a2")
    );
}

#[test]
fn test_confirmed_override_replaces_target() {
    let remote = MemoryRepository::with_groups(&[
        ("ProjA", group("GroupX", "new")),
        ("ProjB", group("Renamed", "old")),
    ]);

    let summary = copier(&[])
        .copy(
            &args(&["ProjA", "GroupX", "ProjB", "Renamed", "", "y"]),
            |_, _| Ok(&remote),
        )
        .unwrap();

    assert_eq!(summary.copied, 1);
    assert_eq!(remote.deletes.get(), 1);
    assert_eq!(remote.names("ProjB"), vec!["Renamed"]);
    assert_eq!(
        remote.find("ProjB", "Renamed").unwrap().variables["Setting"].value.as_deref(),
        Some("new")
    );
}

#[test]
fn test_no_matching_source_groups_is_not_fatal() {
    let remote = MemoryRepository::default();

    let summary = copier(&[])
        .copy(&args(&["ProjA", "Missing", "ProjB", "Other"]), |_, _| Ok(&remote))
        .unwrap();

    assert_eq!(summary, CopySummary::default());
}

#[test]
fn test_continuation_runs_another_batch() {
    let remote = MemoryRepository::with_groups(&[
        ("ProjA", group("GroupX", "x")),
        ("ProjA", group("GroupY", "y")),
    ]);

    let mut copier = copier(&[
        // first batch: source group, target project, target group
        "GroupX", "ProjB", "",
        // continue, keep source project, next group, keep target project, default target group
        "y", "", "GroupY", "", "",
        // stop
        "n",
    ]);
    let summary = copier.copy(&args(&["ProjA"]), |_, _| Ok(&remote)).unwrap();

    assert_eq!(summary.copied, 2);
    assert_eq!(remote.names("ProjB"), vec!["GroupX", "GroupY"]);
}

#[test]
fn test_invalid_parameters_abort_before_connecting() {
    let remote = MemoryRepository::default();
    let connected = Cell::new(false);

    let mut copier = copier(&[]);
    let result = copier.copy(&args(&["/file", "a.json", "/file", "out"]), |_, _| {
        connected.set(true);
        Ok(&remote)
    });

    assert!(matches!(
        result,
        Err(Error::InvalidParameters(InvalidParameters::BothFiles))
    ));
    assert!(!connected.get());
}

#[test]
fn test_invalid_continuation_ends_the_run() {
    let remote = MemoryRepository::with_groups(&[("ProjA", group("GroupX", "x"))]);

    let mut copier = copier(&[
        "GroupX", "ProjB", "",
        // continue with a target identical to the source
        "y", "", "GroupX", "ProjA", "GroupX",
    ]);
    let result = copier.copy(&args(&["ProjA"]), |_, _| Ok(&remote));

    assert!(matches!(
        result,
        Err(Error::InvalidParameters(InvalidParameters::SameSourceAndTarget))
    ));
    assert_eq!(remote.names("ProjB"), vec!["GroupX"]);
}

#[test]
fn test_transport_error_terminates_the_run() {
    let remote = MemoryRepository {
        fail_adds: true,
        ..MemoryRepository::with_groups(&[("ProjA", group("GroupX", "x"))])
    };

    // interactive run: a prompt happened, yet no "continue?" question follows the failure
    let mut copier = copier(&["Copy"]);
    let result = copier.copy(&args(&["ProjA", "GroupX", "ProjB"]), |_, _| Ok(&remote));

    assert!(matches!(result, Err(Error::Remote { status: 503, .. })));
    assert!(!copier.resolver_mut().console_mut().output.contains("Continue"));
}
