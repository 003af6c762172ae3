// Rust guideline compliant 2026-10-19

//! Integration tests for the pre-receive hook against real repositories.

use git2::{Repository, Signature};
use pushgate_core::Config;
use pushgate_hooks::{run, GitRepository, HookOutcome};
use tempfile::TempDir;

const ZERO: &str = "0000000000000000000000000000000000000000";

/// A bare repository with `main` pointing at an initial commit.
struct Fixture {
    _dir: TempDir,
    repo: Repository,
    base: git2::Oid,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = Repository::init_bare(dir.path()).expect("Failed to init repository");
        let base = create_commit(&repo, None, "Initial commit");
        repo.reference("refs/heads/main", base, true, "init")
            .expect("Failed to create main");
        Self {
            _dir: dir,
            repo,
            base,
        }
    }

    /// Creates an unreferenced commit, like an object received but not yet accepted.
    fn pushed(&self, parent: git2::Oid, message: &str) -> git2::Oid {
        create_commit(&self.repo, Some(parent), message)
    }

    fn run(&self, input: &str, config: &Config) -> (HookOutcome, String) {
        self.run_bytes(input.as_bytes(), config)
    }

    fn run_bytes(&self, input: &[u8], config: &Config) -> (HookOutcome, String) {
        let source = GitRepository::open(self.repo.path())
            .expect("Failed to open repository")
            .with_exclude_existing_refs(config.exclude_existing_refs);
        let mut stderr = Vec::new();
        let outcome = run(input, &mut stderr, config, &source);
        (outcome, String::from_utf8(stderr).expect("stderr should be UTF-8"))
    }
}

fn create_commit(repo: &Repository, parent: Option<git2::Oid>, message: &str) -> git2::Oid {
    let sig = Signature::now("Tester", "tester@example.com").expect("Failed to create signature");
    let tree_id = repo
        .treebuilder(None)
        .and_then(|builder| builder.write())
        .expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let parents: Vec<git2::Commit<'_>> = parent
        .map(|p| repo.find_commit(p).expect("Failed to find parent"))
        .into_iter()
        .collect();
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
    repo.commit(None, &sig, &sig, message, &tree, &parent_refs)
        .expect("Failed to create commit")
}

fn ticket_config() -> Config {
    let mut config = Config::default();
    config.message.required_subject_pattern = r"^[A-Z]+-\d+: ".to_string();
    config
}

#[test]
fn test_good_push_exits_zero_silently() {
    let fx = Fixture::new();
    let first = fx.pushed(fx.base, "Add hook input parser");
    let second = fx.pushed(first, "Cover malformed input\n\nAdd unit tests for each case.\n");

    let input = format!("{} {} refs/heads/main\n", fx.base, second);
    let (outcome, stderr) = fx.run(&input, &Config::default());

    assert_eq!(outcome.exit_code, 0);
    assert!(outcome.accepted());
    assert_eq!(stderr, "");
    assert_eq!(outcome.report.expect("Report expected").commits_checked, 2);
}

#[test]
fn test_empty_input_is_accepted() {
    let fx = Fixture::new();
    let (outcome, stderr) = fx.run("", &Config::default());
    assert_eq!(outcome.exit_code, 0);
    assert_eq!(stderr, "");
}

#[test]
fn test_branch_with_space_is_rejected() {
    let fx = Fixture::new();
    let tip = fx.pushed(fx.base, "Add hook input parser");

    let input = format!("{} {} refs/heads/bad branch\n", ZERO, tip);
    let (outcome, stderr) = fx.run(&input, &Config::default());

    assert_eq!(outcome.exit_code, 1);
    assert!(stderr.contains("refs/heads/bad branch"));
    assert!(stderr.contains("branch-no-whitespace"));
}

#[test]
fn test_non_utf8_branch_is_a_rule_violation() {
    let fx = Fixture::new();
    let tip = fx.pushed(fx.base, "Add hook input parser");

    let mut input = format!("{} {} refs/heads/caf", ZERO, tip).into_bytes();
    input.extend_from_slice(b"\xE9\n");
    let (outcome, stderr) = fx.run_bytes(&input, &Config::default());

    assert_eq!(outcome.exit_code, 1);
    assert!(stderr.contains("[branch-ascii]"));
    assert!(!stderr.contains("IO error"));
}

#[test]
fn test_missing_ticket_names_commit() {
    let fx = Fixture::new();
    let tip = fx.pushed(fx.base, "fix bug");

    let input = format!("{} {} refs/heads/main\n", fx.base, tip);
    let (outcome, stderr) = fx.run(&input, &ticket_config());

    assert_ne!(outcome.exit_code, 0);
    assert!(stderr.contains(&tip.to_string()));
    assert!(stderr.contains("subject-ticket"));
}

#[test]
fn test_ticket_example_is_accepted() {
    let fx = Fixture::new();
    let tip = fx.pushed(fx.base, "JIRA-42: fix null check");

    let mut config = ticket_config();
    config.branch.pattern = r"^[a-z]+/[A-Z]+-\d+$".to_string();
    config.message.capitalize_subject = false;

    let input = format!("{} {} refs/heads/feature/JIRA-42\n", ZERO, tip);
    let (outcome, stderr) = fx.run(&input, &config);

    assert_eq!(outcome.exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stderr, "");
}

#[test]
fn test_every_bad_commit_is_reported() {
    let fx = Fixture::new();
    let first = fx.pushed(fx.base, "fix bug");
    let second = fx.pushed(first, "Fixed another bug.");

    let input = format!("{} {} refs/heads/main\n", fx.base, second);
    let (outcome, stderr) = fx.run(&input, &Config::default());

    assert_eq!(outcome.exit_code, 1);
    assert!(stderr.contains(&first.to_string()));
    assert!(stderr.contains(&second.to_string()));
    assert!(stderr.contains("PUSH REJECTED"));
}

#[test]
fn test_deletion_is_accepted() {
    let fx = Fixture::new();
    let input = format!("{} {} refs/heads/Not Valid\n", fx.base, ZERO);
    let (outcome, stderr) = fx.run(&input, &Config::default());

    assert_eq!(outcome.exit_code, 0);
    assert_eq!(stderr, "");
}

#[test]
fn test_malformed_input_is_fatal() {
    let fx = Fixture::new();
    let (outcome, stderr) = fx.run("this is not hook input\n", &Config::default());

    assert_eq!(outcome.exit_code, 2);
    assert!(outcome.report.is_none());
    assert!(stderr.starts_with("pushgate: Malformed hook input on line 1"));
}

#[test]
fn test_unknown_object_is_git_failure() {
    let fx = Fixture::new();
    let input = format!("{} {} refs/heads/main\n", fx.base, "b".repeat(40));
    let (outcome, stderr) = fx.run(&input, &Config::default());

    assert_eq!(outcome.exit_code, 3);
    assert!(stderr.starts_with("pushgate: Git error"));
}

#[test]
fn test_invalid_pattern_is_config_failure() {
    let fx = Fixture::new();
    let mut config = Config::default();
    config.branch.pattern = "[".to_string();
    let (outcome, stderr) = fx.run("", &config);

    assert_eq!(outcome.exit_code, 4);
    assert!(stderr.contains("branch-pattern"));
}

#[test]
fn test_hook_is_idempotent() {
    let fx = Fixture::new();
    let tip = fx.pushed(fx.base, "fix bug");
    let input = format!("{} {} refs/heads/main\n", fx.base, tip);

    let (first, first_err) = fx.run(&input, &Config::default());
    let (second, second_err) = fx.run(&input, &Config::default());

    assert_eq!(first, second);
    assert_eq!(first_err, second_err);
}
