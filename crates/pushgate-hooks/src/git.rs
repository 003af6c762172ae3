// Rust guideline compliant 2026-10-19

//! `git2`-backed access to the repository receiving a push.

use git2::{Repository, RepositoryOpenFlags, Sort};
use pushgate_core::{CommitSource, Error, Oid, RefUpdate, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;

/// A repository opened for validating a push.
pub struct GitRepository {
    repo: Repository,
    exclude_existing_refs: bool,
}

impl GitRepository {
    /// Opens the repository described by the Git environment.
    ///
    /// Honors `GIT_DIR`, `GIT_OBJECT_DIRECTORY` and
    /// `GIT_ALTERNATE_OBJECT_DIRECTORIES`, so objects still held in the
    /// receive-pack quarantine are visible.
    ///
    /// # Errors
    ///
    /// Returns `Error::Git` if no repository can be opened.
    pub fn open_from_env() -> Result<Self> {
        let repo = Repository::open_from_env().map_err(git_error)?;
        Ok(Self::from_repository(repo))
    }

    /// Opens the repository at `path`.
    ///
    /// `GIT_OBJECT_DIRECTORY` and `GIT_ALTERNATE_OBJECT_DIRECTORIES` still
    /// apply, so a hook given an explicit path sees quarantined objects too.
    ///
    /// # Errors
    ///
    /// Returns `Error::Git` if `path` is not a repository.
    pub fn open(path: &Path) -> Result<Self> {
        let no_ceiling = std::iter::empty::<&OsStr>();
        let repo = Repository::open_ext(path, RepositoryOpenFlags::FROM_ENV, no_ceiling)
            .map_err(git_error)?;
        Ok(Self::from_repository(repo))
    }

    /// Wraps an already opened repository.
    pub fn from_repository(repo: Repository) -> Self {
        Self {
            repo,
            exclude_existing_refs: true,
        }
    }

    /// Sets whether commits reachable from existing refs are skipped.
    pub fn with_exclude_existing_refs(mut self, exclude: bool) -> Self {
        self.exclude_existing_refs = exclude;
        self
    }

    /// The repository's Git directory.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    fn hide_existing_refs(&self, walk: &mut git2::Revwalk<'_>) -> Result<()> {
        for reference in self.repo.references().map_err(git_error)? {
            let reference = reference.map_err(git_error)?;
            // Refs to trees or blobs have no history to hide.
            if let Ok(commit) = reference.peel_to_commit() {
                walk.hide(commit.id()).map_err(git_error)?;
            }
        }
        Ok(())
    }
}

impl CommitSource for GitRepository {
    fn new_commits(&self, update: &RefUpdate) -> Result<Vec<Oid>> {
        let mut walk = self.repo.revwalk().map_err(git_error)?;
        walk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)
            .map_err(git_error)?;
        walk.push(to_git2(&update.new)?).map_err(git_error)?;
        if !update.old.is_zero() {
            walk.hide(to_git2(&update.old)?).map_err(git_error)?;
        }
        if self.exclude_existing_refs {
            self.hide_existing_refs(&mut walk)?;
        }

        let mut commits = Vec::new();
        for id in walk {
            let id = id.map_err(git_error)?;
            commits.push(from_git2(id)?);
        }
        debug!(ref_name = %update.ref_name, count = commits.len(), "enumerated new commits");
        Ok(commits)
    }

    fn message(&self, id: &Oid) -> Result<String> {
        let commit = self.repo.find_commit(to_git2(id)?).map_err(git_error)?;
        Ok(String::from_utf8_lossy(commit.message_raw_bytes()).into_owned())
    }
}

fn to_git2(oid: &Oid) -> Result<git2::Oid> {
    git2::Oid::from_str(oid.as_str()).map_err(git_error)
}

fn from_git2(oid: git2::Oid) -> Result<Oid> {
    Oid::parse(&oid.to_string()).map_err(Error::Git)
}

fn git_error(err: git2::Error) -> Error {
    Error::Git(err.message().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    fn commit(repo: &Repository, parent: Option<git2::Oid>, message: &str) -> git2::Oid {
        let sig = Signature::now("Tester", "tester@example.com").unwrap();
        let tree_id = repo.treebuilder(None).unwrap().write().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<git2::Commit<'_>> = parent
            .map(|p| repo.find_commit(p).unwrap())
            .into_iter()
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
        repo.commit(None, &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    fn oid(id: git2::Oid) -> Oid {
        Oid::parse(&id.to_string()).unwrap()
    }

    #[test]
    fn test_new_commits_oldest_first() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init_bare(temp_dir.path()).unwrap();
        let base = commit(&repo, None, "Initial commit");
        repo.reference("refs/heads/main", base, true, "init").unwrap();
        let first = commit(&repo, Some(base), "Add parser");
        let second = commit(&repo, Some(first), "Add tests");

        let source = GitRepository::open(temp_dir.path()).unwrap();
        let update = RefUpdate::new(oid(base), oid(second), "refs/heads/main");
        let commits = source.new_commits(&update).unwrap();
        assert_eq!(commits, vec![oid(first), oid(second)]);
        assert_eq!(source.message(&oid(first)).unwrap(), "Add parser");
    }

    #[test]
    fn test_existing_refs_are_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init_bare(temp_dir.path()).unwrap();
        let base = commit(&repo, None, "Initial commit");
        repo.reference("refs/heads/main", base, true, "init").unwrap();
        let shared = commit(&repo, Some(base), "Add parser");
        repo.reference("refs/heads/other", shared, true, "other").unwrap();
        let tip = commit(&repo, Some(shared), "Add tests");

        let update = RefUpdate::new(Oid::zero(40), oid(tip), "refs/heads/feature");

        let source = GitRepository::open(temp_dir.path()).unwrap();
        assert_eq!(source.new_commits(&update).unwrap(), vec![oid(tip)]);

        let source = GitRepository::open(temp_dir.path())
            .unwrap()
            .with_exclude_existing_refs(false);
        assert_eq!(
            source.new_commits(&update).unwrap(),
            vec![oid(base), oid(shared), oid(tip)]
        );
    }

    #[test]
    fn test_unknown_commit_is_git_error() {
        let temp_dir = TempDir::new().unwrap();
        Repository::init_bare(temp_dir.path()).unwrap();
        let source = GitRepository::open(temp_dir.path()).unwrap();

        let missing = Oid::parse(&"a".repeat(40)).unwrap();
        let update = RefUpdate::new(Oid::zero(40), missing.clone(), "refs/heads/main");
        assert!(matches!(source.new_commits(&update), Err(Error::Git(_))));
        assert!(matches!(source.message(&missing), Err(Error::Git(_))));
    }

    #[test]
    fn test_open_non_repository_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            GitRepository::open(temp_dir.path()),
            Err(Error::Git(_))
        ));
    }
}
