//! Fixture repositories for tests

use std::path::Path;

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// A scratch repository that commits with controlled timestamps
pub(crate) struct Fixture {
    pub temp: TempDir,
    pub repo: Repository,
    clock: i64,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        Self {
            temp,
            repo,
            clock: 1_700_000_000,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    fn signature(&mut self, name: &str) -> Signature<'static> {
        self.clock += 60;
        Signature::new(name, "dev@example.com", &Time::new(self.clock, 0)).unwrap()
    }

    /// Commit a file change with the given message and author
    pub fn commit_as(&mut self, author: &str, message: &str) -> Oid {
        let sig = self.signature(author);
        let file = format!("file-{}.txt", self.clock);
        std::fs::write(self.temp.path().join(&file), message).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(&file)).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    pub fn commit(&mut self, message: &str) -> Oid {
        self.commit_as("Test", message)
    }

    pub fn lightweight_tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub fn annotated_tag(&mut self, name: &str, target: Oid) {
        let sig = self.signature("Tagger");
        let object = self.repo.find_object(target, None).unwrap();
        self.repo
            .tag(name, &object, &sig, &format!("Release {}", name), false)
            .unwrap();
    }
}
