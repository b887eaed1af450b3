//! In-memory stand-ins for the filesystem and the toolchain runner.
#![allow(dead_code)]

use projgen::filesystem::Filesystem;
use projgen::toolchain::{CommandRunner, ToolCommand, ToolOutput};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Working directory used by in-memory generation tests.
pub const CWD: &str = "/work";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Dir,
    File(String),
}

#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    entries: RefCell<BTreeMap<PathBuf, Entry>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filesystem preloaded with the templates shipped in this package.
    pub fn with_templates() -> Self {
        let fs = Self::new();
        load_dir(&fs, &templates_root());
        fs
    }

    pub fn insert_file<P: AsRef<Path>>(&self, path: P, content: &str) {
        self.entries
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), Entry::File(content.to_string()));
    }

    pub fn insert_dir<P: AsRef<Path>>(&self, path: P) {
        self.entries.borrow_mut().insert(path.as_ref().to_path_buf(), Entry::Dir);
    }

    pub fn remove<P: AsRef<Path>>(&self, path: P) {
        self.entries.borrow_mut().remove(path.as_ref());
    }

    pub fn file<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        match self.entries.borrow().get(path.as_ref()) {
            Some(Entry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    pub fn is_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        matches!(self.entries.borrow().get(path.as_ref()), Some(Entry::Dir))
    }

    pub fn snapshot(&self) -> BTreeMap<PathBuf, Entry> {
        self.entries.borrow().clone()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.entries.borrow().contains_key(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        if self.exists(path) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        self.insert_dir(path);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.file(path).ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.insert_file(path, content);
        Ok(())
    }

    fn copy(&self, source: &Path, dest: &Path) -> io::Result<()> {
        let content = self.read_to_string(source)?;
        self.write(dest, &content)
    }
}

type Respond<'a> = Box<dyn Fn(&ToolCommand) -> io::Result<ToolOutput> + 'a>;

/// Runner answering every command with a scripted response and recording the calls.
pub struct ScriptedRunner<'a> {
    respond: Respond<'a>,
    calls: RefCell<Vec<ToolCommand>>,
}

impl<'a> ScriptedRunner<'a> {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&ToolCommand) -> io::Result<ToolOutput> + 'a,
    {
        Self { respond: Box::new(respond), calls: RefCell::new(Vec::new()) }
    }

    /// Every command exits zero.
    pub fn succeeding() -> Self {
        Self::new(|_| Ok(exit(0, "")))
    }

    /// Every command exits with `code` and prints `stderr`.
    pub fn failing(code: i32, stderr: &'a str) -> Self {
        Self::new(move |_| Ok(ToolOutput { code: Some(code), stdout: String::new(), stderr: stderr.to_string() }))
    }

    pub fn calls(&self) -> Vec<ToolCommand> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner<'_> {
    fn run(&self, command: &ToolCommand) -> io::Result<ToolOutput> {
        self.calls.borrow_mut().push(command.clone());
        (self.respond)(command)
    }
}

pub fn exit(code: i32, stdout: &str) -> ToolOutput {
    ToolOutput { code: Some(code), stdout: stdout.to_string(), stderr: String::new() }
}

pub fn templates_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Reads a template asset from the package's template tree.
pub fn template(relative: &str) -> String {
    std::fs::read_to_string(templates_root().join(relative)).unwrap()
}

fn load_dir(fs: &MemoryFilesystem, dir: &Path) {
    fs.insert_dir(dir);
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            load_dir(fs, &path);
        } else {
            fs.insert_file(&path, &std::fs::read_to_string(&path).unwrap());
        }
    }
}
