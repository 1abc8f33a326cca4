use crate::types::snapshot::{TreeEntry, Workflow};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const WORKFLOW_DIR: &str = ".github/workflows";

const LANGUAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("c", "C"),
    ("cc", "C++"),
    ("cpp", "C++"),
    ("cs", "C#"),
    ("css", "CSS"),
    ("dart", "Dart"),
    ("go", "Go"),
    ("h", "C"),
    ("hpp", "C++"),
    ("html", "HTML"),
    ("java", "Java"),
    ("js", "JavaScript"),
    ("jsx", "JavaScript"),
    ("kt", "Kotlin"),
    ("lua", "Lua"),
    ("mjs", "JavaScript"),
    ("php", "PHP"),
    ("py", "Python"),
    ("rb", "Ruby"),
    ("rs", "Rust"),
    ("scala", "Scala"),
    ("scss", "SCSS"),
    ("sh", "Shell"),
    ("sql", "SQL"),
    ("swift", "Swift"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("vue", "Vue"),
];

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name() == ".git"
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Every file and directory below `root` except `.git`, sorted by path.
pub fn walk_tree(root: &Path) -> Vec<TreeEntry> {
    let mut entries: Vec<TreeEntry> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_git_dir(entry))
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = relative_path(root, entry.path())?;
            if entry.file_type().is_dir() {
                Some(TreeEntry::directory(path))
            } else {
                Some(TreeEntry::file(path))
            }
        })
        .collect();
    entries.sort_by(|left, right| left.path.cmp(&right.path));
    entries
}

pub fn language_for(path: &str) -> Option<&'static str> {
    let extension = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    LANGUAGE_EXTENSIONS
        .iter()
        .find(|(known, _)| *known == extension)
        .map(|(_, language)| *language)
}

/// Bytes per language, keyed by display name.
pub fn language_bytes(root: &Path, entries: &[TreeEntry]) -> BTreeMap<String, u64> {
    let mut languages = BTreeMap::new();
    for entry in entries.iter().filter(|entry| entry.is_file()) {
        let Some(language) = language_for(&entry.path) else {
            continue;
        };
        let size = fs::metadata(root.join(&entry.path))
            .map(|metadata| metadata.len())
            .unwrap_or(0);
        *languages.entry(language.to_string()).or_insert(0) += size;
    }
    languages
}

/// Text of the first root file whose name starts with `readme`.
pub fn read_readme(root: &Path) -> Option<String> {
    let mut names: Vec<String> = fs::read_dir(root)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|kind| kind.is_file()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.to_lowercase().starts_with("readme"))
        .collect();
    names.sort();
    let bytes = fs::read(root.join(names.first()?)).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

fn workflow_name(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("name:"))
        .map(|value| value.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|name| !name.is_empty())
}

pub fn read_workflows(root: &Path) -> Vec<Workflow> {
    let Ok(dir) = fs::read_dir(root.join(WORKFLOW_DIR)) else {
        return Vec::new();
    };
    let mut files: Vec<String> = dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".yml") || name.ends_with(".yaml"))
        .collect();
    files.sort();

    files
        .into_iter()
        .map(|file| {
            let path = format!("{WORKFLOW_DIR}/{file}");
            let content = fs::read_to_string(root.join(&path)).unwrap_or_default();
            let name = workflow_name(&content).unwrap_or_else(|| {
                Path::new(&file)
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.clone())
            });
            Workflow { name, path }
        })
        .collect()
}
