/// Trims the path and converts Windows separators to `/`.
pub fn normalize_file_path(path: &str) -> String {
    path.trim().replace('\\', "/")
}

pub fn normalize_dir_path(path: &str, add_trailing_slash: bool) -> String {
    let mut path = normalize_file_path(path);
    if add_trailing_slash && !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// Guesses the project root a result file was produced in.
///
/// A tracked path needs no base. Otherwise the base is whatever precedes the
/// longest tracked file the path ends with.
pub fn get_base_path(path: &str, tracked_files: &[String]) -> Option<String> {
    if tracked_files.iter().any(|file| file == path) {
        return Some(String::new());
    }
    let longest = tracked_files
        .iter()
        .filter(|file| !file.is_empty() && path.ends_with(file.as_str()))
        .max_by_key(|file| file.len())?;
    Some(path[..path.len() - longest.len()].to_owned())
}

/// Maps raw paths found in result documents onto project-relative ones.
///
/// The inferred work directory is per instance: once a base has been found
/// it is reused for every later path, even where another base would fit
/// better.
#[derive(Debug, Default)]
pub struct PathResolver {
    work_dir: Option<String>,
    assumed_work_dir: Option<String>,
}

impl PathResolver {
    pub fn new(work_dir: Option<String>) -> Self {
        Self {
            work_dir,
            assumed_work_dir: None,
        }
    }

    pub fn relative(&mut self, path: &str, tracked_files: &[String]) -> String {
        let path = normalize_file_path(path);
        match self.work_dir(&path, tracked_files) {
            Some(work_dir) if path.starts_with(work_dir) => path[work_dir.len()..].to_owned(),
            _ => path,
        }
    }

    fn work_dir(&mut self, path: &str, tracked_files: &[String]) -> Option<&str> {
        if self.work_dir.is_some() {
            return self.work_dir.as_deref();
        }
        if self.assumed_work_dir.is_none() {
            self.assumed_work_dir = get_base_path(path, tracked_files);
            if let Some(base) = &self.assumed_work_dir {
                debug!("Assuming work directory '{}' from '{}'", base, path);
            }
        }
        self.assumed_work_dir.as_deref()
    }
}
