// Path helpers shared by the working-directory resolver, the directory provisioner
// and the recipe writer.

use std::path::{Component, Path, PathBuf};

/// Resolves paths that start with a tilde `~` to the user's home directory.
/// Any other path is returned unchanged, as is `~` when no home directory can be found.
///
/// # Arguments
/// * `path`: A string slice representing the path, which might start with `~`.
pub fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

/// Joins `relative` onto `base` and drops `.` segments, so `/srv/app` + `./tools` becomes
/// `/srv/app/tools`. An absolute `relative` replaces `base`, like [`Path::join`].
///
/// `..` segments are kept verbatim: the path may live inside a container, where the host
/// filesystem cannot be consulted to resolve them.
pub fn join_clean(base: &Path, relative: &str) -> PathBuf {
    base.join(relative)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// How a recipe refers to the tools root: relative roots always start with `./` or `../`
/// and never end with a separator, absolute roots are kept as they are.
///
/// `~` is expanded first, the same way provisioning expands it, so the recipe points at
/// the directory the tools were actually installed into.
///
/// # Examples
/// * `tools` → `./tools`
/// * `./tools/` → `./tools`
/// * `/opt/qa` → `/opt/qa`
/// * `~/qa` → `/home/dev/qa`
pub fn recipe_path(tools_dir: &str) -> String {
    // Expand before deciding relative vs. absolute: `~/qa` is not a relative path.
    let expanded = expand_tilde(tools_dir.trim());
    let trimmed = expanded.as_str();
    let without_trailing = match trimmed.trim_end_matches('/') {
        "" if trimmed.starts_with('/') => "/",
        "" => ".",
        other => other,
    };

    if Path::new(without_trailing).is_absolute()
        || without_trailing == "."
        || without_trailing == ".."
        || without_trailing.starts_with("./")
        || without_trailing.starts_with("../")
    {
        without_trailing.to_string()
    } else {
        format!("./{without_trailing}")
    }
}

/// Renders a path for command lines; container paths are plain strings anyway.
pub fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_clean_drops_current_dir_segments() {
        assert_eq!(
            join_clean(Path::new("/srv/app"), "./tools"),
            PathBuf::from("/srv/app/tools")
        );
        assert_eq!(
            join_clean(Path::new("/srv/app/."), "./tools/./phpcs"),
            PathBuf::from("/srv/app/tools/phpcs")
        );
    }

    #[test]
    fn join_clean_with_absolute_relative_replaces_base() {
        assert_eq!(
            join_clean(Path::new("/srv/app"), "/opt/qa"),
            PathBuf::from("/opt/qa")
        );
    }

    #[test]
    fn recipe_path_normalizes_relative_roots() {
        assert_eq!(recipe_path("./tools"), "./tools");
        assert_eq!(recipe_path("tools"), "./tools");
        assert_eq!(recipe_path("tools/"), "./tools");
        assert_eq!(recipe_path("../shared/tools"), "../shared/tools");
        assert_eq!(recipe_path("."), ".");
    }

    #[test]
    fn recipe_path_keeps_absolute_roots() {
        assert_eq!(recipe_path("/opt/qa/"), "/opt/qa");
        assert_eq!(recipe_path("/"), "/");
    }

    #[test]
    fn recipe_path_expands_the_home_directory() {
        let home = dirs::home_dir().unwrap();
        let expected = home.join("qa").to_string_lossy().into_owned();

        assert_eq!(recipe_path("~/qa"), expected);
        assert_eq!(recipe_path("~/qa/"), expected);
        assert!(!recipe_path("~/qa").contains('~'));
    }

    #[test]
    fn expand_tilde_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("./tools"), "./tools");
        assert_eq!(expand_tilde("~user/tools"), "~user/tools");
    }
}
