//! YAML frontmatter splitting for tutorial markdown.

use serde::de::DeserializeOwned;

use crate::error::ContentError;

const DELIMITER: &str = "---";

/// Split `---`-delimited YAML frontmatter from a markdown body and parse it.
///
/// `path` is only used for error context.
pub(crate) fn parse<T: DeserializeOwned>(path: &str, source: &str) -> Result<(T, String), ContentError> {
    let (yaml, body) = split(source).ok_or_else(|| ContentError::MissingFrontmatter(path.to_owned()))?;
    let meta = serde_yaml::from_str(yaml).map_err(|e| ContentError::yaml(path, e))?;
    Ok((meta, body.to_owned()))
}

fn split(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix(DELIMITER)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body.trim_start_matches(['\r', '\n'])));
        }
        offset += line.len();
    }
    None
}
