//! Compilation and matching of route templates such as `/hello/<user>`.

use std::collections::{HashMap, HashSet};

use crate::router::error::Error;

/// Parameters extracted from a matched path, keyed by placeholder name.
pub type PathParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled route template.
///
/// Every `<name>` placeholder captures one or more characters within a single path segment (it
/// never spans a `/`); everything else must match literally and case-sensitively. A match has to
/// consume the whole path, and trailing slashes are not normalized: `/a/` does not match the
/// template `/a` and vice versa.
///
/// When a placeholder could end at several positions it takes the longest capture that still lets
/// the rest of the template match, so `/v<major>.<minor>` matches `/v1.2.3` with `major = "1.2"`
/// and `minor = "3"`.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    template: String,
    segments: Vec<Segment>,
}

impl PathMatcher {
    /// Compile a template.
    ///
    /// Fails with [`Error::InvalidRouteTemplate`] when a placeholder is unclosed, empty, not an
    /// identifier, repeated, or directly follows another placeholder with no literal text between
    /// them.
    pub fn compile(template: &str) -> Result<Self, Error> {
        let invalid = |reason: String| Error::InvalidRouteTemplate {
            template: template.to_string(),
            reason,
        };

        let mut segments: Vec<Segment> = Vec::new();
        let mut rest = template;

        while !rest.is_empty() {
            let Some(open) = rest.find('<') else {
                segments.push(Segment::Literal(rest.to_string()));
                break;
            };

            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }

            let after_open = &rest[open + 1..];
            let close = after_open
                .find('>')
                .ok_or_else(|| invalid(format!("unclosed placeholder at byte {}", template.len() - rest.len() + open)))?;
            let name = &after_open[..close];

            if !is_identifier(name) {
                return Err(invalid(format!("placeholder name {name:?} is not an identifier")));
            }

            let mut previous_names = segments.iter().filter_map(|segment| match segment {
                Segment::Param(existing) => Some(existing),
                Segment::Literal(_) => None,
            });
            if previous_names.any(|existing| existing == name) {
                return Err(invalid(format!("placeholder <{name}> appears more than once")));
            }

            if let Some(Segment::Param(previous)) = segments.last() {
                return Err(invalid(format!(
                    "placeholders <{previous}> and <{name}> need a literal separator"
                )));
            }

            segments.push(Segment::Param(name.to_string()));
            rest = &after_open[close + 1..];
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    /// The template this matcher was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Placeholder names in template order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a concrete path, returning the captured parameters on success.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let mut params = PathParams::new();
        let mut failed = FailedStates::new();
        if match_segments(&self.segments, path, &mut params, &mut failed) {
            Some(params)
        } else {
            None
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

// Failed states, keyed by (segments left, bytes left). Whether a suffix of the template matches a
// suffix of the path does not depend on earlier captures, so each state is tried at most once.
type FailedStates = HashSet<(usize, usize)>;

fn match_segments(segments: &[Segment], path: &str, params: &mut PathParams, failed: &mut FailedStates) -> bool {
    let state = (segments.len(), path.len());
    if failed.contains(&state) {
        return false;
    }

    let matched = match segments.split_first() {
        None => path.is_empty(),
        Some((Segment::Literal(literal), rest)) => match path.strip_prefix(literal.as_str()) {
            Some(remaining) => match_segments(rest, remaining, params, failed),
            None => false,
        },
        Some((Segment::Param(name), rest)) => {
            let segment = path.find('/').map_or(path, |slash| &path[..slash]);

            // Longest capture first
            let found = segment
                .char_indices()
                .rev()
                .map(|(i, c)| i + c.len_utf8())
                .find(|&end| match_segments(rest, &path[end..], params, failed));

            match found {
                Some(end) => {
                    params.insert(name.clone(), path[..end].to_string());
                    true
                }
                None => false,
            }
        }
    };

    if !matched {
        failed.insert(state);
    }
    matched
}
