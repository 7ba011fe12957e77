/// Pattern parsing and matching for route segments
///
/// A pattern is a `/`-separated template. Each segment is either literal text
/// or a parameter introduced by `:`:
///
/// | Segment          | Meaning                                      |
/// |------------------|----------------------------------------------|
/// | `users`          | literal, compared exactly                    |
/// | `:id`            | required, binds one non-empty segment        |
/// | `:id?`           | optional, binds one segment when present     |
/// | `:id(\d+)`       | required, segment must fully match the regex |
/// | `:rest+`         | catch-all, binds one or more segments        |
/// | `:rest*`         | catch-all, binds zero or more segments       |
/// | `:pathMatch(.*)*`| catch-all with a per-segment constraint      |

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

use crate::error::PatternError;
use crate::path;

/// Regex constraint attached to a parameter
///
/// The expression is anchored on both ends, so `\d+` rejects `42abc`.
#[derive(Clone)]
pub struct ParameterConstraint {
    source: String,
    regex: Regex,
}

impl ParameterConstraint {
    pub fn new(param: &str, source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|e| {
            PatternError::InvalidConstraint {
                name: param.to_string(),
                constraint: source.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn validate(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl fmt::Debug for ParameterConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParameterConstraint").field(&self.source).finish()
    }
}

impl PartialEq for ParameterConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Represents different types of route pattern segments
///
/// # Examples
///
/// ```
/// use folio_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// let seg = classify_segment("/users", "users").unwrap();
/// assert!(matches!(seg, PatternSegmentType::Static(_)));
///
/// let seg = classify_segment("/project/:id", ":id").unwrap();
/// assert!(matches!(seg, PatternSegmentType::Required(_, None)));
///
/// let seg = classify_segment("/:pathMatch(.*)*", ":pathMatch(.*)*").unwrap();
/// assert!(matches!(seg, PatternSegmentType::OptionalCatchAll(_, Some(_))));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSegmentType {
    /// Catch-all segment: `:rest+`
    CatchAll(String, Option<ParameterConstraint>),
    /// Optional catch-all segment: `:rest*`
    OptionalCatchAll(String, Option<ParameterConstraint>),
    /// Optional parameter: `:id?`
    Optional(String, Option<ParameterConstraint>),
    /// Required parameter: `:id`
    Required(String, Option<ParameterConstraint>),
    /// Static text segment
    Static(String),
}

impl PatternSegmentType {
    /// Parameter name bound by this segment, if any
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegmentType::CatchAll(name, _)
            | PatternSegmentType::OptionalCatchAll(name, _)
            | PatternSegmentType::Optional(name, _)
            | PatternSegmentType::Required(name, _) => Some(name),
            PatternSegmentType::Static(_) => None,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(
            self,
            PatternSegmentType::CatchAll(..) | PatternSegmentType::OptionalCatchAll(..)
        )
    }
}

/// Classifies one segment of `pattern` into a pattern type
///
/// `pattern` is only used for error messages.
pub fn classify_segment(pattern: &str, segment: &str) -> Result<PatternSegmentType, PatternError> {
    let Some(param) = segment.strip_prefix(':') else {
        return Ok(PatternSegmentType::Static(segment.to_string()));
    };

    let name_len = param
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(param.len());
    let (name, mut rest) = param.split_at(name_len);

    if name.is_empty() {
        return Err(PatternError::EmptyParamName {
            pattern: pattern.to_string(),
        });
    }

    let constraint = match rest.strip_prefix('(') {
        Some(inner) => {
            let close = closing_paren(inner).ok_or_else(|| PatternError::InvalidConstraint {
                name: name.to_string(),
                constraint: inner.to_string(),
                reason: "unbalanced parentheses".to_string(),
            })?;
            rest = &inner[close + 1..];
            Some(ParameterConstraint::new(name, &inner[..close])?)
        }
        None => None,
    };

    let name = name.to_string();
    match rest {
        "" => Ok(PatternSegmentType::Required(name, constraint)),
        "?" => Ok(PatternSegmentType::Optional(name, constraint)),
        "+" => Ok(PatternSegmentType::CatchAll(name, constraint)),
        "*" => Ok(PatternSegmentType::OptionalCatchAll(name, constraint)),
        text => Err(PatternError::TrailingText {
            pattern: pattern.to_string(),
            name,
            text: text.to_string(),
        }),
    }
}

/// Index of the `)` closing a group whose `(` was already consumed
fn closing_paren(inner: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut escaped = false;

    for (idx, c) in inner.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '(' => depth += 1,
            ')' if depth == 0 => return Some(idx),
            ')' => depth -= 1,
            _ => {}
        }
    }

    None
}

/// A parsed route pattern
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    source: String,
    segments: Vec<PatternSegmentType>,
    params: Vec<String>,
}

impl Pattern {
    /// Parses a pattern such as `/user/:username`
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_router::route::pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("/user/:username").unwrap();
    /// assert_eq!(pattern.params(), ["username"]);
    /// assert!(Pattern::parse("/a/:x/:x").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        if !source.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(source.to_string()));
        }

        let segments = path::segments(source)
            .map(|segment| classify_segment(source, segment))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(pos) = segments.iter().position(PatternSegmentType::is_catch_all) {
            if pos + 1 != segments.len() {
                return Err(PatternError::CatchAllNotLast {
                    pattern: source.to_string(),
                });
            }
        }

        let mut params: Vec<String> = Vec::new();
        for name in segments.iter().filter_map(PatternSegmentType::param_name) {
            if params.iter().any(|p| p == name) {
                return Err(PatternError::DuplicateParam {
                    pattern: source.to_string(),
                    name: name.to_string(),
                });
            }
            params.push(name.to_string());
        }

        Ok(Self {
            source: source.to_string(),
            segments,
            params,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[PatternSegmentType] {
        &self.segments
    }

    /// Parameter names in declaration order
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// True when the pattern matches every path, e.g. `/:pathMatch(.*)*`
    pub fn is_catch_all(&self) -> bool {
        matches!(
            self.segments.as_slice(),
            [PatternSegmentType::OptionalCatchAll(_, None)]
        ) || matches!(
            self.segments.as_slice(),
            [PatternSegmentType::OptionalCatchAll(_, Some(c))] if c.as_str() == ".*"
        )
    }

    /// Structural key with parameter names erased
    ///
    /// `/user/:id` and `/user/:username` share the key `/user/:`, so two
    /// entries with the same key can never both be reached. Static text is
    /// folded to lowercase only for case-insensitive tables.
    pub fn shape(&self, case_insensitive: bool) -> String {
        let key = self
            .segments
            .iter()
            .map(|segment| match segment {
                PatternSegmentType::Static(text) if case_insensitive => text.to_ascii_lowercase(),
                PatternSegmentType::Static(text) => text.clone(),
                PatternSegmentType::Required(_, c) => format!(":{}", constraint_key(c)),
                PatternSegmentType::Optional(_, c) => format!(":{}?", constraint_key(c)),
                PatternSegmentType::CatchAll(_, c) => format!(":{}+", constraint_key(c)),
                PatternSegmentType::OptionalCatchAll(_, c) => format!(":{}*", constraint_key(c)),
            })
            .collect::<Vec<_>>()
            .join("/");
        format!("/{}", key)
    }

    /// Matches already-decoded path segments against this pattern
    pub fn matches(
        &self,
        path_segments: &[&str],
        case_insensitive: bool,
    ) -> Option<HashMap<String, String>> {
        match_segments(&self.segments, path_segments, case_insensitive, HashMap::new())
    }

    /// Builds a concrete path by substituting `params` into the pattern
    ///
    /// Values are percent-encoded. Returns the name of the first required
    /// parameter missing from `params`.
    pub fn fill(&self, params: &HashMap<String, String>) -> Result<String, String> {
        let mut out: Vec<String> = Vec::with_capacity(self.segments.len());

        for segment in &self.segments {
            match segment {
                PatternSegmentType::Static(text) => out.push(text.clone()),
                PatternSegmentType::Required(name, _) => match params.get(name) {
                    Some(value) if !value.is_empty() => {
                        out.push(urlencoding::encode(value).into_owned())
                    }
                    _ => return Err(name.clone()),
                },
                PatternSegmentType::Optional(name, _) => {
                    if let Some(value) = params.get(name).filter(|v| !v.is_empty()) {
                        out.push(urlencoding::encode(value).into_owned());
                    }
                }
                PatternSegmentType::CatchAll(name, _)
                | PatternSegmentType::OptionalCatchAll(name, _) => {
                    let value = params.get(name).map(String::as_str).unwrap_or("");
                    if value.is_empty() && matches!(segment, PatternSegmentType::CatchAll(..)) {
                        return Err(name.clone());
                    }
                    out.extend(
                        path::segments(value).map(|part| urlencoding::encode(part).into_owned()),
                    );
                }
            }
        }

        Ok(format!("/{}", out.join("/")))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn constraint_key(constraint: &Option<ParameterConstraint>) -> String {
    constraint
        .as_ref()
        .map(|c| format!("({})", c.as_str()))
        .unwrap_or_default()
}

fn satisfies(constraint: &Option<ParameterConstraint>, value: &str) -> bool {
    constraint.as_ref().map_or(true, |c| c.validate(value))
}

/// Walks pattern and path segments together, backtracking over optionals
fn match_segments(
    pattern: &[PatternSegmentType],
    path: &[&str],
    case_insensitive: bool,
    mut params: HashMap<String, String>,
) -> Option<HashMap<String, String>> {
    let Some((head, rest)) = pattern.split_first() else {
        return path.is_empty().then_some(params);
    };

    match head {
        PatternSegmentType::Static(text) => {
            let (segment, tail) = path.split_first()?;
            let equal = if case_insensitive {
                text.eq_ignore_ascii_case(segment)
            } else {
                text == segment
            };
            if !equal {
                return None;
            }
            match_segments(rest, tail, case_insensitive, params)
        }
        PatternSegmentType::Required(name, constraint) => {
            let (segment, tail) = path.split_first()?;
            if !satisfies(constraint, segment) {
                return None;
            }
            params.insert(name.clone(), segment.to_string());
            match_segments(rest, tail, case_insensitive, params)
        }
        PatternSegmentType::Optional(name, constraint) => {
            if let Some((segment, tail)) = path.split_first() {
                if satisfies(constraint, segment) {
                    let mut bound = params.clone();
                    bound.insert(name.clone(), segment.to_string());
                    if let Some(found) = match_segments(rest, tail, case_insensitive, bound) {
                        return Some(found);
                    }
                }
            }
            match_segments(rest, path, case_insensitive, params)
        }
        PatternSegmentType::CatchAll(name, constraint)
        | PatternSegmentType::OptionalCatchAll(name, constraint) => {
            if path.is_empty() && matches!(head, PatternSegmentType::CatchAll(..)) {
                return None;
            }
            if !path.iter().all(|segment| satisfies(constraint, segment)) {
                return None;
            }
            params.insert(name.clone(), path.join("/"));
            Some(params)
        }
    }
}
