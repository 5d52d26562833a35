// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Render and match resource name templates.
//!
//! Resource names in Google APIs follow templates such as
//! `projects/{project}/instances/{instance}/tables/{table}`. A variable
//! matches a single path segment by default. A variable may also declare a
//! pattern, for example `{metric_descriptor=**}` matches one or more
//! segments, and `{name=projects/*/locations/*}` matches four segments with
//! two fixed literals. Wildcards outside any variable are bound to positional
//! names, `$0`, `$1`, etc.
//!
//! # Example
//! ```
//! # use gapic_gax::path_template::*;
//! let template = PathTemplate::new("projects/{project}/metricDescriptors/{metric_descriptor=**}")?;
//! let name = template.render(&[
//!     ("project", "my-project"),
//!     ("metric_descriptor", "custom.googleapis.com/my/metric"),
//! ])?;
//! assert_eq!(name, "projects/my-project/metricDescriptors/custom.googleapis.com/my/metric");
//!
//! let bindings = template.match_path(&name)?;
//! assert_eq!(bindings.get("metric_descriptor").map(String::as_str), Some("custom.googleapis.com/my/metric"));
//! # Ok::<(), Error>(())
//! ```

use std::collections::BTreeMap;

/// Errors parsing, rendering or matching path templates.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid path template {template}: {reason}")]
    InvalidTemplate { template: String, reason: String },
    #[error("missing value for variable {0}")]
    MissingBinding(String),
    #[error("the value {value} for variable {name} does not match its pattern")]
    InvalidBinding { name: String, value: String },
    #[error("the path {path} does not match the template {template}")]
    NoMatch { path: String, template: String },
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Literal(String),
    Single,
    Multi,
}

#[derive(Clone, Debug, PartialEq)]
struct Segment {
    token: Token,
    // Index into `PathTemplate::variables`.
    variable: Option<usize>,
}

/// A parsed path template.
#[derive(Clone, Debug, PartialEq)]
pub struct PathTemplate {
    template: String,
    segments: Vec<Segment>,
    variables: Vec<String>,
}

impl PathTemplate {
    /// Parses `template`.
    pub fn new(template: &str) -> Result<Self> {
        Parser::new(template).parse()
    }

    /// The template in its original form.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The names of the variables, in the order they appear.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(String::as_str)
    }

    /// Renders the template with the given variable values.
    ///
    /// Every variable must have a value, and each value must match the
    /// variable pattern. For example, the value of `{project}` must be a
    /// single non-empty segment.
    pub fn render(&self, bindings: &[(&str, &str)]) -> Result<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        let mut current = None;
        for segment in &self.segments {
            match segment.variable {
                None => {
                    current = None;
                    if let Token::Literal(l) = &segment.token {
                        parts.push(l.clone());
                    }
                }
                Some(v) if current == Some(v) => {}
                Some(v) => {
                    current = Some(v);
                    let name = &self.variables[v];
                    let value = bindings
                        .iter()
                        .find(|(n, _)| n == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| Error::MissingBinding(name.clone()))?;
                    let pattern = self
                        .segments
                        .iter()
                        .filter(|s| s.variable == Some(v))
                        .cloned()
                        .collect::<Vec<_>>();
                    let segs = value.split('/').collect::<Vec<_>>();
                    if matches(&pattern, &segs).is_none() {
                        return Err(Error::InvalidBinding {
                            name: name.clone(),
                            value: value.to_string(),
                        });
                    }
                    parts.push(value.to_string());
                }
            }
        }
        Ok(parts.join("/"))
    }

    /// Matches `path` against the template, returning the variable values.
    pub fn match_path(&self, path: &str) -> Result<BTreeMap<String, String>> {
        let segs = path.split('/').collect::<Vec<_>>();
        let ranges = matches(&self.segments, &segs).ok_or_else(|| Error::NoMatch {
            path: path.to_string(),
            template: self.template.clone(),
        })?;
        let mut spans: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
        for (segment, (start, end)) in self.segments.iter().zip(ranges) {
            if let Some(v) = segment.variable {
                spans
                    .entry(v)
                    .and_modify(|span| span.1 = end)
                    .or_insert((start, end));
            }
        }
        Ok(spans
            .into_iter()
            .map(|(v, (start, end))| (self.variables[v].clone(), segs[start..end].join("/")))
            .collect())
    }
}

impl std::str::FromStr for PathTemplate {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}

// Returns the `[start, end)` range of path segments consumed by each template
// segment, or `None` if the path does not match.
fn matches(pattern: &[Segment], segs: &[&str]) -> Option<Vec<(usize, usize)>> {
    let mut out = Vec::with_capacity(pattern.len());
    if match_at(pattern, segs, 0, &mut out) {
        Some(out)
    } else {
        None
    }
}

fn match_at(pattern: &[Segment], segs: &[&str], pos: usize, out: &mut Vec<(usize, usize)>) -> bool {
    let Some((first, rest)) = pattern.split_first() else {
        return pos == segs.len();
    };
    let candidates = match &first.token {
        Token::Literal(l) if segs.get(pos) == Some(&l.as_str()) => pos + 1..pos + 2,
        Token::Single if segs.get(pos).is_some_and(|s| !s.is_empty()) => pos + 1..pos + 2,
        Token::Multi => pos + 1..segs.len() + 1,
        _ => return false,
    };
    // `**` is greedy, it prefers the longest match.
    for end in candidates.rev() {
        if segs[pos..end].iter().any(|s| s.is_empty()) {
            continue;
        }
        out.push((pos, end));
        if match_at(rest, segs, end, out) {
            return true;
        }
        out.pop();
    }
    false
}

struct Parser<'a> {
    template: &'a str,
    segments: Vec<Segment>,
    variables: Vec<String>,
    positional: usize,
}

impl<'a> Parser<'a> {
    fn new(template: &'a str) -> Self {
        Self {
            template,
            segments: Vec::new(),
            variables: Vec::new(),
            positional: 0,
        }
    }

    fn error<T>(&self, reason: &str) -> Result<T> {
        Err(Error::InvalidTemplate {
            template: self.template.to_string(),
            reason: reason.to_string(),
        })
    }

    fn parse(mut self) -> Result<PathTemplate> {
        let mut rest = self.template;
        if rest.is_empty() {
            return self.error("empty template");
        }
        loop {
            if let Some(body) = rest.strip_prefix('{') {
                let Some(close) = body.find('}') else {
                    return self.error("unbalanced braces");
                };
                self.variable(&body[..close])?;
                rest = &body[close + 1..];
            } else {
                let end = rest.find('/').unwrap_or(rest.len());
                let segment = &rest[..end];
                if segment.contains(['{', '}']) {
                    return self.error("variables must span complete segments");
                }
                self.plain(segment)?;
                rest = &rest[end..];
            }
            match rest.strip_prefix('/') {
                Some(r) => rest = r,
                None if rest.is_empty() => break,
                None => return self.error("variables must span complete segments"),
            }
        }
        if self
            .segments
            .iter()
            .filter(|s| s.token == Token::Multi)
            .count()
            > 1
        {
            return self.error("at most one `**` wildcard is allowed");
        }
        Ok(PathTemplate {
            template: self.template.to_string(),
            segments: self.segments,
            variables: self.variables,
        })
    }

    fn plain(&mut self, segment: &str) -> Result<()> {
        let token = self.token(segment)?;
        let variable = match token {
            Token::Literal(_) => None,
            Token::Single | Token::Multi => {
                let name = format!("${}", self.positional);
                self.positional += 1;
                Some(self.push_variable(name)?)
            }
        };
        self.segments.push(Segment { token, variable });
        Ok(())
    }

    fn variable(&mut self, body: &str) -> Result<()> {
        let (name, pattern) = body.split_once('=').unwrap_or((body, "*"));
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return self.error("invalid variable name");
        }
        let index = self.push_variable(name.to_string())?;
        for segment in pattern.split('/') {
            let token = self.token(segment)?;
            self.segments.push(Segment {
                token,
                variable: Some(index),
            });
        }
        Ok(())
    }

    fn token(&self, segment: &str) -> Result<Token> {
        match segment {
            "" => self.error("empty segment"),
            "*" => Ok(Token::Single),
            "**" => Ok(Token::Multi),
            s if s.contains('*') => self.error("wildcards must span complete segments"),
            s => Ok(Token::Literal(s.to_string())),
        }
    }

    fn push_variable(&mut self, name: String) -> Result<usize> {
        if self.variables.contains(&name) {
            return self.error("duplicate variable name");
        }
        self.variables.push(name);
        Ok(self.variables.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("projects/{project}", &[("project", "p")], "projects/p")]
    #[test_case("projects/{project}/instances/{instance}/tables/{table}", &[("project", "p"), ("instance", "i"), ("table", "t")], "projects/p/instances/i/tables/t")]
    #[test_case("projects/{project}/agent", &[("project", "p")], "projects/p/agent")]
    #[test_case("projects/{project}/metricDescriptors/{metric_descriptor=**}", &[("project", "p"), ("metric_descriptor", "a/b/c")], "projects/p/metricDescriptors/a/b/c")]
    #[test_case("{name=projects/*/locations/*}/keys", &[("name", "projects/p/locations/l")], "projects/p/locations/l/keys")]
    #[test_case("projects/*/topics/*", &[("$0", "p"), ("$1", "t")], "projects/p/topics/t")]
    fn render(template: &str, bindings: &[(&str, &str)], want: &str) -> anyhow::Result<()> {
        let template = PathTemplate::new(template)?;
        let got = template.render(bindings)?;
        assert_eq!(got, want);
        // Rendering and matching are inverses.
        let matched = template.match_path(&got)?;
        for (name, value) in bindings {
            assert_eq!(matched.get(*name).map(String::as_str), Some(*value), "{matched:?}");
        }
        Ok(())
    }

    #[test]
    fn render_errors() -> anyhow::Result<()> {
        let template = PathTemplate::new("projects/{project}/instances/{instance}")?;
        let got = template.render(&[("project", "p")]);
        assert_eq!(got, Err(Error::MissingBinding("instance".to_string())));

        let got = template.render(&[("project", "p/q"), ("instance", "i")]);
        assert!(matches!(got, Err(Error::InvalidBinding { ref name, .. }) if name == "project"), "{got:?}");

        let got = template.render(&[("project", ""), ("instance", "i")]);
        assert!(matches!(got, Err(Error::InvalidBinding { .. })), "{got:?}");

        let template = PathTemplate::new("{name=projects/*/locations/*}")?;
        let got = template.render(&[("name", "folders/f/locations/l")]);
        assert!(matches!(got, Err(Error::InvalidBinding { .. })), "{got:?}");
        Ok(())
    }

    #[test_case("projects/{project}/instances/{instance}", "projects/p/instances"; "too short")]
    #[test_case("projects/{project}/instances/{instance}", "projects/p/instances/i/tables/t"; "too long")]
    #[test_case("projects/{project}/instances/{instance}", "projects/p/clusters/i"; "wrong literal")]
    #[test_case("projects/{project}/instances/{instance}", "projects//instances/i"; "empty segment")]
    #[test_case("projects/{project}/metricDescriptors/{metric_descriptor=**}", "projects/p/metricDescriptors"; "empty multi")]
    fn no_match(template: &str, path: &str) -> anyhow::Result<()> {
        let template = PathTemplate::new(template)?;
        let got = template.match_path(path);
        assert!(matches!(got, Err(Error::NoMatch { .. })), "{got:?}");
        Ok(())
    }

    #[test]
    fn multi_in_the_middle() -> anyhow::Result<()> {
        let template = PathTemplate::new("buckets/{bucket}/objects/{object=**}/acl")?;
        let got = template.match_path("buckets/b/objects/a/acl/b/acl")?;
        assert_eq!(got.get("bucket").map(String::as_str), Some("b"));
        assert_eq!(got.get("object").map(String::as_str), Some("a/acl/b"));
        Ok(())
    }

    #[test]
    fn variables() -> anyhow::Result<()> {
        let template: PathTemplate = "projects/{project}/topics/*".parse()?;
        assert_eq!(template.variables().collect::<Vec<_>>(), vec!["project", "$0"]);
        assert_eq!(template.to_string(), "projects/{project}/topics/*");
        assert_eq!(template.template(), "projects/{project}/topics/*");
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("projects/{project"; "unbalanced")]
    #[test_case("projects/{}"; "empty name")]
    #[test_case("projects/{project}/x/{project}"; "duplicate name")]
    #[test_case("projects//x"; "empty segment")]
    #[test_case("projects/a*"; "partial wildcard")]
    #[test_case("projects/x{project}"; "partial variable")]
    #[test_case("{a=**}/{b=**}"; "two multi")]
    fn invalid_templates(input: &str) {
        let got = PathTemplate::new(input);
        assert!(matches!(got, Err(Error::InvalidTemplate { .. })), "{got:?}");
    }
}
