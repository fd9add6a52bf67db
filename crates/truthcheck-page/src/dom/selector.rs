//! Minimal CSS selector support: compound selectors (`tag#id.class`) and
//! comma-separated lists of them. Combinators are not supported.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::dom_node::DomNode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unexpected character '{found}' in selector \"{selector}\"")]
    UnexpectedChar { selector: String, found: char },

    #[error("Missing name after '{marker}' in selector \"{selector}\"")]
    MissingName { selector: String, marker: char },
}

/// One compound selector such as `a#video-title` or `span.yt-core-attributed-string`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl CompoundSelector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selector = CompoundSelector::default();
        let mut chars = input.chars().peekable();

        let tag = take_ident(&mut chars);
        if !tag.is_empty() {
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        while let Some(marker) = chars.next() {
            if marker != '#' && marker != '.' {
                return Err(SelectorError::UnexpectedChar {
                    selector: input.to_string(),
                    found: marker,
                });
            }
            let name = take_ident(&mut chars);
            if name.is_empty() {
                return Err(SelectorError::MissingName {
                    selector: input.to_string(),
                    marker,
                });
            }
            if marker == '#' {
                selector.id = Some(name);
            } else {
                selector.classes.push(name);
            }
        }

        Ok(selector)
    }

    pub fn matches(&self, node: &DomNode) -> bool {
        if let Some(ref tag) = self.tag {
            if !node.tag_name.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(ref id) = self.id {
            if node.attributes.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| node.has_class(class))
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref tag) = self.tag {
            f.write_str(tag)?;
        }
        if let Some(ref id) = self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

/// Comma-separated selector list; matches when any member matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(Vec<CompoundSelector>);

impl SelectorList {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let selectors = input
            .split(',')
            .map(CompoundSelector::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(selectors))
    }

    pub fn matches(&self, node: &DomNode) -> bool {
        self.0.iter().any(|s| s.matches(node))
    }

    pub fn selectors(&self) -> &[CompoundSelector] {
        &self.0
    }
}

impl FromStr for SelectorList {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", selector)?;
        }
        Ok(())
    }
}
