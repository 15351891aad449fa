//! Assigns and looks up the matching ids of parenthesis tokens.

use crate::{error::{UnmatchedClosing, UnmatchedOpening}, token::{ParenRole, Token, TokenKind}};
use texcas_error::Error;

/// A matched pair of parentheses in a token slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// The index of the opening parenthesis.
    pub open: usize,

    /// The index of the closing parenthesis.
    pub close: usize,

    /// How many groups enclose the content of this group, including itself. Top-level groups
    /// have a depth of 1.
    pub depth: usize,
}

impl Group {
    /// Returns true if the group holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.close == self.open + 1
    }

    /// Returns the number of tokens inside the group, excluding the parentheses.
    pub fn inner_len(&self) -> usize {
        self.close - self.open - 1
    }
}

/// Assigns matching group ids to every parenthesis in the slice, in order of appearance, starting
/// from `first_id`. Returns the next unused id.
///
/// Every unmatched parenthesis is reported; the scan does not stop at the first one.
pub fn assign_groups(tokens: &mut [Token], first_id: usize) -> Result<usize, Vec<Error>> {
    let mut next_id = first_id;
    let mut stack = Vec::new();
    let mut errors = Vec::new();

    for i in 0..tokens.len() {
        let Some(paren) = tokens[i].as_paren() else {
            continue;
        };

        let group = match paren.role {
            ParenRole::Open => {
                stack.push(i);
                next_id += 1;
                next_id - 1
            },
            ParenRole::Close => match stack.pop() {
                Some(open) => tokens[open].as_paren().map_or(0, |open| open.group),
                None => {
                    errors.push(Error::new(vec![tokens[i].span.clone()], UnmatchedClosing));
                    continue;
                },
            },
        };

        if let TokenKind::Paren(ref mut paren) = tokens[i].kind {
            paren.group = group;
        }
    }

    errors.extend(stack.into_iter()
        .map(|open| Error::new(vec![tokens[open].span.clone()], UnmatchedOpening)));

    if errors.is_empty() {
        Ok(next_id)
    } else {
        Err(errors)
    }
}

/// Returns the index of the parenthesis matching the one at `index`, or [`None`] if the token
/// is not a parenthesis or has no partner.
pub fn partner(tokens: &[Token], index: usize) -> Option<usize> {
    let paren = tokens.get(index)?.as_paren()?;
    let is_partner = |token: &Token| {
        token.as_paren().map_or(false, |other| other.group == paren.group && other.role != paren.role)
    };

    match paren.role {
        ParenRole::Open => tokens[index + 1..]
            .iter()
            .position(is_partner)
            .map(|offset| index + 1 + offset),
        ParenRole::Close => tokens[..index].iter().rposition(is_partner),
    }
}

/// Returns every group in the slice, ordered by the position of their opening parenthesis.
///
/// The slice must be well-nested; unmatched parentheses are ignored.
pub fn groups(tokens: &[Token]) -> Vec<Group> {
    let mut stack = Vec::new();
    let mut groups = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.is_open() {
            stack.push(i);
        } else if token.is_close() {
            if let Some(open) = stack.pop() {
                groups.push(Group { open, close: i, depth: stack.len() + 1 });
            }
        }
    }

    groups.sort_by_key(|group| group.open);
    groups
}

/// Returns the nesting depth at the given index, i.e. the number of groups that enclose it.
pub fn depth_at(tokens: &[Token], index: usize) -> usize {
    let mut depth = 0usize;
    for token in &tokens[..index] {
        if token.is_open() {
            depth += 1;
        } else if token.is_close() {
            depth = depth.saturating_sub(1);
        }
    }
    depth
}

/// Returns true if the parentheses in the slice are well-nested and every group id appears
/// exactly twice, once as an opening and once as a closing parenthesis.
pub fn is_balanced(tokens: &[Token]) -> bool {
    let mut stack = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for token in tokens {
        let Some(paren) = token.as_paren() else {
            continue;
        };

        match paren.role {
            ParenRole::Open => {
                if !seen.insert(paren.group) {
                    return false;
                }
                stack.push(paren.group);
            },
            ParenRole::Close => {
                if stack.pop() != Some(paren.group) {
                    return false;
                }
            },
        }
    }

    stack.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parens(source: &str) -> Vec<Token> {
        source.char_indices()
            .map(|(i, c)| {
                let role = if c == '(' { ParenRole::Open } else { ParenRole::Close };
                Token::paren(role, 0, i..i + 1)
            })
            .collect()
    }

    #[test]
    fn assign_nested() {
        let mut tokens = parens("(()())");
        assert_eq!(assign_groups(&mut tokens, 0).unwrap(), 3);
        assert_eq!(partner(&tokens, 0), Some(5));
        assert_eq!(partner(&tokens, 1), Some(2));
        assert_eq!(partner(&tokens, 4), Some(3));
        assert!(is_balanced(&tokens));
    }

    #[test]
    fn unmatched_are_all_reported() {
        let mut tokens = parens(")((");
        let errors = assign_groups(&mut tokens, 0).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].message(), "Unmatched closing bracket");
        assert_eq!(errors[1].message(), "Unmatched opening bracket");
    }

    #[test]
    fn group_depths() {
        let mut tokens = parens("(())()");
        assign_groups(&mut tokens, 0).unwrap();
        let groups = groups(&tokens);
        assert_eq!(groups, vec![
            Group { open: 0, close: 3, depth: 1 },
            Group { open: 1, close: 2, depth: 2 },
            Group { open: 4, close: 5, depth: 1 },
        ]);
        assert_eq!(depth_at(&tokens, 2), 2);
        assert_eq!(depth_at(&tokens, 4), 0);
    }
}
