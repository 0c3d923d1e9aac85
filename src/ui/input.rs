//! Inline value prompt: which request a prompt builds and how its text is
//! parsed

use crate::history::Operation;
use crate::structures::{Query, Value};

/// A request ready to hand to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Execute(Operation),
    Query(Query),
}

/// Operations that need a value typed in first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Push,
    Enqueue,
    PairEnqueue,
    ListHead,
    ListTail,
    ListInsertAt,
    ListDeleteAt,
    ListDeleteValue,
    ListSearch,
    BstInsert,
    BstDelete,
    BstSearch,
}

impl PromptAction {
    pub fn label(self) -> &'static str {
        match self {
            PromptAction::Push => "Push value",
            PromptAction::Enqueue | PromptAction::PairEnqueue => "Enqueue value",
            PromptAction::ListHead => "Insert at head",
            PromptAction::ListTail => "Insert at tail",
            PromptAction::ListInsertAt => "Insert <value> <position>",
            PromptAction::ListDeleteAt => "Delete position",
            PromptAction::ListDeleteValue | PromptAction::BstDelete => "Delete value",
            PromptAction::ListSearch | PromptAction::BstSearch => "Search value",
            PromptAction::BstInsert => "Insert key",
        }
    }

    /// Turn the typed text into a request
    pub fn parse(self, input: &str) -> Result<Request, String> {
        let input = input.trim();
        Ok(match self {
            PromptAction::Push => Request::Execute(Operation::Push(value(input)?)),
            PromptAction::Enqueue => Request::Execute(Operation::Enqueue(value(input)?)),
            PromptAction::PairEnqueue => Request::Execute(Operation::PairEnqueue(value(input)?)),
            PromptAction::ListHead => Request::Execute(Operation::ListPushFront(value(input)?)),
            PromptAction::ListTail => Request::Execute(Operation::ListPushBack(value(input)?)),
            PromptAction::ListInsertAt => {
                let mut parts = input
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|part| !part.is_empty());
                let (Some(v), Some(p), None) = (parts.next(), parts.next(), parts.next()) else {
                    return Err(String::from("expected a value and a position, e.g. 7 2"));
                };
                Request::Execute(Operation::ListInsert {
                    value: value(v)?,
                    position: position(p)?,
                })
            }
            PromptAction::ListDeleteAt => Request::Execute(Operation::ListDelete {
                position: position(input)?,
            }),
            PromptAction::ListDeleteValue => {
                Request::Execute(Operation::ListRemoveValue(value(input)?))
            }
            PromptAction::ListSearch => Request::Query(Query::ListSearch(value(input)?)),
            PromptAction::BstInsert => Request::Execute(Operation::BstInsert(value(input)?)),
            PromptAction::BstDelete => Request::Execute(Operation::BstDelete(value(input)?)),
            PromptAction::BstSearch => Request::Query(Query::BstSearch(value(input)?)),
        })
    }
}

fn value(text: &str) -> Result<Value, String> {
    text.parse()
        .map_err(|_| format!("'{}' is not a whole number", text))
}

fn position(text: &str) -> Result<usize, String> {
    text.parse()
        .map_err(|_| format!("'{}' is not a valid position", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_value() {
        assert_eq!(
            PromptAction::Push.parse(" -12 "),
            Ok(Request::Execute(Operation::Push(-12)))
        );
        assert!(PromptAction::BstInsert.parse("abc").is_err());
    }

    #[test]
    fn test_parse_insert_at() {
        assert_eq!(
            PromptAction::ListInsertAt.parse("7, 2"),
            Ok(Request::Execute(Operation::ListInsert {
                value: 7,
                position: 2
            }))
        );
        assert!(PromptAction::ListInsertAt.parse("7").is_err());
        assert!(PromptAction::ListInsertAt.parse("7 -1").is_err());
    }
}
