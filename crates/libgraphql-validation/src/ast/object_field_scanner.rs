use graphql_parser::Pos;
use std::collections::HashMap;
use std::str::Chars;

/// A field named more than once within a single input object literal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateObjectField {
    pub name: String,

    /// Position of the field's first occurrence in the literal.
    pub first: Pos,

    /// Position of the repeated occurrence.
    pub duplicate: Pos,
}

enum Frame {
    Arguments,
    List,
    Object(HashMap<String, Pos>),
    SelectionSet,
}

/// Finds field names repeated within one object literal of an executable
/// document.
///
/// Only meaningful for source that has already parsed successfully: the scan
/// is purely lexical and relies on the grammar to tell selection sets apart
/// from object values (a `{` nested in arguments or a list is always a
/// value).
pub(crate) fn find_duplicate_object_fields(source: &str) -> Vec<DuplicateObjectField> {
    let mut cursor = Cursor::new(source);
    let mut frames: Vec<Frame> = vec![];
    let mut duplicates = vec![];

    while let Some(ch) = cursor.peek() {
        match ch {
            '#' => cursor.skip_comment(),
            '"' => cursor.skip_string(),
            '$' => {
                cursor.bump();
                cursor.take_name();
            },
            '(' => {
                cursor.bump();
                frames.push(Frame::Arguments);
            },
            '[' => {
                cursor.bump();
                frames.push(Frame::List);
            },
            '{' => {
                cursor.bump();
                let frame = match frames.last() {
                    None | Some(Frame::SelectionSet) => Frame::SelectionSet,
                    Some(_) => Frame::Object(HashMap::new()),
                };
                frames.push(frame);
            },
            ')' | ']' | '}' => {
                cursor.bump();
                frames.pop();
            },
            '-' | '0'..='9' => cursor.skip_number(),
            ch if is_name_start(ch) => {
                let pos = cursor.pos();
                let name = cursor.take_name();
                let Some(Frame::Object(seen)) = frames.last_mut() else {
                    continue;
                };
                if cursor.next_significant() != Some(':') {
                    continue;
                }
                match seen.get(&name) {
                    Some(first) => duplicates.push(DuplicateObjectField {
                        name,
                        first: *first,
                        duplicate: pos,
                    }),
                    None => {
                        seen.insert(name, pos);
                    },
                }
            },
            _ => cursor.bump(),
        }
    }

    duplicates
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

#[derive(Clone)]
struct Cursor<'a> {
    chars: Chars<'a>,
    line: usize,
    column: usize,
}
impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            line: 1,
            column: 1,
        }
    }

    fn pos(&self) -> Pos {
        Pos {
            line: self.line,
            column: self.column,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.chars.as_str().starts_with(prefix)
    }

    fn bump(&mut self) {
        match self.chars.next() {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            },
            Some(_) => self.column += 1,
            None => (),
        }
    }

    fn bump_n(&mut self, count: usize) {
        for _ in 0..count {
            self.bump();
        }
    }

    fn take_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(ch) = self.peek().filter(|ch| is_name_continue(*ch)) {
            name.push(ch);
            self.bump();
        }
        name
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.bump();
        }
    }

    fn skip_number(&mut self) {
        let mut prev = None;
        while let Some(ch) = self.peek() {
            let continues = match ch {
                '-' if prev.is_none() => true,
                '+' | '-' => matches!(prev, Some('e' | 'E')),
                '.' => true,
                ch => ch.is_ascii_alphanumeric(),
            };
            if !continues {
                break;
            }
            prev = Some(ch);
            self.bump();
        }
    }

    fn skip_string(&mut self) {
        if self.starts_with("\"\"\"") {
            self.bump_n(3);
            while self.peek().is_some() {
                if self.starts_with("\\\"\"\"") {
                    self.bump_n(4);
                } else if self.starts_with("\"\"\"") {
                    self.bump_n(3);
                    return;
                } else {
                    self.bump();
                }
            }
            return;
        }

        self.bump();
        while let Some(ch) = self.peek() {
            match ch {
                '\\' => self.bump_n(2),
                '"' => {
                    self.bump();
                    return;
                },
                '\n' | '\r' => return,
                _ => self.bump(),
            }
        }
    }

    /// The next character that is not whitespace, a comma or part of a
    /// comment, without consuming anything.
    fn next_significant(&self) -> Option<char> {
        let mut lookahead = self.clone();
        while let Some(ch) = lookahead.peek() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{feff}' => lookahead.bump(),
                '#' => lookahead.skip_comment(),
                ch => return Some(ch),
            }
        }
        None
    }
}
