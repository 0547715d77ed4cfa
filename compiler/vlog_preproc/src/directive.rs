//! Directive micro-syntax.
//!
//! [`Directive::parse`] reads one directive line as the scanner hands it
//! over (backtick included) and [`PreprocessorContext::apply`] dispatches the
//! result to the matching handler.

use vlog_ir::{NetType, PrimitiveStrength};

use crate::context::PreprocessorContext;
use crate::include::IncludeResolver;
use crate::PreprocError;

/// One parsed compiler directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    Define { name: String, value: String },
    Undef(String),
    Ifdef(String),
    Ifndef(String),
    Elsif(String),
    Else,
    Endif,
    ResetAll,
    CellDefine,
    EndCellDefine,
    DefaultNetType(NetType),
    UnconnectedDrive(PrimitiveStrength),
    NoUnconnectedDrive,
    Include(String),
    Timescale { unit: String, precision: String },
    Line { line: u32, file: String, level: u8 },
    /// `` `NAME `` where `NAME` is not a directive keyword.
    MacroUse(String),
}

impl Directive {
    /// Parse one directive, e.g. `` `define WIDTH 8 `` or `` `timescale 1ns/1ps ``.
    pub fn parse(line: u32, text: &str) -> Result<Self, PreprocError> {
        let text = text.trim();
        let Some(body) = text.strip_prefix('`') else {
            return Err(PreprocError::malformed(line, "directive must start with '`'"));
        };
        let (keyword, rest) = split_identifier(body);
        if keyword.is_empty() {
            return Err(PreprocError::malformed(line, "missing directive name"));
        }
        let rest = strip_comments(rest);
        let rest = rest.trim();

        let directive = match keyword {
            "define" => {
                let (name, value) = split_identifier(rest);
                if name.is_empty() {
                    return Err(PreprocError::malformed(line, "`define without a macro name"));
                }
                Directive::Define {
                    name: name.to_owned(),
                    value: value.trim().to_owned(),
                }
            }
            "undef" => Directive::Undef(single_name(line, keyword, rest)?),
            "ifdef" => Directive::Ifdef(single_name(line, keyword, rest)?),
            "ifndef" => Directive::Ifndef(single_name(line, keyword, rest)?),
            "elsif" => Directive::Elsif(single_name(line, keyword, rest)?),
            "else" => no_arguments(line, keyword, rest, Directive::Else)?,
            "endif" => no_arguments(line, keyword, rest, Directive::Endif)?,
            "resetall" => no_arguments(line, keyword, rest, Directive::ResetAll)?,
            "celldefine" => no_arguments(line, keyword, rest, Directive::CellDefine)?,
            "endcelldefine" => no_arguments(line, keyword, rest, Directive::EndCellDefine)?,
            "nounconnected_drive" => {
                no_arguments(line, keyword, rest, Directive::NoUnconnectedDrive)?
            }
            "default_nettype" => match NetType::from_keyword(rest) {
                Some(net_type) => Directive::DefaultNetType(net_type),
                None => {
                    return Err(PreprocError::UnknownNetType {
                        line,
                        found: rest.to_owned(),
                    })
                }
            },
            "unconnected_drive" => match PrimitiveStrength::from_keyword(rest) {
                Some(pull @ (PrimitiveStrength::Pull0 | PrimitiveStrength::Pull1)) => {
                    Directive::UnconnectedDrive(pull)
                }
                _ => {
                    return Err(PreprocError::InvalidUnconnectedDrive {
                        line,
                        found: rest.to_owned(),
                    })
                }
            },
            "include" => {
                let (file, trailing) = quoted(rest)
                    .or_else(|| angled(rest))
                    .ok_or_else(|| PreprocError::malformed(line, "`include expects \"file\""))?;
                if !trailing.trim().is_empty() {
                    return Err(PreprocError::malformed(line, "text after `include file name"));
                }
                Directive::Include(file.to_owned())
            }
            "timescale" => parse_timescale(line, rest)?,
            "line" => parse_line(line, rest)?,
            name => Directive::MacroUse(name.to_owned()),
        };
        Ok(directive)
    }

    /// Whether the directive opens, continues or closes a conditional.
    /// These are processed even inside skipped regions.
    pub fn is_conditional(&self) -> bool {
        matches!(
            self,
            Directive::Ifdef(_)
                | Directive::Ifndef(_)
                | Directive::Elsif(_)
                | Directive::Else
                | Directive::Endif
        )
    }
}

impl PreprocessorContext {
    /// Run the handler for `directive`.
    ///
    /// Outside of the conditional directives nothing is applied while tokens
    /// are suppressed. A macro use returns the macro's expansion text.
    pub fn apply(
        &mut self,
        line: u32,
        directive: Directive,
        resolver: &dyn IncludeResolver,
    ) -> Result<Option<String>, PreprocError> {
        if !self.emit() && !directive.is_conditional() {
            tracing::trace!(line, ?directive, "directive skipped");
            return Ok(None);
        }

        match directive {
            Directive::Define { name, value } => self.define(line, &name, &value)?,
            Directive::Undef(name) => self.undefine(line, &name),
            Directive::Ifdef(name) => self.ifdef(line, &name),
            Directive::Ifndef(name) => self.ifndef(line, &name),
            Directive::Elsif(name) => self.elsif(line, &name)?,
            Directive::Else => self.else_branch(line)?,
            Directive::Endif => self.endif(line)?,
            Directive::ResetAll => self.reset_all(line),
            Directive::CellDefine => self.cell_define(line),
            Directive::EndCellDefine => self.end_cell_define(line),
            Directive::DefaultNetType(net_type) => self.default_net_type(line, net_type),
            Directive::UnconnectedDrive(pull) => self.unconnected_drive(line, pull)?,
            Directive::NoUnconnectedDrive => self.no_unconnected_drive(line),
            Directive::Include(file) => {
                self.include(line, &file, resolver);
            }
            Directive::Timescale { unit, precision } => self.timescale(line, &unit, &precision),
            Directive::Line {
                line: target,
                file,
                level,
            } => self.line_directive(line, target, &file, level),
            Directive::MacroUse(name) => {
                return match self.expand(&name) {
                    Some(text) => Ok(Some(text.to_owned())),
                    None => Err(PreprocError::UndefinedMacro { line, name }),
                };
            }
        }
        Ok(None)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Remove a trailing `//` comment and any `/* ... */` comments that sit
/// outside string literals. A block comment counts as one space.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => break,
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for inner in chars.by_ref() {
                    if previous == '*' && inner == '/' {
                        break;
                    }
                    previous = inner;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    out
}

/// Split a leading identifier off `text`.
fn split_identifier(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !is_identifier_char(c))
        .unwrap_or(text.len());
    text.split_at(end)
}

fn single_name(line: u32, keyword: &str, rest: &str) -> Result<String, PreprocError> {
    let (name, trailing) = split_identifier(rest);
    if name.is_empty() || !trailing.trim().is_empty() {
        return Err(PreprocError::malformed(
            line,
            format!("`{keyword} expects one macro name"),
        ));
    }
    Ok(name.to_owned())
}

fn no_arguments(
    line: u32,
    keyword: &str,
    rest: &str,
    directive: Directive,
) -> Result<Directive, PreprocError> {
    if rest.is_empty() {
        Ok(directive)
    } else {
        Err(PreprocError::malformed(
            line,
            format!("`{keyword} takes no arguments"),
        ))
    }
}

/// `"text" trailing` into `("text", trailing)`.
fn quoted(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix('"')?;
    let end = inner.find('"')?;
    Some((&inner[..end], &inner[end + 1..]))
}

/// `<text> trailing` into `("text", trailing)`.
fn angled(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix('<')?;
    let end = inner.find('>')?;
    Some((&inner[..end], &inner[end + 1..]))
}

/// `1ns / 1ps`: magnitude 1, 10 or 100 followed by s, ms, us, ns, ps or fs.
fn parse_timescale(line: u32, rest: &str) -> Result<Directive, PreprocError> {
    let Some((unit, precision)) = rest.split_once('/') else {
        return Err(PreprocError::malformed(line, "`timescale expects unit/precision"));
    };
    let unit: String = unit.split_whitespace().collect();
    let precision: String = precision.split_whitespace().collect();
    for value in [&unit, &precision] {
        if !is_time_literal(value) {
            return Err(PreprocError::malformed(
                line,
                format!("invalid time literal `{value}`"),
            ));
        }
    }
    Ok(Directive::Timescale { unit, precision })
}

fn is_time_literal(text: &str) -> bool {
    let split = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (magnitude, unit) = text.split_at(split);
    matches!(magnitude, "1" | "10" | "100") && matches!(unit, "s" | "ms" | "us" | "ns" | "ps" | "fs")
}

/// `12 "file.v" 1`
fn parse_line(line: u32, rest: &str) -> Result<Directive, PreprocError> {
    let malformed = || PreprocError::malformed(line, "`line expects number \"file\" level");
    let (number, rest) = rest.split_once(char::is_whitespace).ok_or_else(malformed)?;
    let target: u32 = number.parse().map_err(|_| malformed())?;
    let (file, rest) = quoted(rest.trim_start()).ok_or_else(malformed)?;
    let level: u8 = rest.trim().parse().map_err(|_| malformed())?;
    if level > 2 {
        return Err(malformed());
    }
    Ok(Directive::Line {
        line: target,
        file: file.to_owned(),
        level,
    })
}

#[cfg(test)]
mod tests;
