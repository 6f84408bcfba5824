use super::{InstanceReader, WarningHandler};
use crate::aa::AAFramework;
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};

const ARG_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\).\s*$").unwrap();
    static ref ARG_LINE_ARG_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\).\s*$", ARG_AND_SPACE_PATTERN)).unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^\s*att\([^,]+,[^)]+\).\s*$").unwrap();
    static ref ATT_LINE_ARG_NAMES_PATTERN: Regex = Regex::new(&format!(
        r"^\s*att\(({}),({})\).\s*$",
        ARG_AND_SPACE_PATTERN, ARG_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

const SPACES_WARNING: &str = "argument names beginning or ending by spaces may be ambiguous";

// Returns the trimmed argument name, and whether trimming was needed.
fn captured_arg(c: &Captures, i: usize) -> (String, bool) {
    let str_arg = c.get(i).map(|m| m.as_str()).unwrap_or_default();
    let trimmed_str_arg = str_arg.trim().to_string();
    let trimmed = trimmed_str_arg.len() != str_arg.len();
    (trimmed_str_arg, trimmed)
}

fn try_read_arg_line<T>(l: T) -> Result<Option<(String, bool)>>
where
    T: AsRef<str>,
{
    if ARG_LINE_PATTERN.is_match(l.as_ref()) {
        let captures = ARG_LINE_ARG_NAME_PATTERN.captures(l.as_ref());
        match captures {
            Some(c) => Ok(Some(captured_arg(&c, 1))),
            None => Err(anyhow!("invalid argument name in {}", l.as_ref().trim())),
        }
    } else {
        Ok(None)
    }
}

fn try_read_att_line<T>(l: T) -> Result<Option<((String, String), bool)>>
where
    T: AsRef<str>,
{
    if ATT_LINE_PATTERN.is_match(l.as_ref()) {
        let captures = ATT_LINE_ARG_NAMES_PATTERN.captures(l.as_ref());
        match captures {
            Some(c) => {
                let (a, trimmed_a) = captured_arg(&c, 1);
                let (b, trimmed_b) = captured_arg(&c, 2);
                Ok(Some(((a, b), trimmed_a || trimmed_b)))
            }
            None => Err(anyhow!("invalid argument names in {}", l.as_ref().trim())),
        }
    } else {
        Ok(None)
    }
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// Arguments and attacks may be declared in any order, as long as an attack only involves arguments declared before it.
/// Lines starting with `%` are comments.
/// Declaring an argument twice raises a warning; the second declaration is ignored.
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// # Example
///
/// ```
/// # use dungsem::aa::AAFramework;
/// # use dungsem::io::{AspartixReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn warn(&self, line: usize, warning: &str) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line, warning.to_string()));
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut af = AAFramework::new();
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = &line.with_context(context)?;
            if l.trim().is_empty() || l.trim_start().starts_with('%') {
                continue;
            }
            if let Some((a, trimmed)) = try_read_arg_line(l).with_context(context)? {
                if trimmed {
                    self.warn(1 + i, SPACES_WARNING);
                }
                if let Err(e) = af.new_argument(a) {
                    self.warn(1 + i, &e.to_string());
                }
                continue;
            }
            if let Some(((a, b), trimmed)) = try_read_att_line(l).with_context(context)? {
                if trimmed {
                    self.warn(1 + i, SPACES_WARNING);
                }
                af.new_attack(&a, &b).with_context(context)?;
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", l)).with_context(context);
        }
        debug!(
            "read a framework with {} argument(s) and {} attack(s)",
            af.n_arguments(),
            af.n_attacks()
        );
        Ok(af)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
