use anyhow::{anyhow, Context, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

/// The semantics associated with a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum Semantics {
    /// The admissible sets
    AD,
    /// The complete semantics
    CO,
    /// The grounded semantics
    GR,
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
    /// The ideal semantics
    ID,
}

impl Semantics {
    /// Returns `true` iff this semantics always admits exactly one extension.
    pub fn is_single_status(&self) -> bool {
        matches!(self, Semantics::GR | Semantics::ID)
    }
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Semantics::iter()
            .find(|s| s.as_ref().eq_ignore_ascii_case(value))
            .ok_or_else(|| anyhow!(r#"undefined semantics "{}""#, value))
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum Query {
    /// Compute a single extension
    SE,
    /// Enumerate all the extensions
    EE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Returns `true` iff the query needs an argument.
    pub fn requires_argument(&self) -> bool {
        matches!(self, Query::DC | Query::DS)
    }

    /// Iterates over the problem strings handled by this library.
    ///
    /// Each problem string follows the `XX-YY` pattern, where `XX` is the query and `YY` the semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::Query;
    /// assert!(Query::iter_problem_strings().any(|p| p == "EE-PR"));
    /// ```
    pub fn iter_problem_strings() -> impl Iterator<Item = String> {
        Query::iter()
            .flat_map(|q| Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref())))
    }
}

impl TryFrom<&str> for Query {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Query::iter()
            .find(|q| q.as_ref().eq_ignore_ascii_case(value))
            .ok_or_else(|| anyhow!(r#"undefined query "{}""#, value))
    }
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).with_context(context)?;
            let semantics = Semantics::try_from(&problem[1 + n..]).with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_problem_ok() {
        assert_eq!(
            (Query::SE, Semantics::ST),
            read_problem_string("SE-ST").unwrap()
        );
        assert_eq!(
            (Query::EE, Semantics::AD),
            read_problem_string("ee-ad").unwrap()
        );
        assert_eq!(
            (Query::DS, Semantics::ID),
            read_problem_string("DS-id").unwrap()
        );
    }

    #[test]
    fn test_read_problem_unknown_query() {
        assert!(read_problem_string("foo-ST").is_err());
    }

    #[test]
    fn test_read_problem_unknown_semantics() {
        assert!(read_problem_string("SE-foo").is_err());
    }

    #[test]
    fn test_read_problem_no_hyphen() {
        assert!(read_problem_string("SEST").is_err());
    }

    #[test]
    fn test_iter_problem_strings() {
        let problems = Query::iter_problem_strings().collect::<Vec<String>>();
        assert_eq!(24, problems.len());
        assert_eq!("SE-AD", problems[0]);
        assert_eq!("DS-ID", problems[23]);
        problems
            .iter()
            .for_each(|p| assert!(read_problem_string(p).is_ok()));
    }

    #[test]
    fn test_requires_argument() {
        assert!(!Query::SE.requires_argument());
        assert!(!Query::EE.requires_argument());
        assert!(Query::DC.requires_argument());
        assert!(Query::DS.requires_argument());
    }
}
