use super::FrameworkError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// Identifiers are given in insertion order, starting at zero.
/// An argument may carry a free-text metadata, which is never read by the semantics solvers.
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
    metadata: Option<String>,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use dungsem::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the metadata attached to the argument, if any.
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// Argument sets only grow: an argument cannot be removed once it has been added.
/// As a consequence, the identifiers of the arguments are exactly the integers from `0` to `len() - 1`.
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        ArgumentSet {
            arguments: vec![],
            label_to_id: HashMap::new(),
        }
    }
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
        };
        labels.iter().for_each(|l| {
            let _ = argument_set.new_argument(l.clone(), None);
        });
        argument_set.arguments.shrink_to_fit();
        argument_set.label_to_id.shrink_to_fit();
        argument_set
    }

    /// Adds a new argument to this set and returns its id.
    ///
    /// The id of the new argument is the number of arguments defined before it.
    /// If an argument with the same label is already defined, an error is returned and the set is left unchanged.
    pub fn new_argument(
        &mut self,
        label: T,
        metadata: Option<String>,
    ) -> Result<usize, FrameworkError> {
        if self.label_to_id.contains_key(&label) {
            return Err(FrameworkError::DuplicateArgument(label.to_string()));
        }
        let id = self.arguments.len();
        self.label_to_id.insert(label.clone(), id);
        self.arguments.push(Argument {
            id,
            label,
            metadata,
        });
        Ok(id)
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a"]);
    /// assert!(!arguments.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// If no such label exists, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(0, arguments.get_argument_index(&labels[0]).unwrap());
    /// assert_eq!(2, arguments.get_argument_index(&labels[2]).unwrap());
    /// assert!(arguments.get_argument_index(&"d").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize, FrameworkError> {
        self.label_to_id
            .get(label)
            .copied()
            .ok_or_else(|| FrameworkError::UnknownArgument(label.to_string()))
    }

    /// Returns the argument associated to an argument label.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>, FrameworkError> {
        self.get_argument_index(label)
            .map(|i| &self.arguments[i])
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns an iterator to the arguments, in increasing id order.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// assert_eq!(3, arguments.iter().count());
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(3, args.label_to_id.len());
        assert_eq!(3, args.len());
        assert!(!args.is_empty());
        for (i, a) in args.arguments.iter().enumerate() {
            assert_eq!(i, a.id);
            assert_eq!(arg_labels[i], a.label);
            assert!(a.metadata().is_none());
        }
    }

    #[test]
    fn test_new_with_empty_labels() {
        let args = ArgumentSet::new_with_labels(&[] as &[String]);
        assert_eq!(0, args.len());
        assert!(args.is_empty());
    }

    #[test]
    fn test_new_repeated_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(2, args.len());
    }

    #[test]
    fn test_iter_order() {
        let arg_labels = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let iter_labels = args
            .iter()
            .map(|a| a.label().clone())
            .collect::<Vec<String>>();
        assert_eq!(arg_labels, iter_labels);
    }

    #[test]
    fn test_get_argument() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        assert_eq!(1, arguments.get_argument(&"b").unwrap().id());
        assert_eq!(
            FrameworkError::UnknownArgument("d".to_string()),
            arguments.get_argument(&"d").unwrap_err()
        );
    }

    #[test]
    fn test_add_arguments() {
        let mut args = ArgumentSet::new_with_labels(&["a".to_string(), "b".to_string()]);
        assert_eq!(2, args.new_argument("c".to_string(), None).unwrap());
        assert_eq!(
            FrameworkError::DuplicateArgument("c".to_string()),
            args.new_argument("c".to_string(), None).unwrap_err()
        );
        assert_eq!(3, args.len());
        assert_eq!(2, args.get_argument(&"c".to_string()).unwrap().id())
    }

    #[test]
    fn test_metadata() {
        let mut args = ArgumentSet::default();
        args.new_argument("a", Some("a claim".to_string())).unwrap();
        assert_eq!(Some("a claim"), args.get_argument(&"a").unwrap().metadata());
        assert_eq!("a", format!("{}", args.get_argument_by_id(0)));
    }
}
