use super::{Argument, ArgumentSet, FrameworkError, LabelType};
use std::collections::HashSet;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// Frameworks are append-only: arguments and attacks can be added, never removed.
/// Attacks form a set; adding an attack that already exists has no effect.
///
/// Each successful mutation increases the [generation](Self::generation) of the framework.
/// Results computed on a framework remain valid as long as its generation does not change.
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attack_set: HashSet<(usize, usize)>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
    generation: u64,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use dungsem::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }

    /// Returns `true` iff the attacker and the attacked argument are the same.
    pub fn is_self_attack(&self) -> bool {
        self.0.id() == self.1.id()
    }
}

impl<T> Default for AAFramework<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an empty AA framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::AAFramework;
    /// let framework = AAFramework::<String>::new();
    /// assert_eq!(0, framework.n_arguments());
    /// assert_eq!(0, framework.generation());
    /// ```
    pub fn new() -> Self {
        Self::new_with_argument_set(ArgumentSet::default())
    }

    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.argument_set().len());
    /// assert_eq!(0, framework.iter_attacks().count());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attacks_from = (0..arguments.len()).map(|_| vec![]).collect();
        let attacks_to = (0..arguments.len()).map(|_| vec![]).collect();
        AAFramework {
            arguments,
            attacks: vec![],
            attack_set: HashSet::new(),
            attacks_from,
            attacks_to,
            generation: 0,
        }
    }

    /// Adds a new argument to this argumentation framework.
    ///
    /// If an argument with the same label already exists, a [`FrameworkError::DuplicateArgument`] is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::AAFramework;
    /// let mut framework = AAFramework::new();
    /// framework.new_argument("a").unwrap();
    /// assert!(framework.new_argument("a").is_err());
    /// assert_eq!(1, framework.n_arguments());
    /// ```
    pub fn new_argument(&mut self, label: T) -> Result<(), FrameworkError> {
        self.new_argument_with_metadata(label, None)
    }

    /// Adds a new argument with an optional metadata to this argumentation framework.
    pub fn new_argument_with_metadata(
        &mut self,
        label: T,
        metadata: Option<String>,
    ) -> Result<(), FrameworkError> {
        self.arguments.new_argument(label, metadata)?;
        self.attacks_from.push(Vec::new());
        self.attacks_to.push(Vec::new());
        self.generation += 1;
        Ok(())
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If one of the provided arguments is undefined, a [`FrameworkError::UnknownArgument`] is returned and the framework is left unchanged.
    /// If the attack already exists, nothing happens.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack(&labels[0], &labels[1]).unwrap();
    /// framework.new_attack(&labels[0], &labels[1]).unwrap();
    /// assert_eq!(1, framework.n_attacks());
    /// assert!(framework.new_attack(&labels[0], &"d").is_err());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<(), FrameworkError> {
        let attacker_id = self.arguments.get_argument_index(from)?;
        let attacked_id = self.arguments.get_argument_index(to)?;
        self.add_attack_ids(attacker_id, attacked_id);
        Ok(())
    }

    /// Adds a new attack given the IDs of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an error is returned.
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<(), FrameworkError> {
        let n_arguments = self.arguments.len();
        for id in [from, to] {
            if id >= n_arguments {
                return Err(FrameworkError::UnknownArgument(format!("#{}", id)));
            }
        }
        self.add_attack_ids(from, to);
        Ok(())
    }

    fn add_attack_ids(&mut self, from: usize, to: usize) {
        if !self.attack_set.insert((from, to)) {
            return;
        }
        self.attacks.push((from, to));
        self.attacks_from[from].push(self.attacks.len() - 1);
        self.attacks_to[to].push(self.attacks.len() - 1);
        self.generation += 1;
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns `true` iff the first argument attacks the second one.
    pub fn has_attack(&self, from: &Argument<T>, to: &Argument<T>) -> bool {
        self.attack_set.contains(&(from.id(), to.id()))
    }

    /// Provides an iterator to the attacks, in insertion order.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack_by_ids(0, 1).unwrap(); // "a" attacks "b"
    /// assert_eq!(1, framework.iter_attacks().count());
    /// ```
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| self.make_attack(*a, *b))
    }

    /// Provides an iterator to the attacks that have the given argument as attacker.
    pub fn iter_attacks_from(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.iter_attacks_from_id(arg.id())
    }

    /// Provides an iterator to the attacks in which the attacker is the one given by the id.
    pub fn iter_attacks_from_id(&self, attacker_id: usize) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_from[attacker_id].iter().map(|i| {
            let (a, b) = self.attacks[*i];
            self.make_attack(a, b)
        })
    }

    /// Provides an iterator to the attacks that have the given argument as attacked.
    pub fn iter_attacks_to(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.iter_attacks_to_id(arg.id())
    }

    /// Provides an iterator to the attacks in which the attacked argument is the one given by the id.
    pub fn iter_attacks_to_id(&self, attacked_id: usize) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_to[attacked_id].iter().map(|i| {
            let (a, b) = self.attacks[*i];
            self.make_attack(a, b)
        })
    }

    fn make_attack(&self, attacker_id: usize, attacked_id: usize) -> Attack<'_, T> {
        Attack(
            self.arguments.get_argument_by_id(attacker_id),
            self.arguments.get_argument_by_id(attacked_id),
        )
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the number of attacks in this framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(0, framework.n_attacks());
    /// framework.new_attack_by_ids(0, 1).unwrap(); // "a" attacks "b"
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }

    /// Returns the generation of this framework.
    ///
    /// The generation starts at zero for frameworks built by [new](Self::new) and [new_with_argument_set](Self::new_with_argument_set),
    /// and increases each time an argument or an attack is actually added.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Opaque(u8);

    impl std::fmt::Display for Opaque {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "o{}", self.0)
        }
    }

    fn empty_framework<T: LabelType>() -> AAFramework<T> {
        AAFramework::default()
    }

    #[test]
    fn test_default_does_not_require_default_labels() {
        let mut af = empty_framework::<Opaque>();
        assert_eq!(0, af.n_arguments());
        assert_eq!(0, ArgumentSet::<Opaque>::default().len());
        af.new_argument(Opaque(0)).unwrap();
        af.new_argument(Opaque(1)).unwrap();
        af.new_attack(&Opaque(0), &Opaque(1)).unwrap();
        assert_eq!(1, af.n_attacks());
        assert_eq!("o1", af.argument_set().get_argument(&Opaque(1)).unwrap().to_string());
    }

    fn abc_framework() -> AAFramework<String> {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&arg_labels))
    }

    #[test]
    fn test_n_args() {
        assert_eq!(3, abc_framework().n_arguments());
    }

    #[test]
    fn test_new_attack_ok() {
        let mut af = abc_framework();
        assert_eq!(0, af.n_attacks());
        af.new_attack(&"a".to_string(), &"a".to_string()).unwrap();
        assert_eq!(1, af.n_attacks());
        assert_eq!((0, 0), af.attacks[0]);
        assert!(af.iter_attacks().next().unwrap().is_self_attack());
    }

    #[test]
    fn test_new_attack_unknown_label_1() {
        let mut af = abc_framework();
        assert_eq!(
            FrameworkError::UnknownArgument("d".to_string()),
            af.new_attack(&"d".to_string(), &"a".to_string())
                .unwrap_err()
        );
        assert_eq!(0, af.generation());
    }

    #[test]
    fn test_new_attack_unknown_label_2() {
        let mut af = abc_framework();
        af.new_attack(&"a".to_string(), &"d".to_string())
            .unwrap_err();
        assert_eq!(0, af.n_attacks());
        assert_eq!(0, af.generation());
    }

    #[test]
    fn test_duplicate_attack_collapses() {
        let mut af = abc_framework();
        af.new_attack(&"a".to_string(), &"b".to_string()).unwrap();
        let generation = af.generation();
        af.new_attack(&"a".to_string(), &"b".to_string()).unwrap();
        af.new_attack_by_ids(0, 1).unwrap();
        assert_eq!(1, af.n_attacks());
        assert_eq!(generation, af.generation());
        assert_eq!(1, af.iter_attacks_from_id(0).count());
        assert_eq!(1, af.iter_attacks_to_id(1).count());
    }

    #[test]
    fn test_new_attack_by_ids_unknown_id() {
        let mut af = abc_framework();
        af.new_attack_by_ids(3, 0).unwrap_err();
        af.new_attack_by_ids(0, 3).unwrap_err();
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_new_argument() {
        let mut af = abc_framework();
        af.new_argument("d".to_string()).unwrap();
        assert_eq!(4, af.n_arguments());
        assert_eq!(1, af.generation());
        assert_eq!(
            FrameworkError::DuplicateArgument("d".to_string()),
            af.new_argument("d".to_string()).unwrap_err()
        );
        assert_eq!(4, af.n_arguments());
        assert_eq!(1, af.generation());
        af.new_attack(&"d".to_string(), &"a".to_string()).unwrap();
        assert_eq!(2, af.generation());
    }

    #[test]
    fn test_attacks_from_and_to() {
        let mut af = abc_framework();
        af.new_attack_by_ids(0, 1).unwrap();
        af.new_attack_by_ids(0, 2).unwrap();
        af.new_attack_by_ids(2, 1).unwrap();
        let a = af.argument_set().get_argument_by_id(0);
        let b = af.argument_set().get_argument_by_id(1);
        assert_eq!(
            vec!["b", "c"],
            af.iter_attacks_from(a)
                .map(|att| att.attacked().label().as_str())
                .collect::<Vec<&str>>()
        );
        assert_eq!(
            vec!["a", "c"],
            af.iter_attacks_to(b)
                .map(|att| att.attacker().label().as_str())
                .collect::<Vec<&str>>()
        );
        assert!(af.has_attack(a, b));
        assert!(!af.has_attack(b, a));
    }
}
