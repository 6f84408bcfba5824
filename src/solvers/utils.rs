use super::DefenseEvaluator;
use crate::{
    aa::{AAFramework, Argument, LabelType},
    utils::{ArgumentBitSet, FrameworkIndex},
};

// Translates sets of argument ids to the corresponding vectors of arguments.
pub(crate) fn sets_to_extensions<'a, T>(
    sets: &[ArgumentBitSet],
    af: &'a AAFramework<T>,
) -> Vec<Vec<&'a Argument<T>>>
where
    T: LabelType,
{
    sets.iter().map(|s| s.to_arguments(af)).collect()
}

// Returns the first set containing the argument as a certificate.
pub(crate) fn credulous_acceptance<'a, T>(
    sets: &[ArgumentBitSet],
    arg: &Argument<T>,
    af: &'a AAFramework<T>,
) -> (bool, Option<Vec<&'a Argument<T>>>)
where
    T: LabelType,
{
    match sets.iter().find(|s| s.contains(arg.id())) {
        Some(s) => (true, Some(s.to_arguments(af))),
        None => (false, None),
    }
}

// Returns the first set missing the argument as a certificate.
// With no set at all, the argument is vacuously accepted.
pub(crate) fn skeptical_acceptance<'a, T>(
    sets: &[ArgumentBitSet],
    arg: &Argument<T>,
    af: &'a AAFramework<T>,
) -> (bool, Option<Vec<&'a Argument<T>>>)
where
    T: LabelType,
{
    match sets.iter().find(|s| !s.contains(arg.id())) {
        Some(s) => (false, Some(s.to_arguments(af))),
        None => (true, None),
    }
}

pub(crate) fn filter_complete(
    index: &FrameworkIndex,
    admissible: &[ArgumentBitSet],
) -> Vec<ArgumentBitSet> {
    let defense = DefenseEvaluator::new(index);
    admissible
        .iter()
        .filter(|s| &defense.characteristic_function(s) == *s)
        .cloned()
        .collect()
}

// Keeps the sets that are not strictly included in another one, in their initial order.
pub(crate) fn filter_maximal(sets: &[ArgumentBitSet]) -> Vec<ArgumentBitSet> {
    sets.iter()
        .filter(|s| !sets.iter().any(|other| s.is_strict_subset(other)))
        .cloned()
        .collect()
}

pub(crate) fn filter_stable(
    index: &FrameworkIndex,
    admissible: &[ArgumentBitSet],
) -> Vec<ArgumentBitSet> {
    admissible
        .iter()
        .filter(|s| {
            let mut covered = index.attacked_by(s);
            covered.union_with(s);
            covered.len() == index.n_arguments()
        })
        .cloned()
        .collect()
}

// The ideal set is the greatest admissible subset of the intersection of the preferred extensions.
// Starting from this intersection, the arguments it does not defend are removed until a fixpoint is reached.
pub(crate) fn ideal_set(index: &FrameworkIndex, preferred: &[ArgumentBitSet]) -> ArgumentBitSet {
    let mut candidate = match preferred.split_first() {
        Some((first, others)) => others.iter().fold(first.clone(), |mut acc, s| {
            acc.intersect_with(s);
            acc
        }),
        None => return index.empty_set(),
    };
    let defense = DefenseEvaluator::new(index);
    loop {
        let mut next = defense.characteristic_function(&candidate);
        next.intersect_with(&candidate);
        if next == candidate {
            return candidate;
        }
        candidate = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn ids(set: &ArgumentBitSet) -> Vec<usize> {
        set.iter().collect()
    }

    #[test]
    fn test_filter_maximal() {
        let sets = vec![
            ArgumentBitSet::new(3),
            ArgumentBitSet::from_ids(3, [0]),
            ArgumentBitSet::from_ids(3, [0, 2]),
            ArgumentBitSet::from_ids(3, [1]),
        ];
        let maximal = filter_maximal(&sets);
        assert_eq!(2, maximal.len());
        assert_eq!(vec![0, 2], ids(&maximal[0]));
        assert_eq!(vec![1], ids(&maximal[1]));
    }

    #[test]
    fn test_ideal_removes_undefended() {
        // d belongs to both preferred extensions {a,d} and {b,d}, but {d} does not defend it
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[
            "a", "b", "c", "d",
        ]));
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"a").unwrap();
        af.new_attack(&"a", &"c").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        af.new_attack(&"c", &"d").unwrap();
        let index = FrameworkIndex::new(&af);
        let preferred = vec![
            ArgumentBitSet::from_ids(4, [0, 3]),
            ArgumentBitSet::from_ids(4, [1, 3]),
        ];
        assert!(ideal_set(&index, &preferred).is_empty());
    }

    #[test]
    fn test_ideal_of_nothing_is_empty() {
        let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a"]));
        let index = FrameworkIndex::new(&af);
        assert!(ideal_set(&index, &[]).is_empty());
    }
}
