use super::ArgumentBitSet;
use crate::aa::{AAFramework, Argument, LabelType};

/// The label given to an argument by the grounded labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// The argument is accepted.
    In,
    /// The argument is attacked by an accepted argument.
    Out,
    /// The argument is neither accepted nor rejected.
    Undec,
}

/// The grounded labelling of a framework.
///
/// Arguments labelled [`Label::In`] form the grounded extension.
pub struct GroundedLabelling {
    labels: Vec<Label>,
    in_order: Vec<usize>,
}

impl GroundedLabelling {
    /// Returns the label of the argument with the given id.
    pub fn label_of(&self, id: usize) -> Label {
        self.labels[id]
    }

    /// Returns the labels, indexed by argument ids.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the ids of the arguments labelled `In`, in the order they were labelled.
    pub fn in_ids(&self) -> &[usize] {
        &self.in_order
    }

    /// Returns the grounded extension as a set.
    pub fn in_set(&self) -> ArgumentBitSet {
        ArgumentBitSet::from_ids(self.labels.len(), self.in_order.iter().copied())
    }

    /// Returns the grounded extension, sorted by argument ids.
    pub fn extension<'a, T>(&self, af: &'a AAFramework<T>) -> Vec<&'a Argument<T>>
    where
        T: LabelType,
    {
        self.in_set().to_arguments(af)
    }
}

/// Computes the grounded labelling of an AF.
///
/// Unattacked arguments are labelled `In`.
/// Each argument attacked by an `In` argument becomes `Out`,
/// and each argument whose attackers are all `Out` becomes `In`.
/// The arguments that remain unlabelled at the fixpoint are `Undec`.
///
/// A self-attacking argument can never be labelled `In`, since it would need to be `Out` first.
/// It is `Out` if an `In` argument attacks it, and `Undec` otherwise.
///
/// The computation is linear in the size of the framework.
pub fn grounded_labelling<T>(af: &AAFramework<T>) -> GroundedLabelling
where
    T: LabelType,
{
    let mut labels = vec![Label::Undec; af.n_arguments()];
    let mut in_order = vec![];
    let mut n_attackers = (0..af.n_arguments())
        .map(|i| {
            let n = af.iter_attacks_to_id(i).count();
            if n == 0 {
                labels[i] = Label::In;
                in_order.push(i);
            }
            n
        })
        .collect::<Vec<usize>>();
    let mut n_processed_args = 0;
    while n_processed_args < in_order.len() {
        let id = in_order[n_processed_args];
        let defeated_ids = af
            .iter_attacks_from_id(id)
            .map(|att| att.attacked().id())
            .collect::<Vec<usize>>();
        for defeated in defeated_ids {
            if labels[defeated] == Label::Out {
                continue;
            }
            labels[defeated] = Label::Out;
            af.iter_attacks_from_id(defeated).for_each(|att| {
                let attacked = att.attacked().id();
                n_attackers[attacked] -= 1;
                if n_attackers[attacked] == 0 && labels[attacked] == Label::Undec {
                    labels[attacked] = Label::In;
                    in_order.push(attacked);
                }
            });
        }
        n_processed_args += 1;
    }
    GroundedLabelling { labels, in_order }
}

/// Computes the grounded extension of an AF.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> Vec<&Argument<T>>
where
    T: LabelType,
{
    grounded_labelling(af).extension(af)
}
