use super::MalformedGraphError;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The weight given to arguments and edges when the input does not provide one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// Checks that a weight lies in `[0,1]`.
///
/// The `element` closure describes the weighted element for the error message; it is only called on failure.
pub(crate) fn check_weight<F>(weight: f64, element: F) -> Result<f64, MalformedGraphError>
where
    F: FnOnce() -> String,
{
    if (0.0..=1.0).contains(&weight) {
        Ok(weight)
    } else {
        Err(MalformedGraphError::WeightOutOfRange {
            element: element(),
            weight,
        })
    }
}

/// Handles a single argument.
///
/// Each argument has a label, a base weight and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
///
/// Arguments are built by [`ArgumentSet`] objects.
///
/// [`LabelType`]: trait.LabelType.html
/// [`ArgumentSet`]: struct.ArgumentSet.html
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
    base_weight: f64,
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
    /// # use bagarre::graph::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    ///
    /// Ids are given in the order arguments are declared, starting at zero.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the base weight of the argument, in `[0,1]`.
    ///
    /// Example
    ///
    /// ```
    /// # use bagarre::graph::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument {} has a base weight of {}", a.label(), a.base_weight());
    /// }
    /// ```
    pub fn base_weight(&self) -> f64 {
        self.base_weight
    }

    /// Returns `true` iff the base weight of this argument is strictly positive.
    pub fn is_founded(&self) -> bool {
        self.base_weight > 0.0
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

/// Handles the set of arguments of a weighted bipolar argumentation graph.
///
/// Arguments keep the order in which they were declared.
#[derive(Debug, Default)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument gets the default weight (1.0) and an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `labels` - the argument labels
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Result<Self> {
        let weighted = labels
            .iter()
            .map(|l| (l.clone(), DEFAULT_WEIGHT))
            .collect::<Vec<(T, f64)>>();
        Self::new_with_weighted_labels(&weighted)
    }

    /// Builds a new argument set given the labels and the base weights of the arguments.
    ///
    /// An error is returned if a label appears multiple times or if a weight is not in `[0,1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_weighted_labels(&[("a", 0.5), ("b", 1.0)]).unwrap();
    /// assert_eq!(0.5, arguments.get_argument(&"a").unwrap().base_weight());
    /// assert!(ArgumentSet::new_with_weighted_labels(&[("a", 1.5)]).is_err());
    /// ```
    pub fn new_with_weighted_labels(weighted_labels: &[(T, f64)]) -> Result<Self> {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(weighted_labels.len()),
            label_to_id: HashMap::with_capacity(weighted_labels.len()),
        };
        for (label, weight) in weighted_labels {
            argument_set.new_argument(label.clone(), *weight)?;
        }
        Ok(argument_set)
    }

    /// Adds a new argument to this set.
    ///
    /// The id of the new argument is the previous maximal id plus one.
    /// If an argument with the same label is already defined, or if the weight is not in `[0,1]`, an error is returned.
    pub fn new_argument(&mut self, label: T, base_weight: f64) -> Result<()> {
        if self.label_to_id.contains_key(&label) {
            return Err(MalformedGraphError::DuplicateArgument {
                label: label.to_string(),
            }
            .into());
        }
        let base_weight = check_weight(base_weight, || format!("argument {}", label))?;
        self.label_to_id.insert(label.clone(), self.arguments.len());
        self.arguments.push(Argument {
            id: self.arguments.len(),
            label,
            base_weight,
        });
        Ok(())
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns `true` iff an argument has this label.
    pub fn contains(&self, label: &T) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// If no such label exists, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
    /// assert_eq!(0, arguments.get_argument_index(&labels[0]).unwrap());
    /// assert_eq!(2, arguments.get_argument_index(&labels[2]).unwrap());
    /// assert!(arguments.get_argument_index(&"d").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id.get(label).copied().ok_or_else(|| {
            MalformedGraphError::UndeclaredArgument {
                label: label.to_string(),
            }
            .into()
        })
    }

    /// Returns the argument associated to an argument label.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.label_to_id
            .get(label)
            .map(|i| &self.arguments[*i])
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns an iterator to the arguments, in declaration order.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
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
        let args = ArgumentSet::new_with_labels(&arg_labels).unwrap();
        assert_eq!(3, args.arguments.len());
        assert_eq!(3, args.label_to_id.len());
        assert_eq!(3, args.len());
        assert!(!args.is_empty());
        for (i, a) in args.arguments.iter().enumerate() {
            assert_eq!(i, a.id);
            assert_eq!(arg_labels[i], a.label);
            assert_eq!(DEFAULT_WEIGHT, a.base_weight);
        }
    }

    #[test]
    fn test_new_with_empty_labels() {
        let args = ArgumentSet::new_with_labels(&[] as &[String]).unwrap();
        assert_eq!(0, args.len());
        assert!(args.is_empty());
    }

    #[test]
    fn test_new_repeated_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let err = ArgumentSet::new_with_labels(&arg_labels).unwrap_err();
        assert_eq!(
            Some(&MalformedGraphError::DuplicateArgument {
                label: "a".to_string()
            }),
            err.downcast_ref::<MalformedGraphError>()
        );
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let args = ArgumentSet::new_with_weighted_labels(&[("z", 0.1), ("a", 0.2), ("m", 0.3)])
            .unwrap();
        let labels = args.iter().map(|a| *a.label()).collect::<Vec<&str>>();
        assert_eq!(vec!["z", "a", "m"], labels);
    }

    #[test]
    fn test_weight_bounds() {
        assert!(ArgumentSet::new_with_weighted_labels(&[("a", 0.0), ("b", 1.0)]).is_ok());
        assert!(ArgumentSet::new_with_weighted_labels(&[("a", -0.1)]).is_err());
        assert!(ArgumentSet::new_with_weighted_labels(&[("a", 1.1)]).is_err());
        assert!(ArgumentSet::new_with_weighted_labels(&[("a", f64::NAN)]).is_err());
    }

    #[test]
    fn test_founded() {
        let args = ArgumentSet::new_with_weighted_labels(&[("a", 0.0), ("b", 0.4)]).unwrap();
        assert!(!args.get_argument(&"a").unwrap().is_founded());
        assert!(args.get_argument(&"b").unwrap().is_founded());
    }

    #[test]
    fn test_get_argument() {
        let labels = vec!["a", "b", "c"];
        let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
        assert!(arguments.get_argument(&"a").is_ok());
        assert!(arguments.get_argument(&"d").is_err());
        assert!(arguments.contains(&"c"));
        assert!(!arguments.contains(&"d"));
    }

    #[test]
    fn test_unknown_index_is_malformed() {
        let arguments = ArgumentSet::new_with_labels(&["a"]).unwrap();
        let err = arguments.get_argument_index(&"b").unwrap_err();
        assert!(err.downcast_ref::<MalformedGraphError>().is_some());
    }

    #[test]
    fn test_add_arguments() {
        let arg_labels = vec!["a".to_string(), "b".to_string()];
        let mut args = ArgumentSet::new_with_labels(&arg_labels).unwrap();
        args.new_argument("c".to_string(), 0.5).unwrap();
        assert!(args.new_argument("c".to_string(), 0.5).is_err());
        assert_eq!(3, args.arguments.len());
        assert_eq!(2, args.get_argument(&"c".to_string()).unwrap().id())
    }
}
