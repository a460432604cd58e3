use super::{arguments::check_weight, MalformedGraphError};
use crate::graph::{Argument, ArgumentSet, LabelType};
use anyhow::{Context, Result};
use std::collections::HashSet;
use strum_macros::Display;

/// The two kinds of edges of a bipolar graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EdgeKind {
    /// The source decreases the acceptability of the target and increases its rejectability.
    #[strum(serialize = "attack")]
    Attack,
    /// The source increases the acceptability of the target.
    #[strum(serialize = "support")]
    Support,
}

/// An edge of a weighted bipolar graph.
///
/// Edges are built by [`WeightedBipolarGraph`] objects.
pub struct Edge<'a, T>
where
    T: LabelType,
{
    source: &'a Argument<T>,
    target: &'a Argument<T>,
    kind: EdgeKind,
    weight: f64,
}

impl<'a, T> Edge<'a, T>
where
    T: LabelType,
{
    /// Returns the source of the edge (the attacker or the supporter).
    ///
    /// Example
    ///
    /// ```
    /// # use bagarre::graph::{Edge, LabelType};
    /// fn describe_edge<T: LabelType>(edge: &Edge<T>) {
    ///     println!("{} {}s {} with weight {}", edge.source(), edge.kind(), edge.target(), edge.weight());
    /// }
    /// ```
    pub fn source(&self) -> &'a Argument<T> {
        self.source
    }

    /// Returns the target of the edge.
    pub fn target(&self) -> &'a Argument<T> {
        self.target
    }

    /// Returns the kind of the edge.
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Returns the weight of the edge, in `[0,1]`.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` iff both the source base weight and the edge weight are strictly positive.
    ///
    /// Only founded edges take part in the aggregation of influences.
    pub fn is_founded(&self) -> bool {
        self.source.is_founded() && self.weight > 0.0
    }
}

#[derive(Debug, Clone, Copy)]
struct EdgeData {
    from: usize,
    to: usize,
    kind: EdgeKind,
    weight: f64,
}

/// A weighted bipolar argumentation graph.
///
/// Arguments carry a base weight; attacks and supports carry a weight.
/// All weights lie in `[0,1]`.
/// Self-loops and cycles are allowed.
///
/// Once built, the graph is only read by the solvers.
#[derive(Debug, Default)]
pub struct WeightedBipolarGraph<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    edges: Vec<EdgeData>,
    edges_to: Vec<Vec<usize>>,
    edge_keys: HashSet<(usize, usize, EdgeKind)>,
    n_attacks: usize,
}

impl<T> WeightedBipolarGraph<T>
where
    T: LabelType,
{
    /// Builds a graph with no edges.
    ///
    /// The set of arguments used in the graph is provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::{ArgumentSet, WeightedBipolarGraph};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]).unwrap();
    /// let graph = WeightedBipolarGraph::new_with_argument_set(arguments);
    /// assert_eq!(3, graph.n_arguments());
    /// assert_eq!(0, graph.iter_edges().count());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let edges_to = (0..arguments.len()).map(|_| vec![]).collect();
        WeightedBipolarGraph {
            arguments,
            edges: vec![],
            edges_to,
            edge_keys: HashSet::new(),
            n_attacks: 0,
        }
    }

    /// Builds a graph from its weighted arguments and its weighted edges.
    ///
    /// An error is returned if an argument is declared twice, if an edge refers to an undeclared argument,
    /// if an edge is declared twice or if a weight is not in `[0,1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::{EdgeKind, WeightedBipolarGraph};
    /// let graph = WeightedBipolarGraph::load(
    ///     &[("a", 1.0), ("b", 0.5)],
    ///     &[("a", "b", EdgeKind::Attack, 1.0), ("b", "b", EdgeKind::Support, 0.2)],
    /// )
    /// .unwrap();
    /// assert_eq!(1, graph.n_attacks());
    /// assert_eq!(1, graph.n_supports());
    /// assert!(WeightedBipolarGraph::load(&[("a", 1.0)], &[("a", "c", EdgeKind::Attack, 1.0)]).is_err());
    /// ```
    pub fn load(arguments: &[(T, f64)], edges: &[(T, T, EdgeKind, f64)]) -> Result<Self> {
        let argument_set = ArgumentSet::new_with_weighted_labels(arguments)?;
        let mut graph = Self::new_with_argument_set(argument_set);
        for (from, to, kind, weight) in edges {
            graph.new_edge(from, to, *kind, *weight)?;
        }
        Ok(graph)
    }

    /// Adds a new attack given the labels of the attacker and the attacked argument.
    ///
    /// See [`new_edge`](Self::new_edge) for the error cases.
    pub fn new_attack(&mut self, from: &T, to: &T, weight: f64) -> Result<()> {
        self.new_edge(from, to, EdgeKind::Attack, weight)
    }

    /// Adds a new support given the labels of the supporter and the supported argument.
    ///
    /// See [`new_edge`](Self::new_edge) for the error cases.
    pub fn new_support(&mut self, from: &T, to: &T, weight: f64) -> Result<()> {
        self.new_edge(from, to, EdgeKind::Support, weight)
    }

    /// Adds a new edge given the labels of its endpoints.
    ///
    /// If the provided arguments are undefined, if the weight is not in `[0,1]`
    /// or if an edge of the same kind already links these arguments, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::{ArgumentSet, EdgeKind, WeightedBipolarGraph};
    /// let labels = vec!["a", "b"];
    /// let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
    /// let mut graph = WeightedBipolarGraph::new_with_argument_set(arguments);
    /// graph.new_edge(&"a", &"b", EdgeKind::Attack, 0.5).unwrap();
    /// assert!(graph.new_edge(&"a", &"b", EdgeKind::Attack, 0.5).is_err());
    /// graph.new_edge(&"a", &"b", EdgeKind::Support, 0.5).unwrap();
    /// assert_eq!(2, graph.iter_edges().count());
    /// ```
    pub fn new_edge(&mut self, from: &T, to: &T, kind: EdgeKind, weight: f64) -> Result<()> {
        let context = || format!("cannot add an {} from {:?} to {:?}", kind, from, to);
        let from_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let to_id = self.arguments.get_argument_index(to).with_context(context)?;
        let weight = check_weight(weight, || format!("the {} from {} to {}", kind, from, to))
            .with_context(context)?;
        if !self.edge_keys.insert((from_id, to_id, kind)) {
            return Err(MalformedGraphError::DuplicateEdge {
                kind,
                from: from.to_string(),
                to: to.to_string(),
            })
            .with_context(context);
        }
        self.edges.push(EdgeData {
            from: from_id,
            to: to_id,
            kind,
            weight,
        });
        self.edges_to[to_id].push(self.edges.len() - 1);
        if kind == EdgeKind::Attack {
            self.n_attacks += 1;
        }
        Ok(())
    }

    /// Returns `true` iff an edge of this kind already links the two arguments.
    pub fn has_edge(&self, from: &T, to: &T, kind: EdgeKind) -> bool {
        match (
            self.arguments.get_argument_index(from),
            self.arguments.get_argument_index(to),
        ) {
            (Ok(from_id), Ok(to_id)) => self.edge_keys.contains(&(from_id, to_id, kind)),
            _ => false,
        }
    }

    /// Returns the argument set of the graph.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the base weight of an argument.
    pub fn base_weight(&self, arg: &Argument<T>) -> f64 {
        self.arguments.get_argument_by_id(arg.id()).base_weight()
    }

    fn edge_view(&self, data: &EdgeData) -> Edge<'_, T> {
        Edge {
            source: self.arguments.get_argument_by_id(data.from),
            target: self.arguments.get_argument_by_id(data.to),
            kind: data.kind,
            weight: data.weight,
        }
    }

    /// Provides an iterator to the edges, in declaration order.
    pub fn iter_edges(&self) -> impl Iterator<Item = Edge<'_, T>> + '_ {
        self.edges.iter().map(|e| self.edge_view(e))
    }

    fn iter_edges_to_id(
        &self,
        target_id: usize,
        kind: EdgeKind,
    ) -> impl Iterator<Item = Edge<'_, T>> + '_ {
        self.edges_to[target_id]
            .iter()
            .map(|i| &self.edges[*i])
            .filter(move |e| e.kind == kind)
            .map(|e| self.edge_view(e))
    }

    /// Provides an iterator to the attacks targeting the given argument.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::graph::{EdgeKind, WeightedBipolarGraph};
    /// let graph = WeightedBipolarGraph::load(
    ///     &[("a", 1.0), ("b", 1.0)],
    ///     &[("a", "b", EdgeKind::Attack, 1.0), ("b", "b", EdgeKind::Attack, 0.3)],
    /// )
    /// .unwrap();
    /// let b = graph.argument_set().get_argument(&"b").unwrap();
    /// assert_eq!(2, graph.iter_attackers_of(b).count());
    /// ```
    pub fn iter_attackers_of(&self, arg: &Argument<T>) -> impl Iterator<Item = Edge<'_, T>> + '_ {
        self.iter_edges_to_id(arg.id(), EdgeKind::Attack)
    }

    /// Provides an iterator to the supports targeting the given argument.
    pub fn iter_supporters_of(
        &self,
        arg: &Argument<T>,
    ) -> impl Iterator<Item = Edge<'_, T>> + '_ {
        self.iter_edges_to_id(arg.id(), EdgeKind::Support)
    }

    /// Returns the number of arguments in this graph.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this graph.
    pub fn n_attacks(&self) -> usize {
        self.n_attacks
    }

    /// Returns the number of supports in this graph.
    pub fn n_supports(&self) -> usize {
        self.edges.len() - self.n_attacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> WeightedBipolarGraph<String> {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels).unwrap();
        WeightedBipolarGraph::new_with_argument_set(args)
    }

    #[test]
    fn test_n_args() {
        assert_eq!(3, abc().n_arguments());
    }

    #[test]
    fn test_new_attack_ok() {
        let mut graph = abc();
        graph
            .new_attack(&"a".to_string(), &"a".to_string(), 1.0)
            .unwrap();
        assert_eq!(1, graph.n_attacks());
        assert_eq!(0, graph.n_supports());
        let e = graph.iter_edges().next().unwrap();
        assert_eq!("a", e.source().label());
        assert_eq!("a", e.target().label());
        assert_eq!(EdgeKind::Attack, e.kind());
    }

    #[test]
    fn test_new_support_ok() {
        let mut graph = abc();
        graph
            .new_support(&"a".to_string(), &"b".to_string(), 0.25)
            .unwrap();
        assert_eq!(0, graph.n_attacks());
        assert_eq!(1, graph.n_supports());
        let b = graph.argument_set().get_argument(&"b".to_string()).unwrap();
        let supporters = graph.iter_supporters_of(b).collect::<Vec<_>>();
        assert_eq!(1, supporters.len());
        assert_eq!(0.25, supporters[0].weight());
        assert_eq!(0, graph.iter_attackers_of(b).count());
    }

    #[test]
    fn test_new_edge_unknown_label() {
        let mut graph = abc();
        let err = graph
            .new_attack(&"d".to_string(), &"a".to_string(), 1.0)
            .unwrap_err();
        assert_eq!(
            Some(&MalformedGraphError::UndeclaredArgument {
                label: "d".to_string()
            }),
            err.downcast_ref::<MalformedGraphError>()
        );
        assert!(graph
            .new_support(&"a".to_string(), &"d".to_string(), 1.0)
            .is_err());
    }

    #[test]
    fn test_new_edge_weight_out_of_range() {
        let mut graph = abc();
        let err = graph
            .new_attack(&"a".to_string(), &"b".to_string(), 1.5)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MalformedGraphError>(),
            Some(MalformedGraphError::WeightOutOfRange { .. })
        ));
        assert!(graph
            .new_support(&"a".to_string(), &"b".to_string(), -0.5)
            .is_err());
        assert_eq!(0, graph.iter_edges().count());
    }

    #[test]
    fn test_duplicate_edge() {
        let mut graph = abc();
        graph
            .new_attack(&"a".to_string(), &"b".to_string(), 1.0)
            .unwrap();
        assert!(graph
            .new_attack(&"a".to_string(), &"b".to_string(), 0.5)
            .is_err());
        assert!(graph.has_edge(&"a".to_string(), &"b".to_string(), EdgeKind::Attack));
        assert!(!graph.has_edge(&"a".to_string(), &"b".to_string(), EdgeKind::Support));
        assert!(!graph.has_edge(&"a".to_string(), &"z".to_string(), EdgeKind::Attack));
        assert_eq!(1, graph.n_attacks());
    }

    #[test]
    fn test_founded_edges() {
        let graph = WeightedBipolarGraph::load(
            &[("a", 0.0), ("b", 1.0), ("c", 1.0)],
            &[
                ("a", "c", EdgeKind::Attack, 1.0),
                ("b", "c", EdgeKind::Attack, 0.0),
                ("b", "a", EdgeKind::Attack, 0.1),
            ],
        )
        .unwrap();
        let founded = graph
            .iter_edges()
            .map(|e| e.is_founded())
            .collect::<Vec<bool>>();
        assert_eq!(vec![false, false, true], founded);
    }

    #[test]
    fn test_adjacency_keeps_declaration_order() {
        let graph = WeightedBipolarGraph::load(
            &[("a", 1.0), ("b", 1.0), ("c", 1.0)],
            &[
                ("c", "a", EdgeKind::Attack, 1.0),
                ("b", "a", EdgeKind::Support, 1.0),
                ("b", "a", EdgeKind::Attack, 1.0),
            ],
        )
        .unwrap();
        let a = graph.argument_set().get_argument(&"a").unwrap();
        let attackers = graph
            .iter_attackers_of(a)
            .map(|e| *e.source().label())
            .collect::<Vec<&str>>();
        assert_eq!(vec!["c", "b"], attackers);
        assert_eq!(1.0, graph.base_weight(a));
    }
}
