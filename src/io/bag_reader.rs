use super::{InstanceReader, WarningHandler};
use crate::graph::{ArgumentSet, EdgeKind, WeightedBipolarGraph, DEFAULT_WEIGHT};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    collections::HashMap,
    io::{BufRead, BufReader, Read},
};

lazy_static! {
    static ref COMMENT_LINE_PATTERN: Regex = Regex::new(r"^\s*[%#]").unwrap();
    static ref STATEMENT_LINE_PATTERN: Regex =
        Regex::new(r"^\s*(arg|att|sup)\s*\(([^()]*)\)\s*\.?\s*$").unwrap();
    static ref LABEL_PATTERN: Regex = Regex::new(r"^[^\s,()]+$").unwrap();
}

enum Statement {
    Argument(String, f64),
    Edge(String, String, EdgeKind, f64),
}

fn read_label(field: &str) -> Result<String> {
    if LABEL_PATTERN.is_match(field) {
        Ok(field.to_string())
    } else {
        Err(anyhow!(r#"invalid argument label "{}""#, field))
    }
}

fn read_weight(field: &str) -> Result<f64> {
    field
        .parse::<f64>()
        .with_context(|| format!(r#"invalid weight "{}""#, field))
}

fn try_read_statement_line(l: &str) -> Result<Option<Statement>> {
    let captures = match STATEMENT_LINE_PATTERN.captures(l) {
        Some(c) => c,
        None => return Ok(None),
    };
    let keyword = &captures[1];
    let fields = captures[2].split(',').map(str::trim).collect::<Vec<&str>>();
    match (keyword, fields.len()) {
        ("arg", 1) => Ok(Some(Statement::Argument(
            read_label(fields[0])?,
            DEFAULT_WEIGHT,
        ))),
        ("arg", 2) => Ok(Some(Statement::Argument(
            read_label(fields[0])?,
            read_weight(fields[1])?,
        ))),
        ("att" | "sup", 2 | 3) => {
            let kind = if keyword == "att" {
                EdgeKind::Attack
            } else {
                EdgeKind::Support
            };
            let weight = match fields.get(2) {
                Some(w) => read_weight(w)?,
                None => DEFAULT_WEIGHT,
            };
            Ok(Some(Statement::Edge(
                read_label(fields[0])?,
                read_label(fields[1])?,
                kind,
                weight,
            )))
        }
        _ => Err(anyhow!(
            "wrong number of parameters ({}) in {} declaration",
            fields.len(),
            keyword
        )),
    }
}

/// A reader for the `.bag` format.
///
/// This object is used to read a [`WeightedBipolarGraph`] in which arguments are labelled by [String] objects.
///
/// # Bag format
///
/// The format is line oriented.
/// Empty lines and lines beginning with `%` or `#` are ignored.
/// Arguments are declared by `arg(label, weight).` where the weight is optional and defaults to 1;
/// attacks and supports are declared by `att(from, to, weight).` and `sup(from, to, weight).` where the weight is optional too.
/// The final dot is optional and declarations may come in any order.
///
/// The following content defines three arguments, an attack from `a` to `b` and a support from `c` to `b`.
///
/// ```text
/// arg(a, 0.6).
/// arg(b).
/// arg(c, 0.2).
/// att(a, b).
/// sup(c, b, 0.5).
/// ```
///
/// Other lines, duplicated arguments and duplicated edges raise warnings.
/// An argument declared several times keeps its first position and its last weight; for edges, the first declaration is kept.
/// Invalid labels or numbers, weights outside `[0,1]` and references to undeclared arguments are errors.
///
/// # Example
///
/// ```
/// # use bagarre::io::{BagReader, InstanceReader};
/// let graph = BagReader::default()
///     .read(&mut "arg(a, 0.6).\narg(b).\natt(a, b).\n".as_bytes())
///     .unwrap();
/// assert_eq!(2, graph.n_arguments());
/// assert_eq!(1, graph.n_attacks());
/// ```
#[derive(Default)]
pub struct BagReader {
    warning_handlers: Vec<WarningHandler>,
}

impl BagReader {
    fn warn(&self, line: usize, message: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line, message.clone()));
    }
}

impl InstanceReader<String> for BagReader {
    fn read(&self, reader: &mut dyn Read) -> Result<WeightedBipolarGraph<String>> {
        let mut arguments = vec![];
        let mut edges = vec![];
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line {}", i + 1);
            let l = line.with_context(context)?;
            if l.trim().is_empty() || COMMENT_LINE_PATTERN.is_match(&l) {
                continue;
            }
            match try_read_statement_line(&l).with_context(context)? {
                Some(Statement::Argument(label, weight)) => {
                    arguments.push((i + 1, label, weight))
                }
                Some(Statement::Edge(from, to, kind, weight)) => {
                    edges.push((i + 1, from, to, kind, weight))
                }
                None => self.warn(i + 1, format!(r#"ignoring unrecognized line "{}""#, l.trim())),
            }
        }
        let mut declarations: Vec<(usize, String, f64)> = vec![];
        let mut declaration_indices = HashMap::new();
        for (line, label, weight) in arguments {
            if let Some(&index) = declaration_indices.get(&label) {
                self.warn(line, format!("redefining argument {} with weight {}", label, weight));
                declarations[index] = (line, label, weight);
                continue;
            }
            declaration_indices.insert(label.clone(), declarations.len());
            declarations.push((line, label, weight));
        }
        let mut argument_set = ArgumentSet::default();
        for (line, label, weight) in declarations {
            argument_set
                .new_argument(label, weight)
                .with_context(|| format!("while reading line {}", line))?;
        }
        let mut graph = WeightedBipolarGraph::new_with_argument_set(argument_set);
        for (line, from, to, kind, weight) in edges {
            if graph.has_edge(&from, &to, kind) {
                self.warn(
                    line,
                    format!("ignoring duplicated {} from {} to {}", kind, from, to),
                );
                continue;
            }
            graph
                .new_edge(&from, &to, kind, weight)
                .with_context(|| format!("while reading line {}", line))?;
        }
        Ok(graph)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MalformedGraphError;
    use std::{cell::RefCell, rc::Rc};

    fn read_with_warnings(instance: &str) -> (Result<WeightedBipolarGraph<String>>, Vec<(usize, String)>) {
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let closure = Box::new(move |i, w| warnings_clone.borrow_mut().push((i, w)));
        let mut reader = BagReader::default();
        reader.add_warning_handler(closure);
        let result = reader.read(&mut instance.as_bytes());
        let w = warnings.borrow().clone();
        (result, w)
    }

    fn str_args(graph: &WeightedBipolarGraph<String>) -> Vec<String> {
        graph
            .argument_set()
            .iter()
            .map(|a| format!("{}:{}", a, a.base_weight()))
            .collect()
    }

    fn str_edges(graph: &WeightedBipolarGraph<String>) -> Vec<String> {
        graph
            .iter_edges()
            .map(|e| format!("{}({},{}):{}", e.kind(), e.source(), e.target(), e.weight()))
            .collect()
    }

    #[test]
    fn test_statement_line_pattern() {
        assert!(STATEMENT_LINE_PATTERN.is_match("arg(a)."));
        assert!(STATEMENT_LINE_PATTERN.is_match("  arg(a, 0.5)  "));
        assert!(STATEMENT_LINE_PATTERN.is_match("att (a,b)."));
        assert!(STATEMENT_LINE_PATTERN.is_match("sup(a,b,1)."));
        assert!(!STATEMENT_LINE_PATTERN.is_match("argument(a)."));
        assert!(!STATEMENT_LINE_PATTERN.is_match("arg(a).arg(b)."));
        assert!(!STATEMENT_LINE_PATTERN.is_match("arg(a"));
    }

    #[test]
    fn test_try_read_statement_line_wrong_fields() {
        [
            "arg().",
            "arg(a b).",
            "arg(a, 0.5, 1).",
            "att(a).",
            "att(a, b, 0.5, 1).",
            "arg(a, heavy).",
            "sup(a, b, ).",
        ]
        .iter()
        .for_each(|l| assert!(try_read_statement_line(l).is_err(), "{}", l));
    }

    #[test]
    fn test_read_ok() {
        let instance = "arg(a, 0.6).\narg(b).\natt(a, b).\natt(b,a,0.5)\nsup(b, a, 0.3).\n";
        let (graph, warnings) = read_with_warnings(instance);
        let graph = graph.unwrap();
        assert!(warnings.is_empty());
        assert_eq!(vec!["a:0.6", "b:1"], str_args(&graph));
        assert_eq!(
            vec!["attack(a,b):1", "attack(b,a):0.5", "support(b,a):0.3"],
            str_edges(&graph)
        );
    }

    #[test]
    fn test_read_empty() {
        let (graph, warnings) = read_with_warnings("\n% nothing here\n# nor here\n");
        let graph = graph.unwrap();
        assert!(warnings.is_empty());
        assert_eq!(0, graph.n_arguments());
        assert_eq!(0, graph.iter_edges().count());
    }

    #[test]
    fn test_read_any_order() {
        let (graph, _) = read_with_warnings("att(a,b).\narg(b).\nsup(b,a).\narg(a, 0.0).\n");
        let graph = graph.unwrap();
        assert_eq!(vec!["b:1", "a:0"], str_args(&graph));
        assert_eq!(vec!["attack(a,b):1", "support(b,a):1"], str_edges(&graph));
    }

    #[test]
    fn test_read_unknown_line() {
        let (graph, warnings) = read_with_warnings("arg(a).\nfoo(a).\narg(b).\n");
        assert_eq!(2, graph.unwrap().n_arguments());
        assert_eq!(
            vec![(2, r#"ignoring unrecognized line "foo(a).""#.to_string())],
            warnings
        );
    }

    #[test]
    fn test_read_duplicates() {
        let instance = "arg(a, 0.5).\narg(b).\narg(a, 0.7).\natt(a,b).\natt(a,b,0.2).\nsup(a,b,0.2).\n";
        let (graph, warnings) = read_with_warnings(instance);
        let graph = graph.unwrap();
        assert_eq!(vec!["a:0.7", "b:1"], str_args(&graph));
        assert_eq!(vec!["attack(a,b):1", "support(a,b):0.2"], str_edges(&graph));
        assert_eq!(
            vec![
                (3, "redefining argument a with weight 0.7".to_string()),
                (5, "ignoring duplicated attack from a to b".to_string()),
            ],
            warnings
        );
    }

    #[test]
    fn test_redefined_argument_is_checked_with_its_last_weight() {
        let (graph, _) = read_with_warnings("arg(a, 1.5).\narg(a, 0.5).\n");
        assert_eq!(vec!["a:0.5"], str_args(&graph.unwrap()));
        let (graph, _) = read_with_warnings("arg(a, 0.5).\narg(b).\narg(a, 1.5).\n");
        assert!(format!("{:#}", graph.unwrap_err()).contains("line 3"));
    }

    #[test]
    fn test_read_unknown_endpoint() {
        let (graph, _) = read_with_warnings("arg(a).\natt(a, c).\n");
        let err = graph.unwrap_err();
        assert_eq!(
            Some(&MalformedGraphError::UndeclaredArgument {
                label: "c".to_string()
            }),
            err.downcast_ref::<MalformedGraphError>()
        );
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_read_weight_out_of_range() {
        for instance in ["arg(a, 1.5).\n", "arg(a, -0.1).\n", "arg(a).\natt(a,a,2).\n", "arg(a, NaN).\n"] {
            let (graph, _) = read_with_warnings(instance);
            assert!(matches!(
                graph.unwrap_err().downcast_ref::<MalformedGraphError>(),
                Some(MalformedGraphError::WeightOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_read_invalid_number() {
        let (graph, _) = read_with_warnings("arg(a, 0,5).\n");
        assert!(graph.is_err());
        let (graph, _) = read_with_warnings("arg(a, zero).\n");
        assert!(format!("{:#}", graph.unwrap_err()).contains(r#"invalid weight "zero""#));
    }
}
