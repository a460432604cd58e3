use super::{Aggregation, CardinalityAggregation, HybridAggregation, MaxAggregation};
use anyhow::{anyhow, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};

/// The bilateral gradual semantics handled by the solver.
///
/// The semantics only differ by the way they aggregate the strengths of attackers and supporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, IntoStaticStr)]
pub enum Semantics {
    /// The max-based semantics
    ARM,
    /// The cardinality-based semantics
    ARC,
    /// The hybrid-based semantics
    ARH,
}

impl Semantics {
    /// Returns a short textual description of the semantics.
    pub fn description(&self) -> &'static str {
        match self {
            Semantics::ARM => "max-based: the strongest attacker (or supporter) dominates",
            Semantics::ARC => "cardinality-based: the number of attackers (or supporters) prevails",
            Semantics::ARH => "hybrid-based: both the number and the strengths matter",
        }
    }

    /// Builds the aggregation function of this semantics for a graph with the given number of arguments.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::semantics::{Semantics, Strength};
    /// let aggregation = Semantics::ARH.aggregation(2);
    /// assert_eq!(0.5, aggregation.combine(&[Strength::new(0.0, 1.0)]));
    /// ```
    pub fn aggregation(&self, n_arguments: usize) -> Box<dyn Aggregation> {
        match self {
            Semantics::ARM => Box::new(MaxAggregation),
            Semantics::ARC => Box::new(CardinalityAggregation::new(n_arguments)),
            Semantics::ARH => Box::new(HybridAggregation),
        }
    }

    /// Returns the lower case name of the semantics, as used in output file names.
    pub fn to_lowercase_str(&self) -> String {
        self.as_ref().to_ascii_lowercase()
    }

    /// Iterates over the names of the available semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use bagarre::semantics::Semantics;
    /// assert_eq!(vec!["ARM", "ARC", "ARH"], Semantics::iter_semantics_strings().collect::<Vec<_>>());
    /// ```
    pub fn iter_semantics_strings() -> impl Iterator<Item = &'static str> {
        Semantics::iter().map(<&'static str>::from)
    }
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "arm" | "max" => Ok(Semantics::ARM),
            "arc" | "card" | "cardinality" => Ok(Semantics::ARC),
            "arh" | "hybrid" => Ok(Semantics::ARH),
            _ => Err(anyhow!(r#"undefined semantics "{}""#, value)),
        }
    }
}

/// Reads a comma separated list of semantics.
///
/// Empty items are ignored; duplicates are only kept once.
pub fn read_semantics_list(list: &str) -> Result<Vec<Semantics>> {
    let mut result: Vec<Semantics> = vec![];
    for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let semantics = Semantics::try_from(item)?;
        if !result.contains(&semantics) {
            result.push(semantics);
        }
    }
    if result.is_empty() {
        return Err(anyhow!("no semantics in \"{}\"", list));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_semantics_ok() {
        assert_eq!(Semantics::ARM, Semantics::try_from("ARM").unwrap());
        assert_eq!(Semantics::ARC, Semantics::try_from("arc").unwrap());
        assert_eq!(Semantics::ARH, Semantics::try_from("Hybrid").unwrap());
        assert_eq!(Semantics::ARM, Semantics::try_from("max").unwrap());
    }

    #[test]
    fn test_read_semantics_unknown() {
        assert!(Semantics::try_from("foo").is_err());
        assert!(Semantics::try_from("").is_err());
    }

    #[test]
    fn test_lowercase() {
        assert_eq!("arm", Semantics::ARM.to_lowercase_str());
        assert_eq!("arh", Semantics::ARH.to_lowercase_str());
    }

    #[test]
    fn test_read_semantics_list() {
        assert_eq!(
            vec![Semantics::ARH, Semantics::ARM],
            read_semantics_list("ARH, arm,ARH,").unwrap()
        );
        assert!(read_semantics_list(" , ").is_err());
        assert!(read_semantics_list("ARM,foo").is_err());
    }

    #[test]
    fn test_names_roundtrip() {
        for s in Semantics::iter_semantics_strings() {
            assert_eq!(s, Semantics::try_from(s).unwrap().as_ref());
        }
    }
}
