use std::borrow::Borrow;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Name that uniquely identifies a node of the graph.
/// Names are case-normalized: surrounding whitespace is trimmed and letters are upper-cased,
/// so that "a", " A" and "A" all refer to the same node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeName(String);

impl NodeName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NodeName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&String> for NodeName {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<&NodeName> for NodeName {
    fn from(name: &NodeName) -> Self {
        name.clone()
    }
}

impl Borrow<str> for NodeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative weight of a directed edge, and the total distance of a path.
///
/// Weights are unsigned so that Dijkstra's precondition (no negative edges) holds by
/// construction. A single edge weighs at most `u32::MAX` while totals are kept in 64 bits,
/// so summing the edges of any path held in memory cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Weight(u64);

impl Weight {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn new(value: u32) -> Self {
        Self(value as u64)
    }

    pub(crate) const fn from_total(total: u64) -> Self {
        Self(total)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(total) => Some(Self(total)),
            None => None,
        }
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Weight> for i64 {
    fn from(weight: Weight) -> Self {
        // exceeding i64::MAX takes more than 2^31 edges of maximum weight
        i64::try_from(weight.0).unwrap_or(i64::MAX)
    }
}

impl Add for Weight {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, w| acc + w)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
