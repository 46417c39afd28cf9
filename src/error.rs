use thiserror::Error;

use crate::NodeName;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error("Node {0} does not exist in the graph")]
    InvalidReference(NodeName),
}
