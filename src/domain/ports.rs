use crate::domain::model::EdgeRecord;
use crate::utils::error::Result;

/// Anything that can hand over the raw edge rows of a flow table.
pub trait EdgeSource {
    fn records(&self) -> Result<Vec<EdgeRecord>>;
}

impl EdgeSource for Vec<EdgeRecord> {
    fn records(&self) -> Result<Vec<EdgeRecord>> {
        Ok(self.clone())
    }
}
