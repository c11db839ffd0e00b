//! Record table assembly
//!
//! Joins the channel declarations with the parsed data matrix into a
//! column-major table addressable by both the raw channel name and the
//! standardized identifier. Both names alias the same physical column, so
//! the data is stored once.

use std::collections::HashMap;

use crate::app::models::Channel;
use crate::{Error, Result};

use super::data_block::DataMatrix;

/// Column-major record table keyed by raw and standardized channel names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    columns: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
    height: usize,
}

impl RecordTable {
    /// Join channels and data into a table.
    ///
    /// A non-empty matrix whose width does not match the channel count is a
    /// structural failure: no partial table is produced. An empty matrix
    /// yields a valid table of empty columns.
    pub fn assemble(channels: &[Channel], matrix: DataMatrix) -> Result<Self> {
        if matrix.height() > 0 && matrix.width() != channels.len() {
            return Err(Error::data_validation(format!(
                "Data block has {} columns but the header declares {} channels",
                matrix.width(),
                channels.len()
            )));
        }

        let height = matrix.height();
        let columns = if height > 0 {
            matrix.into_columns()
        } else {
            vec![Vec::new(); channels.len()]
        };

        let mut index = HashMap::with_capacity(channels.len() * 2);
        for (position, channel) in channels.iter().enumerate() {
            index.insert(channel.raw_name.clone(), position);
            // Standardized identifiers alias the same column; on the rare
            // collision with a raw name the standardized id wins
            index.insert(channel.standardized_id.clone(), position);
        }

        Ok(Self {
            columns,
            index,
            height,
        })
    }

    /// Look up a column by raw name or standardized identifier
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.index
            .get(name)
            .map(|&position| self.columns[position].as_slice())
    }

    /// Number of physical columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of records
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the table holds any records
    pub fn is_empty(&self) -> bool {
        self.height == 0
    }
}
