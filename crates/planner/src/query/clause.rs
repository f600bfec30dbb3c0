use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// A compiled filter clause plus the bind parameter names it references.
///
/// Only names are recorded. Binding a value to each name is the job of the
/// query layer that executes the clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledClause {
    sql: String,
    params: Vec<String>,
}

impl CompiledClause {
    pub fn new(sql: String, params: Vec<String>) -> Self {
        Self { sql, params }
    }

    pub fn as_str(&self) -> &str {
        &self.sql
    }

    pub fn into_sql(self) -> String {
        self.sql
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Parameter names in emission order, duplicates included.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Sorted, de-duplicated parameter names.
    pub fn distinct_params(&self) -> Vec<&str> {
        self.occurrences().into_keys().collect()
    }

    /// Names referenced by more than one placeholder.
    ///
    /// Parameter names derive from field paths alone, so `price > :price AND
    /// price < :price` needs two different values under one name. The
    /// compiler keeps the naming rule and reports the clash here.
    pub fn colliding_params(&self) -> Vec<&str> {
        self.occurrences()
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name)
            .collect()
    }

    fn occurrences(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for name in &self.params {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for CompiledClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl From<CompiledClause> for String {
    fn from(clause: CompiledClause) -> Self {
        clause.sql
    }
}
