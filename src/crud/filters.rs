use serde::Serialize;
use serde_json::Value;

/// How a configuration key maps onto a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Exact match on the named field
    Exact(&'static str),
    /// Case-insensitive substring match on the named field
    Contains(&'static str),
    /// Inclusive lower bound on a numeric field
    Min(&'static str),
    /// Inclusive upper bound on a numeric field
    Max(&'static str),
    /// Free-text match across several fields
    Search(&'static [&'static str]),
}

/// Configuration key to field mapping for one entity
pub type FilterSchema = &'static [(&'static str, FilterKind)];

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Equals { field: String, value: Value },
    Contains { field: String, needle: String },
    Range { field: String, min: Option<f64>, max: Option<f64> },
    AnyContains { fields: Vec<String>, needle: String },
}

impl Predicate {
    fn matches(&self, record: &Value) -> bool {
        match self {
            Predicate::Equals { field, value } => record
                .get(field)
                .map(|actual| values_equal(actual, value))
                .unwrap_or(false),
            Predicate::Contains { field, needle } => record
                .get(field)
                .map(|actual| contains_text(actual, &needle.to_lowercase()))
                .unwrap_or(false),
            Predicate::Range { field, min, max } => {
                match record.get(field).and_then(as_number) {
                    Some(n) => min.map_or(true, |m| n >= m) && max.map_or(true, |m| n <= m),
                    None => false,
                }
            }
            Predicate::AnyContains { fields, needle } => {
                let needle = needle.to_lowercase();
                fields.iter().any(|field| {
                    record
                        .get(field)
                        .map(|actual| contains_text(actual, &needle))
                        .unwrap_or(false)
                })
            }
        }
    }
}

/// Predicates applied to a collection, plus an optional head truncation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    predicates: Vec<Predicate>,
    limit: Option<usize>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.predicates.push(Predicate::Equals {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn contains(mut self, field: &str, needle: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Contains {
            field: field.to_string(),
            needle: needle.into(),
        });
        self
    }

    pub fn range(mut self, field: &str, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_some() || max.is_some() {
            self.predicates.push(Predicate::Range {
                field: field.to_string(),
                min,
                max,
            });
        }
        self
    }

    pub fn search(mut self, fields: &[&str], needle: impl Into<String>) -> Self {
        self.predicates.push(Predicate::AnyContains {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            needle: needle.into(),
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn max_results(&self) -> Option<usize> {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty() && self.limit.is_none()
    }

    /// Build filters from a string configuration map.
    ///
    /// Keys absent from `schema` are ignored, as are empty values and numeric
    /// bounds that do not parse. `limit` is understood for every entity.
    pub fn from_params<'a, I>(params: I, schema: FilterSchema) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filters = Filters::new();

        for (key, raw) in params {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }

            if key == "limit" {
                if let Ok(limit) = raw.parse() {
                    filters = filters.limit(limit);
                }
                continue;
            }

            let Some((_, kind)) = schema.iter().find(|(name, _)| *name == key) else {
                continue;
            };

            filters = match *kind {
                FilterKind::Exact(field) => filters.equals(field, raw),
                FilterKind::Contains(field) => filters.contains(field, raw),
                FilterKind::Min(field) => match raw.parse::<f64>() {
                    Ok(min) => filters.range(field, Some(min), None),
                    Err(_) => filters,
                },
                FilterKind::Max(field) => match raw.parse::<f64>() {
                    Ok(max) => filters.range(field, None, Some(max)),
                    Err(_) => filters,
                },
                FilterKind::Search(fields) => filters.search(fields, raw),
            };
        }

        filters
    }

    pub fn matches(&self, record: &Value) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Keep the records every predicate accepts, then truncate to `limit`
    pub fn apply<T: Serialize>(&self, records: Vec<T>) -> Vec<T> {
        if self.is_empty() {
            return records;
        }

        let mut kept: Vec<T> = records
            .into_iter()
            .filter(|record| {
                serde_json::to_value(record)
                    .map(|value| self.matches(&value))
                    .unwrap_or(false)
            })
            .collect();

        if let Some(limit) = self.limit {
            kept.truncate(limit);
        }
        kept
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn values_equal(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(_), Value::Number(_)) => as_number(actual) == as_number(expected),
        (Value::Number(_), Value::String(_)) => {
            as_number(expected).is_some() && as_number(actual) == as_number(expected)
        }
        (Value::Bool(a), Value::String(b)) => b.parse::<bool>().map_or(false, |b| *a == b),
        _ => actual == expected,
    }
}

fn contains_text(actual: &Value, needle: &str) -> bool {
    match actual {
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::Array(items) => items.iter().any(|item| contains_text(item, needle)),
        Value::Number(n) => n.to_string().contains(needle),
        _ => false,
    }
}
