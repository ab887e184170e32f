use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum TableKind {
    Customers,
    Orders,
    Feedback,
    Other(String),
}

impl TableKind {
    pub fn as_str(&self) -> &str {
        match self {
            TableKind::Customers => "customers",
            TableKind::Orders => "orders",
            TableKind::Feedback => "feedback",
            TableKind::Other(name) => name,
        }
    }
}

impl FromStr for TableKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "customers" => TableKind::Customers,
            "orders" => TableKind::Orders,
            "feedback" => TableKind::Feedback,
            other => TableKind::Other(other.to_string()),
        })
    }
}

impl From<&str> for TableKind {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<String> for TableKind {
    fn from(s: String) -> Self {
        TableKind::from(s.as_str())
    }
}

impl From<TableKind> for String {
    fn from(kind: TableKind) -> Self {
        kind.to_string()
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
