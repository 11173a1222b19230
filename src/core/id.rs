use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of one orderable collection (e.g. `day-1`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(CompactString);

/// Caller-assigned item id. Unique within its collection only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(CompactString);

macro_rules! string_id {
    ($ty:ident) => {
        impl $ty {
            pub fn new(value: impl AsRef<str>) -> Self {
                Self(CompactString::new(value.as_ref()))
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0.as_str())
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(CompactString::from(value))
            }
        }
    };
}

string_id!(CollectionId);
string_id!(ItemId);
