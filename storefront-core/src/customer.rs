use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::Entity;

/// A buyer. Identity only, no behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Customer {
    fn id(&self) -> &str {
        Customer::id(self)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer{{id='{}', name='{}'}}", self.id, self.name)
    }
}
