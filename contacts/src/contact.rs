use std::fmt;

use crate::error::{ContactError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactKind {
    Plain,
    /// A contact whose phone is known.
    Friend { phone: String },
    /// A contact that orders can be sent to.
    Supplier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    email: String,
    kind: ContactKind,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            email: email.into(),
            kind: ContactKind::Plain,
        }
    }

    pub fn friend(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Contact {
            kind: ContactKind::Friend {
                phone: phone.into(),
            },
            ..Contact::new(name, email)
        }
    }

    pub fn supplier(name: impl Into<String>, email: impl Into<String>) -> Self {
        Contact {
            kind: ContactKind::Supplier,
            ..Contact::new(name, email)
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn kind(&self) -> &ContactKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ContactKind::Plain => "Contact",
            ContactKind::Friend { .. } => "Friend",
            ContactKind::Supplier => "Supplier",
        }
    }

    /// Messages describing how this contact is reached, email first.
    pub fn contact_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Contacting {} via email: {}",
            self.name, self.email
        )];
        if let ContactKind::Friend { phone } = &self.kind {
            lines.push(format!(
                "Alternative: Contacting {} via phone: {}",
                self.name, phone
            ));
        }
        lines
    }

    /// Only suppliers take orders.
    pub fn order(&self, order: &str) -> Result<String> {
        match self.kind {
            ContactKind::Supplier => Ok(format!(
                "If this were a real system we would send {} order to {}",
                order, self.name
            )),
            _ => Err(ContactError::NotASupplier {
                kind: self.kind_name(),
                name: self.name.clone(),
            }),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}, {:?})", self.kind_name(), self.name, self.email)
    }
}
