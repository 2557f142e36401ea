use log::debug;

use crate::contact::Contact;

/// Registry of every contact added, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    pub fn new() -> Self {
        ContactList::default()
    }

    pub fn add(&mut self, contact: Contact) -> &Contact {
        debug!("add contact {}", contact);
        self.contacts.push(contact);
        &self.contacts[self.contacts.len() - 1]
    }

    /// Contacts whose name contains `name`, case sensitive.
    pub fn search(&self, name: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.name().contains(name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
