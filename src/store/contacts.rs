use super::{CONTACTS_KEY, RecordStore, today};
use crate::errors::AppResult;
use crate::models::activity::kind;
use crate::models::{Contact, ContactUpdate, NewContact, seed};

impl RecordStore {
    /// All contacts, newest first.
    pub fn list_contacts(&self) -> Vec<Contact> {
        self.load(CONTACTS_KEY, seed::contacts)
    }

    pub fn get_contact(&self, id: &str) -> Option<Contact> {
        self.list_contacts().into_iter().find(|c| c.id == id)
    }

    /// Contacts whose names, email or company contain `query`.
    pub fn search_contacts(&self, query: &str) -> Vec<Contact> {
        self.list_contacts()
            .into_iter()
            .filter(|c| c.matches(query))
            .collect()
    }

    /// Validate, stamp and prepend a new contact. A `contact_created`
    /// activity is logged once the contact is stored.
    pub fn create_contact(&mut self, fields: NewContact) -> AppResult<Contact> {
        fields.validate()?;

        let loaded = self.load_for_update(CONTACTS_KEY, seed::contacts);
        let mut contacts = loaded.value;
        let id = self
            .ids
            .next_unused("", |id| contacts.iter().any(|c| c.id == id));
        let contact = fields.into_contact(id, today());

        contacts.insert(0, contact.clone());
        if self.save_loaded(CONTACTS_KEY, &contacts, loaded.writable) {
            self.note(
                "contact_add",
                &contact.id,
                &format!("Created contact {}", contact.full_name()),
            );
            self.record_activity(
                kind::CONTACT_CREATED,
                format!("New contact added: {}", contact.full_name()),
            );
        }

        Ok(contact)
    }

    /// Merge `changes` into the contact with `id`. `Ok(None)` when absent.
    pub fn update_contact(
        &mut self,
        id: &str,
        changes: ContactUpdate,
    ) -> AppResult<Option<Contact>> {
        changes.validate()?;

        let loaded = self.load_for_update(CONTACTS_KEY, seed::contacts);
        let mut contacts = loaded.value;
        let Some(contact) = contacts.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        changes.apply(contact);
        let updated = contact.clone();

        if self.save_loaded(CONTACTS_KEY, &contacts, loaded.writable) {
            self.note(
                "contact_edit",
                id,
                &format!("Updated contact {}", updated.full_name()),
            );
        }

        Ok(Some(updated))
    }

    /// Remove the contact with `id`; false if there was none.
    pub fn delete_contact(&mut self, id: &str) -> bool {
        let loaded = self.load_for_update(CONTACTS_KEY, seed::contacts);
        let before = loaded.value.len();
        let remaining: Vec<Contact> = loaded.value.into_iter().filter(|c| c.id != id).collect();

        if remaining.len() == before {
            return false;
        }

        if self.save_loaded(CONTACTS_KEY, &remaining, loaded.writable) {
            self.note("contact_del", id, "Deleted contact");
        }
        true
    }
}
