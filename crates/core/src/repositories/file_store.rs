//! File-backed contact store.
//!
//! Each contact is a YAML document in its own sharded directory:
//!
//! ```text
//! <contact_data_dir>/
//!   <s1>/
//!     <s2>/
//!       <id>/
//!         contact.yaml
//! ```
//!
//! where `s1` and `s2` are the first four hex characters of the id. Writes go through a
//! temporary file in the same directory and are renamed into place.

use super::ContactStore;
use crate::constants::CONTACT_FILENAME;
use crate::contact::Contact;
use crate::error::{ContactError, ContactResult};
use contacts_uuid::ContactId;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct FileContactStore {
    root_directory: PathBuf,
}

impl FileContactStore {
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
        }
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    fn record_path(&self, id: &ContactId) -> PathBuf {
        id.sharded_dir(&self.root_directory).join(CONTACT_FILENAME)
    }
}

impl ContactStore for FileContactStore {
    fn get(&self, id: &ContactId) -> ContactResult<Option<Contact>> {
        let path = self.record_path(id);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ContactError::FileRead(e)),
        };

        serde_yaml::from_str(&contents)
            .map(Some)
            .map_err(ContactError::YamlDeserialization)
    }

    /// Walks the shard directories. Records that cannot be read or parsed are logged and
    /// skipped so one corrupt file does not hide the rest of the directory.
    fn list_all(&self) -> ContactResult<Vec<Contact>> {
        let mut contacts = Vec::new();

        let s1_iter = match fs::read_dir(&self.root_directory) {
            Ok(it) => it,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(contacts),
            Err(e) => return Err(ContactError::FileRead(e)),
        };

        for s1 in s1_iter.flatten() {
            let s1_path = s1.path();
            if !s1_path.is_dir() {
                continue;
            }

            let Ok(s2_iter) = fs::read_dir(&s1_path) else {
                continue;
            };

            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }

                let Ok(id_iter) = fs::read_dir(&s2_path) else {
                    continue;
                };

                for id_ent in id_iter.flatten() {
                    let record_path = id_ent.path().join(CONTACT_FILENAME);
                    if !record_path.is_file() {
                        continue;
                    }

                    let contents = match fs::read_to_string(&record_path) {
                        Ok(contents) => contents,
                        Err(e) => {
                            tracing::warn!(
                                "failed to read contact record: {} - {}",
                                record_path.display(),
                                e
                            );
                            continue;
                        }
                    };

                    match serde_yaml::from_str::<Contact>(&contents) {
                        Ok(contact) => contacts.push(contact),
                        Err(e) => {
                            tracing::warn!(
                                "failed to parse contact record: {} - {}",
                                record_path.display(),
                                e
                            );
                        }
                    }
                }
            }
        }

        Ok(contacts)
    }

    fn upsert(&self, contact: &Contact) -> ContactResult<()> {
        let dir = contact.id.sharded_dir(&self.root_directory);
        fs::create_dir_all(&dir).map_err(ContactError::StorageDirCreation)?;

        let yaml = serde_yaml::to_string(contact).map_err(ContactError::YamlSerialization)?;

        let mut temp = tempfile::Builder::new()
            .prefix(".contact-")
            .suffix(".tmp")
            .tempfile_in(&dir)
            .map_err(ContactError::FileWrite)?;
        temp.write_all(yaml.as_bytes())
            .map_err(ContactError::FileWrite)?;
        temp.persist(dir.join(CONTACT_FILENAME))
            .map_err(|e| ContactError::FileWrite(e.error))?;

        tracing::debug!(contact_id = %contact.id, path = %dir.display(), "wrote contact record");
        Ok(())
    }

    fn delete(&self, id: &ContactId) -> ContactResult<bool> {
        let dir = id.sharded_dir(&self.root_directory);
        match fs::remove_dir_all(&dir) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ContactError::FileRemove(e)),
        }
    }
}
