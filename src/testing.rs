//! In-memory settings and document provider used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::{self, Cursor, Read, Write};
use std::rc::Rc;

use crate::domain::{AccessFlags, DocumentProvider, ResourceHandle, SettingsStore, StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemorySettings {
    pub values: HashMap<String, String>,
    pub fail_writes: bool,
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Settings("read-only settings".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

type Document = Rc<RefCell<Vec<u8>>>;

/// Documents keyed by handle. Counts successful opens and stream drops.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    documents: HashMap<ResourceHandle, Document>,
    pub opens: usize,
    pub closes: Rc<Cell<usize>>,
    pub grants: Vec<(ResourceHandle, AccessFlags)>,
}

impl MemoryProvider {
    pub fn insert(&mut self, handle: &ResourceHandle, content: &str) {
        self.documents
            .insert(handle.clone(), Rc::new(RefCell::new(content.as_bytes().to_vec())));
    }

    pub fn content(&self, handle: &ResourceHandle) -> Option<String> {
        self.documents
            .get(handle)
            .map(|doc| String::from_utf8_lossy(&doc.borrow()).into_owned())
    }

    fn document(&mut self, handle: &ResourceHandle) -> StoreResult<Document> {
        self.opens += 1;
        self.documents
            .get(handle)
            .cloned()
            .ok_or_else(|| StoreError::ResourceNotFound(handle.clone()))
    }
}

struct TrackedReader {
    inner: Cursor<Vec<u8>>,
    closes: Rc<Cell<usize>>,
}

impl Read for TrackedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Drop for TrackedReader {
    fn drop(&mut self) {
        self.closes.set(self.closes.get() + 1);
    }
}

struct TrackedWriter {
    document: Document,
    closes: Rc<Cell<usize>>,
}

impl Write for TrackedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.document.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for TrackedWriter {
    fn drop(&mut self) {
        self.closes.set(self.closes.get() + 1);
    }
}

impl DocumentProvider for MemoryProvider {
    fn open_read(&mut self, handle: &ResourceHandle) -> StoreResult<Box<dyn Read>> {
        let document = self.document(handle)?;
        let bytes = document.borrow().clone();
        Ok(Box::new(TrackedReader {
            inner: Cursor::new(bytes),
            closes: Rc::clone(&self.closes),
        }))
    }

    fn open_write(&mut self, handle: &ResourceHandle) -> StoreResult<Box<dyn Write>> {
        let document = self.document(handle)?;
        document.borrow_mut().clear();
        Ok(Box::new(TrackedWriter {
            document,
            closes: Rc::clone(&self.closes),
        }))
    }

    fn take_persistable_permission(&mut self, handle: &ResourceHandle, flags: AccessFlags) {
        self.grants.push((handle.clone(), flags));
    }
}
