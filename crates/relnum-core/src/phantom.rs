// ABOUTME: Phantom (inline overlay) values and the per-view phantom collection
// ABOUTME: A PhantomSet replaces the whole namespace on every update

use relnum_types::Region;

use crate::capabilities::{HostError, PhantomHost};

/// How the host lays a phantom out relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhantomLayout {
    /// Inside the line, before the anchored text
    Inline,
}

/// A non-editable markup fragment anchored to a document region
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phantom {
    pub region: Region,
    pub content: String,
    pub layout: PhantomLayout,
}

impl Phantom {
    pub fn new(region: Region, content: impl Into<String>, layout: PhantomLayout) -> Self {
        Self {
            region,
            content: content.into(),
            layout,
        }
    }
}

/// The phantoms one view currently shows under a namespace key
#[derive(Debug, Clone)]
pub struct PhantomSet {
    key: String,
    phantoms: Vec<Phantom>,
}

impl PhantomSet {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            phantoms: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn phantoms(&self) -> &[Phantom] {
        &self.phantoms
    }

    pub fn len(&self) -> usize {
        self.phantoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phantoms.is_empty()
    }

    /// Replace the collection with `phantoms`.
    ///
    /// Returns whether the host was touched; an identical collection is
    /// not sent again.
    pub fn update<H>(&mut self, host: &mut H, phantoms: Vec<Phantom>) -> Result<bool, HostError>
    where
        H: PhantomHost + ?Sized,
    {
        if phantoms == self.phantoms {
            return Ok(false);
        }

        host.update_phantoms(&self.key, &phantoms)?;
        self.phantoms = phantoms;
        Ok(true)
    }

    /// Erase every phantom in the namespace
    pub fn clear<H>(&mut self, host: &mut H) -> Result<(), HostError>
    where
        H: PhantomHost + ?Sized,
    {
        host.erase_phantoms(&self.key)?;
        self.phantoms.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relnum_types::ViewId;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingHost {
        namespaces: HashMap<String, Vec<Phantom>>,
        updates: usize,
        closed: bool,
    }

    impl PhantomHost for RecordingHost {
        fn update_phantoms(&mut self, key: &str, phantoms: &[Phantom]) -> Result<(), HostError> {
            if self.closed {
                return Err(HostError::ViewClosed(ViewId(1)));
            }
            self.updates += 1;
            self.namespaces.insert(key.to_string(), phantoms.to_vec());
            Ok(())
        }

        fn erase_phantoms(&mut self, key: &str) -> Result<(), HostError> {
            self.namespaces.remove(key);
            Ok(())
        }
    }

    fn phantom(a: usize, b: usize, text: &str) -> Phantom {
        Phantom::new(Region::new(a, b), text, PhantomLayout::Inline)
    }

    #[test]
    fn test_update_replaces_namespace() {
        let mut host = RecordingHost::default();
        let mut set = PhantomSet::new("numbers");

        set.update(&mut host, vec![phantom(0, 3, "1"), phantom(4, 7, "2")])
            .unwrap();
        set.update(&mut host, vec![phantom(0, 3, "9")]).unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(host.namespaces["numbers"], vec![phantom(0, 3, "9")]);
        assert_eq!(host.updates, 2);
    }

    #[test]
    fn test_identical_update_skips_host() {
        let mut host = RecordingHost::default();
        let mut set = PhantomSet::new("numbers");
        let phantoms = vec![phantom(0, 3, "1")];

        assert!(set.update(&mut host, phantoms.clone()).unwrap());
        assert!(!set.update(&mut host, phantoms).unwrap());
        assert_eq!(host.updates, 1);
    }

    #[test]
    fn test_failed_update_keeps_previous_phantoms() {
        let mut host = RecordingHost::default();
        let mut set = PhantomSet::new("numbers");
        set.update(&mut host, vec![phantom(0, 3, "1")]).unwrap();

        host.closed = true;
        let result = set.update(&mut host, vec![phantom(0, 3, "2")]);

        assert_eq!(result, Err(HostError::ViewClosed(ViewId(1))));
        assert_eq!(set.phantoms(), &[phantom(0, 3, "1")]);
    }

    #[test]
    fn test_clear_erases_namespace() {
        let mut host = RecordingHost::default();
        let mut set = PhantomSet::new("numbers");
        set.update(&mut host, vec![phantom(0, 3, "1")]).unwrap();

        set.clear(&mut host).unwrap();

        assert!(set.is_empty());
        assert!(!host.namespaces.contains_key("numbers"));
        assert_eq!(set.key(), "numbers");
    }
}
