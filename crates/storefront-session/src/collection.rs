use tokio::sync::watch;

use storefront_core::Product;

/// An observable, id-deduplicated product list.
///
/// Mutations report whether they changed anything, and only changes wake
/// subscribers: adding an id that is already present, removing an absent
/// id, or clearing an empty collection all leave the watch channel silent.
#[derive(Debug)]
pub struct SessionCollection {
    name: &'static str,
    items: watch::Sender<Vec<Product>>,
}

impl SessionCollection {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        let (items, _) = watch::channel(Vec::new());
        Self { name, items }
    }

    /// Appends `product` unless an item with the same id is already
    /// present. Returns whether the collection changed.
    pub fn add(&self, product: Product) -> bool {
        let id = product.id;
        let changed = self.items.send_if_modified(|items| {
            if items.iter().any(|p| p.id == id) {
                return false;
            }
            items.push(product);
            true
        });
        if changed {
            tracing::debug!(collection = self.name, id, "product added");
        }
        changed
    }

    /// Removes the item with `id`, if present. Returns whether the
    /// collection changed.
    pub fn remove(&self, id: u32) -> bool {
        let changed = self.items.send_if_modified(|items| {
            let before = items.len();
            items.retain(|p| p.id != id);
            items.len() != before
        });
        if changed {
            tracing::debug!(collection = self.name, id, "product removed");
        }
        changed
    }

    /// Drops every item. Returns whether the collection changed.
    pub fn clear(&self) -> bool {
        let changed = self.items.send_if_modified(|items| {
            if items.is_empty() {
                return false;
            }
            items.clear();
            true
        });
        if changed {
            tracing::debug!(collection = self.name, "collection cleared");
        }
        changed
    }

    /// Snapshot of the contents in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<Product> {
        self.items.borrow().clone()
    }

    /// Subscribes to the collection. The receiver can read the current
    /// contents immediately and wakes whenever a mutation changes them.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.items.subscribe()
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.items.borrow().iter().any(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}
