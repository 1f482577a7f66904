//! The typed product container.

use ishop_products::{Product, StockItem};

/// Ordered container of catalog products.
///
/// Insertion order is preserved and never re-sorted. Ids are not checked for
/// uniqueness; with duplicates, `find` returns the first match.
#[derive(Debug, Clone)]
pub struct Inventory<T = Product> {
    name: String,
    products: Vec<T>,
    live_count: usize,
}

impl<T: StockItem> Inventory<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
            live_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a product and return the stored entry.
    pub fn add(&mut self, product: T) -> &T {
        self.products.push(product);
        self.live_count += 1;
        &self.products[self.products.len() - 1]
    }

    /// Remove every product with this id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id().as_str() != id);
        let removed = before - self.products.len();
        self.live_count -= removed;
        removed > 0
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.products.iter().find(|p| p.id().as_str() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.products.iter_mut().find(|p| p.id().as_str() == id)
    }

    /// All products matching `predicate`, in container order.
    pub fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.products.iter().filter(|p| predicate(p)).collect()
    }

    pub fn products(&self) -> &[T] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products currently owned by this container.
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Sum of stock over all products.
    pub fn total_stock(&self) -> i64 {
        self.products.iter().map(|p| p.stock()).sum()
    }

    /// Sum of `price * stock` over all products.
    pub fn total_value(&self) -> f64 {
        self.products
            .iter()
            .map(|p| p.price() * p.stock() as f64)
            .sum()
    }

    pub(crate) fn replace_all(&mut self, products: Vec<T>) {
        self.live_count = products.len();
        self.products = products;
    }
}

impl<'a, T> IntoIterator for &'a Inventory<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
