//! The cart store: sole authority over cart contents.
//!
//! All reads and writes of the persisted cart go through [`CartStore`]. The
//! store is pull-based: every mutator persists the new state and returns it,
//! and the caller re-renders whatever it shows (count badge, sidebar) from
//! the returned [`Cart`]. Nothing is pushed and nothing is cached.
//!
//! Failure posture per the demo's low stakes: a malformed or unreadable blob
//! loads as an empty cart, a failed write leaves that one interaction
//! in-memory only, and an unknown product id is silently ignored. None of
//! these surface to the caller.

use gizmo_depot_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::storage::{Storage, keys};

/// One row in the cart.
///
/// The serialized shape is the demo's wire format:
/// `{ "id": int, "name": string, "price": number, "image": string, "qty": int }`.
/// Name, price, and image are denormalized copies taken from the catalog at
/// add-time; in particular `price` is the price snapshot, deliberately
/// decoupled from later catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub qty: u32,
}

impl CartLine {
    /// Price of this line: snapshot × quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

/// An ordered sequence of cart lines, unique by product id.
///
/// Lines stay in insertion order across add/remove cycles; repeated adds of
/// the same product increment the existing line's quantity. A line never
/// exists with `qty == 0` -- removal is whole-line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// The lines, first-added first.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if the product is in the cart.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price snapshot × quantity over all lines.
    ///
    /// Computed on every call; totals are never cached anywhere.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities, for the navbar count badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.qty).sum()
    }
}

/// The persisted cart store.
///
/// Holds an injected storage collaborator and a read-only catalog. Each
/// operation is a full read-modify-write of the blob under [`keys::CART`],
/// which is atomic enough for the single-tab demo; two stores over one
/// backing store interleave at operation granularity, last write wins.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    catalog: Catalog,
}

impl<S: Storage> CartStore<S> {
    /// Create a store over `storage`, pricing adds from `catalog`.
    pub const fn new(storage: S, catalog: Catalog) -> Self {
        Self { storage, catalog }
    }

    /// The catalog this store prices from.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load the persisted cart.
    ///
    /// Missing, unreadable, or malformed state all load as an empty cart;
    /// this never fails to the caller.
    #[must_use]
    pub fn load(&self) -> Cart {
        match self.try_load() {
            Ok(cart) => cart,
            Err(e) => {
                warn!(error = %e, "failed to load cart, falling back to empty");
                Cart::default()
            }
        }
    }

    fn try_load(&self) -> Result<Cart, StoreError> {
        match self.storage.get(keys::CART)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Cart::default()),
        }
    }

    /// Persist `cart`, overwriting the prior blob.
    ///
    /// A write failure is logged and swallowed: the interaction degrades to
    /// in-memory only and the next load sees the previous persisted state.
    pub fn save(&self, cart: &Cart) {
        if let Err(e) = self.try_save(cart) {
            warn!(error = %e, "failed to persist cart, state is in-memory only");
        }
    }

    fn try_save(&self, cart: &Cart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(cart)?;
        self.storage.set(keys::CART, &raw)?;
        Ok(())
    }

    /// Add one unit of `id` to the cart.
    ///
    /// An existing line's quantity is incremented; otherwise a new line is
    /// appended with `qty = 1` and the current catalog price snapshotted in.
    /// An id not in the catalog is a no-op returning the unchanged cart.
    pub fn add(&self, id: ProductId) -> Cart {
        let mut cart = self.load();

        let Some(product) = self.catalog.get(id) else {
            debug!(product_id = %id, "ignoring add for unknown product");
            return cart;
        };

        if let Some(line) = cart.lines.iter_mut().find(|l| l.id == id) {
            line.qty += 1;
        } else {
            cart.lines.push(CartLine {
                id: product.id,
                name: product.name.clone(),
                price: product.price.amount(),
                image: product.image.clone(),
                qty: 1,
            });
        }

        self.save(&cart);
        cart
    }

    /// Remove the line for `id` entirely, regardless of its quantity.
    ///
    /// Removing an id that is not in the cart is a no-op.
    pub fn remove(&self, id: ProductId) -> Cart {
        let mut cart = self.load();
        cart.lines.retain(|l| l.id != id);
        self.save(&cart);
        cart
    }

    /// Persist and return an empty cart.
    pub fn clear(&self) -> Cart {
        let cart = Cart::default();
        self.save(&cart);
        cart
    }

    /// Checkout: clear the cart if it has anything in it.
    ///
    /// There is no payment and no order; this is the demo's "order placed"
    /// button. Checking out an empty cart is a no-op.
    pub fn checkout(&self) -> Cart {
        let cart = self.load();
        if cart.is_empty() {
            debug!("checkout on empty cart, nothing to do");
            return cart;
        }
        self.clear()
    }
}
