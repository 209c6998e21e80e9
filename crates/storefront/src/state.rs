//! The `Storefront` aggregate: every store plus the auth service, wired to
//! the lifecycle contract.

use std::sync::Arc;

use chrono::Utc;

use clementine_core::{Order, Product, ToastLevel};

use crate::config::{StoreBackend, StorefrontConfig};
use crate::error::Result;
use crate::services::auth::{Account, AuthService};
use crate::services::checkout::{self, CheckoutForm};
use crate::services::dashboard::{self, Dashboard};
use crate::storage::{FileStore, MemoryStore, StoragePort, UserStorage};
use crate::stores::{
    CartStore, NotificationStore, OrderStore, ProductStore, ProfileStore, ToastStore,
    WishlistStore,
};

/// The storefront core: all domain stores, the auth service, and the
/// lifecycle glue between them.
///
/// On every auth transition (login, register, logout, initial guest load)
/// [`Storefront::handle_auth_change`] resolves the active user id and calls
/// each user-scoped store's initialization entry point exactly once. The UI
/// layer consumes the stores directly and calls the service methods here.
pub struct Storefront {
    config: StorefrontConfig,
    auth: AuthService,
    pub products: ProductStore,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub orders: OrderStore,
    pub notifications: NotificationStore,
    pub profile: ProfileStore,
    pub toasts: ToastStore,
}

impl Storefront {
    /// Build a storefront with the backend named by `config`, initialized
    /// for the guest user.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Storage` if the file backend cannot be
    /// opened.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let port: Arc<dyn StoragePort> = match &config.backend {
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
            StoreBackend::File(dir) => Arc::new(FileStore::open(dir.clone())?),
        };
        Ok(Self::with_port(config, port))
    }

    /// Build a storefront over an explicit storage backend, initialized for
    /// the guest user. Tests use this to share one backend across several
    /// instances.
    #[must_use]
    pub fn with_port(config: StorefrontConfig, port: Arc<dyn StoragePort>) -> Self {
        let storage = UserStorage::new(port);
        let mut storefront = Self {
            config,
            auth: AuthService::new(storage.clone()),
            products: ProductStore::new(),
            cart: CartStore::new(storage.clone()),
            wishlist: WishlistStore::new(storage.clone()),
            orders: OrderStore::new(storage.clone()),
            notifications: NotificationStore::new(storage.clone()),
            profile: ProfileStore::new(storage),
            toasts: ToastStore::new(),
        };
        storefront.handle_auth_change();
        storefront
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The auth service (read access; mutations go through
    /// [`Storefront::login`] / [`Storefront::register`] /
    /// [`Storefront::logout`] so the lifecycle runs).
    #[must_use]
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Re-initialize every user-scoped store for the currently resolved
    /// user id.
    ///
    /// Idempotent per id: stores already initialized for the resolved id
    /// keep their in-memory state untouched.
    pub fn handle_auth_change(&mut self) {
        let user_id = self.auth.resolved_user_id();
        let name = self.auth.display_name();
        tracing::debug!(user = %user_id, "auth state change");

        self.cart.initialize_user_data(&user_id);
        self.wishlist.initialize_user_data(&user_id);
        self.orders.initialize_user_data(&user_id, &name);
        self.notifications.initialize_user_data(&user_id);
        self.profile.initialize_user_data(&user_id, &name);
    }

    /// Register a new account and switch every store to it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` on validation failure or duplicate email; no
    /// store state changes in that case.
    pub fn register(&mut self, email: &str, password: &str, name: &str) -> Result<()> {
        let display = self.auth.register(email, password, name)?.name.clone();
        self.handle_auth_change();
        self.toasts
            .push(ToastLevel::Success, format!("Welcome, {display}!"));
        Ok(())
    }

    /// Log in and switch every store to the account's namespace.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` for unknown email or wrong password; no store
    /// state changes in that case.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let display = self.auth.login(email, password)?.name.clone();
        self.handle_auth_change();
        self.toasts
            .push(ToastLevel::Success, format!("Welcome back, {display}!"));
        Ok(())
    }

    /// Log out and switch every store to the guest namespace.
    pub fn logout(&mut self) {
        self.auth.logout();
        self.handle_auth_change();
        self.toasts.push(ToastLevel::Info, "Signed out");
    }

    /// The active account, if logged in.
    #[must_use]
    pub const fn current_account(&self) -> Option<&Account> {
        self.auth.current()
    }

    /// Run checkout for the current cart.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError` (wrapped) on validation failure or an empty
    /// cart; nothing changes in that case.
    pub fn checkout(&mut self, form: &CheckoutForm) -> Result<Order> {
        let order = checkout::place_order(
            &mut self.cart,
            &mut self.orders,
            &mut self.notifications,
            form,
            Utc::now(),
        )?;
        self.toasts.push(
            ToastLevel::Success,
            format!("Order {} placed", order.order_number),
        );
        Ok(order)
    }

    /// The featured shelf, sized by configuration.
    #[must_use]
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.featured(self.config.featured_count)
    }

    /// Build the dashboard projection for the active user.
    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        dashboard::build(
            &self.auth.resolved_user_id(),
            &self.orders,
            &self.profile,
            Utc::now(),
        )
    }
}
