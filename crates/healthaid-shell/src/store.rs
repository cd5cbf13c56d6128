//! Session-scoped identity store.
//!
//! The store holds exactly one [`Identity`] and replaces it wholesale on
//! every effective mutation. Mutation goes through [`IdentityStore::set_user_type`]
//! and [`IdentityStore::set_org_role`] only. Subscribers are notified after
//! the new value is in place, so any read they make observes it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use healthaid_core::{Identity, OrgRole, UserType};

use crate::error::ShellError;

type Listener = dyn Fn(&Identity);

/// Handle returned by [`IdentityStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub struct IdentityStore {
    current: Cell<Identity>,
    revision: Cell<u64>,
    next_subscription: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Rc<Listener>)>>,
}

impl IdentityStore {
    /// Store seeded with the default identity (plain user, no org role).
    #[must_use]
    pub fn new() -> Self {
        Self::with_identity(Identity::default())
    }

    /// Store seeded by the auth collaborator.
    #[must_use]
    pub fn with_identity(identity: Identity) -> Self {
        tracing::debug!(%identity, "identity store created");
        Self {
            current: Cell::new(identity),
            revision: Cell::new(0),
            next_subscription: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Current identity snapshot.
    #[must_use]
    pub fn identity(&self) -> Identity {
        self.current.get()
    }

    /// Number of effective mutations applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Replace the user type. Anything other than an organization also clears the org role.
    pub fn set_user_type(&self, user_type: UserType) {
        let next = self.identity().with_user_type(user_type);
        self.apply(next, "set_user_type");
    }

    /// Replace the org role. Inert while the user type is not an organization.
    pub fn set_org_role(&self, org_role: Option<OrgRole>) {
        let current = self.identity();
        if !current.is_organization() && org_role.is_some() {
            tracing::debug!(
                user_type = %current.user_type(),
                ?org_role,
                "org role ignored for non-organization identity"
            );
        }
        self.apply(current.with_org_role(org_role), "set_org_role");
    }

    /// Register a listener called with the new identity after each effective mutation.
    ///
    /// A listener removed during a notification is not called for it. When a
    /// listener mutates the store, listeners not yet reached only see the
    /// newer identity.
    pub fn subscribe(&self, listener: impl Fn(&Identity) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Lend this store to descendants.
    #[must_use]
    pub const fn scope(&self) -> IdentityScope<'_> {
        IdentityScope::provided(self)
    }

    fn apply(&self, next: Identity, operation: &'static str) {
        let previous = self.current.get();
        if previous == next {
            return;
        }

        self.current.set(next);
        self.revision.set(self.revision.get() + 1);
        tracing::debug!(
            operation,
            %previous,
            %next,
            revision = self.revision.get(),
            "identity updated"
        );

        // Listeners may subscribe, unsubscribe or mutate while being notified.
        let revision = self.revision.get();
        let listeners = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect::<Vec<_>>();
        for (id, listener) in listeners {
            // A nested mutation has already notified everyone with a newer value.
            if self.revision.get() != revision {
                break;
            }
            if self.is_subscribed(id) {
                listener(&next);
            }
        }
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(existing, _)| *existing == id)
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdentityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityStore")
            .field("identity", &self.current.get())
            .field("revision", &self.revision.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// IdentityScope
// ---------------------------------------------------------------------------

/// Non-owning view of the store handed to composition sites.
///
/// A detached scope models a component mounted outside the provider; reading
/// through it is a programmer error and fails loudly.
#[derive(Debug, Clone, Copy)]
pub struct IdentityScope<'s> {
    store: Option<&'s IdentityStore>,
}

impl<'s> IdentityScope<'s> {
    #[must_use]
    pub const fn provided(store: &'s IdentityStore) -> Self {
        Self { store: Some(store) }
    }

    #[must_use]
    pub const fn detached() -> Self {
        Self { store: None }
    }

    #[must_use]
    pub const fn is_provided(&self) -> bool {
        self.store.is_some()
    }

    /// The lent store, or `StoreNotInitialized` naming the site that asked.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::StoreNotInitialized`] for a detached scope.
    pub fn store(&self, site: &'static str) -> Result<&'s IdentityStore, ShellError> {
        self.store.ok_or_else(|| {
            tracing::error!(site, "identity read outside the store's scope");
            ShellError::StoreNotInitialized { site }
        })
    }
}
