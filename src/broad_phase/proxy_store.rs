use crate::broad_phase::Proxy;
use crate::partitioning::ProxyError;
use crate::utils::hashmap::IndexMap;
use indexmap::map::Entry;

/// The set of all the proxies known to a broad phase, indexed by their identifier.
///
/// Iteration follows the insertion order of the proxies, which makes every pass over the
/// store deterministic.
#[derive(Clone, Debug, Default)]
pub struct ProxyStore {
    proxies: IndexMap<u32, Proxy>,
}

impl ProxyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of proxies in this store.
    #[inline]
    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    /// Is this store empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// Does this store contain a proxy with the given identifier?
    #[inline]
    pub fn contains(&self, id: u32) -> bool {
        self.proxies.contains_key(&id)
    }

    /// The proxy with the given identifier.
    #[inline]
    pub fn get(&self, id: u32) -> Option<&Proxy> {
        self.proxies.get(&id)
    }

    /// A mutable reference to the proxy with the given identifier.
    #[inline]
    pub fn get_mut(&mut self, id: u32) -> Option<&mut Proxy> {
        self.proxies.get_mut(&id)
    }

    /// The proxy with the given identifier, or [`ProxyError::InvalidProxyId`].
    #[inline]
    pub fn try_get(&self, id: u32) -> Result<&Proxy, ProxyError> {
        self.get(id).ok_or(ProxyError::InvalidProxyId(id))
    }

    /// A mutable reference to the proxy with the given identifier, or
    /// [`ProxyError::InvalidProxyId`].
    #[inline]
    pub fn try_get_mut(&mut self, id: u32) -> Result<&mut Proxy, ProxyError> {
        self.get_mut(id).ok_or(ProxyError::InvalidProxyId(id))
    }

    /// Adds a proxy to this store.
    ///
    /// Fails with [`ProxyError::DuplicateInsert`] if a proxy with the same identifier is
    /// already stored, in which case the store is left unchanged.
    pub fn insert(&mut self, proxy: Proxy) -> Result<(), ProxyError> {
        match self.proxies.entry(proxy.id()) {
            Entry::Occupied(_) => Err(ProxyError::DuplicateInsert(proxy.id())),
            Entry::Vacant(entry) => {
                let _ = entry.insert(proxy);
                Ok(())
            }
        }
    }

    /// Removes a proxy from this store, preserving the order of the remaining ones.
    pub fn remove(&mut self, id: u32) -> Result<Proxy, ProxyError> {
        self.proxies
            .shift_remove(&id)
            .ok_or(ProxyError::InvalidProxyId(id))
    }

    /// Iterates through all the proxies, in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Proxy> {
        self.proxies.values()
    }

    /// Iterates mutably through all the proxies, in insertion order.
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut Proxy> {
        self.proxies.values_mut()
    }

    /// Iterates through the identifiers of all the proxies, in insertion order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.proxies.keys().copied()
    }
}
