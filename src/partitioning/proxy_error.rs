/// Errors returned when a proxy identifier is misused.
///
/// An operation returning one of these errors leaves the tree and the proxy store
/// untouched.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProxyError {
    /// The proxy is not tracked by the structure the operation was applied to.
    #[error("the proxy {0} is not tracked")]
    InvalidProxyId(u32),
    /// The proxy is already tracked and cannot be inserted a second time.
    #[error("the proxy {0} is already tracked")]
    DuplicateInsert(u32),
}
