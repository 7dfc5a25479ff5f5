//! Выбор компании: иерархия группа → бизнес → проект, общий выбор на сессию
//! и правило видимости записей.

pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod registry;
pub mod unit;

pub use config::ScopeConfig;
pub use context::{ScopeChange, ScopeContext, SubscriptionId};
pub use error::{ScopeError, ScopeResult};
pub use filter::{BusinessScoped, ScopeFilter, ScopeFilterMode};
pub use registry::{BusinessNode, GroupNode, ScopeRegistry};
pub use unit::{OrganizationalUnit, UnitId, UnitKind, ALL_SCOPE};
