//! Remote list resource: the fetch/paginate/search pattern shared by every
//! list screen, split into a pure state machine (`engine`, `detail`), data
//! providers (`source`) and the Leptos binding (`hook`).

pub mod detail;
pub mod engine;
pub mod guard;
pub mod hook;
pub mod source;

pub use detail::DetailResource;
pub use engine::{FetchTicket, ListResource, ResourceState};
pub use guard::{FetchGuard, Settle};
pub use hook::{use_list_resource, ListResourceHandle};
pub use source::{load_page, FixtureListSource, ListSource, RemoteListSource};
