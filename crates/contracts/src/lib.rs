//! Wire contracts shared by the PKWT administration frontend: DTOs of the
//! REST API, the pagination law, list query parameters and the error taxonomy
//! of the HTTP boundary.

pub mod domain;
pub mod shared;
pub mod system;
