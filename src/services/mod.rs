//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! contact sources and the search core. They provide a clean boundary
//! between the MCP handlers and the data access layer.

mod contact_search_service;

pub use contact_search_service::{
    ContactSearchRequest, ContactSearchService, ContactSearchServiceImpl, DEFAULT_LIMIT,
    DEFAULT_MAX_LIMIT,
};
