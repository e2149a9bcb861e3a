pub mod auth;
pub mod block_service;
pub mod complaint_service;
pub mod identity;
pub mod policy;
pub mod resident_service;
pub mod scope;
