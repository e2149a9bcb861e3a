pub mod block_repo;
pub use block_repo::BlockRepository;
pub mod resident_repo;
pub use resident_repo::ResidentRepository;
pub mod complaint_repo;
pub use complaint_repo::ComplaintRepository;
