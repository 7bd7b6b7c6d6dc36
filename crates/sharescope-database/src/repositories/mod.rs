//! Repository implementations for all ShareScope entities.

pub mod access;
pub mod group;
pub mod resource;
pub mod share;
pub mod user;

pub use access::AccessRepository;
pub use group::GroupRepository;
pub use resource::ResourceRepository;
pub use share::ShareRepository;
pub use user::UserRepository;
