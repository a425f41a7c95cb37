//! Infrastructure adapters implementing the use-case contracts.

mod argon2_hasher;
mod in_memory_students_repository;
mod jwt_encrypter;

pub use argon2_hasher::Argon2Hasher;
pub use in_memory_students_repository::InMemoryStudentsRepository;
pub use jwt_encrypter::{AccessClaims, JwtEncrypter};
