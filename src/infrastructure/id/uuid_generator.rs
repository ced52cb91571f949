use uuid::Uuid;

use crate::domain::user::ports::IdGenerator;

/// UUID v4 implementation of the IdGenerator port
#[derive(Debug, Clone, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
  pub fn new() -> Self {
    Self
  }
}

impl IdGenerator for UuidGenerator {
  fn new_id(&self) -> String {
    Uuid::new_v4().to_string()
  }
}
