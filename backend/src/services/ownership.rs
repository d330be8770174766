//! Resource ownership policy
//!
//! Resource services call [`assert_owner`] after the existence check, so a
//! missing resource is reported as `NotFound` and an existing resource owned
//! by someone else as `Forbidden`. The order matters: existence is decided
//! first, ownership second.

use crate::error::ApiError;
use crate::repositories::PortfolioRecord;
use uuid::Uuid;

/// A resource with a recorded owner.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

impl Owned for PortfolioRecord {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// Fail with `Forbidden` unless `user_id` owns the resource.
pub fn assert_owner<R: Owned>(user_id: Uuid, resource: &R) -> Result<(), ApiError> {
    if resource.owner_id() != user_id {
        return Err(ApiError::Forbidden(
            "Access to this portfolio is forbidden".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn portfolio_owned_by(user_id: Uuid) -> PortfolioRecord {
        PortfolioRecord {
            id: Uuid::new_v4(),
            name: "Cold storage".to_string(),
            kind: "wallet".to_string(),
            user_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_passes() {
        let owner = Uuid::new_v4();
        let portfolio = portfolio_owned_by(owner);
        assert!(assert_owner(owner, &portfolio).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let portfolio = portfolio_owned_by(Uuid::new_v4());
        let intruder = Uuid::new_v4();
        match assert_owner(intruder, &portfolio) {
            Err(ApiError::Forbidden(_)) => {}
            other => panic!("expected Forbidden, got {:?}", other.map(|_| ())),
        }
    }
}
