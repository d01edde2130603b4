//! Strongly-typed identifiers used across the domain.
//!
//! Ids are UUIDv7: time-ordered and collision-free even when two records are
//! created within the same clock tick, which a timestamp-derived id is not.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a purchase shipment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(Uuid);

/// Identifier of a sales order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesOrderId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a fresh identifier (UUIDv7, time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(ShipmentId, "ShipmentId");
impl_uuid_newtype!(SalesOrderId, "SalesOrderId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_ids_do_not_collide() {
        let ids: Vec<ShipmentId> = (0..1000).map(|_| ShipmentId::new()).collect();
        let mut unique = ids.clone();
        unique.sort_by_key(|id| *id.as_uuid());
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn parse_round_trip() {
        let id = SalesOrderId::new();
        let parsed: SalesOrderId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-uuid".parse::<ShipmentId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }
}
