//! The two representations of a car: the record kept by the store and the JSON
//! document exchanged over HTTP.

use entity_store::StoredEntity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A car as persisted by the store.
///
/// # Entity Store
/// This struct implements [`StoredEntity`], so it can be kept by a
/// [`StoreActor`](entity_store::StoreActor). `id` stays `None` until the store assigns a
/// UUID; a caller-supplied `id` is kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarEntity {
    pub id: Option<Uuid>,
    pub assembler: String,
    pub model: String,
    pub manufacturing_year: i32,
    pub model_year: i32,
}

impl StoredEntity for CarEntity {
    type Id = Uuid;

    fn id(&self) -> Option<&Uuid> {
        self.id.as_ref()
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

/// A car as carried in request and response bodies.
///
/// Every field except `id` is required when deserializing; a missing or `null`
/// year is rejected before the value reaches any handler logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub assembler: String,
    pub model: String,
    pub manufacturing_year: i32,
    pub model_year: i32,
}

impl CarResource {
    /// Creates a resource without an identifier.
    ///
    /// # Arguments
    /// * `assembler` - Manufacturer name, e.g. "Toyota"
    /// * `model` - Model name, e.g. "Corolla"
    /// * `manufacturing_year` - Year the car was built
    /// * `model_year` - Model year the car is sold as
    pub fn new(
        assembler: impl Into<String>,
        model: impl Into<String>,
        manufacturing_year: i32,
        model_year: i32,
    ) -> Self {
        Self {
            id: None,
            assembler: assembler.into(),
            model: model.into(),
            manufacturing_year,
            model_year,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }
}
