//! Field-for-field translation between the wire and persisted forms.

use crate::model::{CarEntity, CarResource};

/// Resource -> Entity
pub fn to_entity(resource: CarResource) -> CarEntity {
    CarEntity {
        id: resource.id,
        assembler: resource.assembler,
        model: resource.model,
        manufacturing_year: resource.manufacturing_year,
        model_year: resource.model_year,
    }
}

/// Entity -> Resource
pub fn to_resource(entity: CarEntity) -> CarResource {
    CarResource {
        id: entity.id,
        assembler: entity.assembler,
        model: entity.model,
        manufacturing_year: entity.manufacturing_year,
        model_year: entity.model_year,
    }
}
