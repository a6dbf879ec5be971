mod delete;

use holocron_test_utils::prelude::*;

use crate::{
    error::{catalog::CatalogError, validation::ValidationError, Error},
    model::{kind::EntityKind, planet::PlanetInputDto},
    service::planet::PlanetService,
};
